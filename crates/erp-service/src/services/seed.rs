//! First-run admin account seeding

use erp_common::SeedConfig;
use erp_core::{UserDraft, UserRole};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Create the configured admin account when no live user exists yet
///
/// Returns `true` when an account was created. Seeding is skipped when no
/// admin password is configured.
#[instrument(skip_all, fields(admin = %config.admin_name))]
pub async fn seed_admin(ctx: &ServiceContext, config: &SeedConfig) -> ServiceResult<bool> {
    let Some(password) = config.admin_password.as_deref() else {
        debug!("No seed admin password configured, skipping");
        return Ok(false);
    };

    if ctx.user_repo().count().await? > 0 {
        debug!("Users already present, skipping admin seed");
        return Ok(false);
    }

    let password_hash = ctx.password_service().hash(password)?;
    let draft = UserDraft::new(&config.admin_name, &config.admin_email).with_role(UserRole::Admin);
    let user = ctx.user_repo().create(&draft, &password_hash).await?;

    info!(user_id = user.id, "Seeded admin account");

    Ok(true)
}
