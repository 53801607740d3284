//! Error handling utilities for repositories

use erp_core::DomainError;
use sqlx::Error as SqlxError;
use sqlx::{Postgres, QueryBuilder};

/// Convert SQLx error to DomainError
///
/// `fetch_one` is only used for `INSERT ... RETURNING` and aggregates, lookups use
/// `fetch_optional` and writes check `rows_affected`, so a missing row never reaches
/// this function as `RowNotFound`.
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Append `AND <column> = $n` when a filter value is present.
///
/// `column` must come from a fixed allow-list, never from request input.
pub fn push_eq_filter<'args, T>(
    builder: &mut QueryBuilder<'args, Postgres>,
    column: &'static str,
    value: Option<T>,
) where
    T: 'args + sqlx::Encode<'args, Postgres> + sqlx::Type<Postgres> + Send,
{
    if let Some(value) = value {
        builder.push(" AND ");
        builder.push(column);
        builder.push(" = ");
        builder.push_bind(value);
    }
}
