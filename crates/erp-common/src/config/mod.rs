//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, SeedConfig, ServerConfig, MIN_PRODUCTION_SECRET_LEN,
};
