//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route descriptors have exactly one kind and a handler id
//! - Validate addresses, log level, mount base and timeouts
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Template and regex syntax is checked when the route table is compiled

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route #{index} must set exactly one of `path`, `regex` or `callback` (found {found})")]
    RouteKind { index: usize, found: usize },

    #[error("route #{index} has an empty `method`")]
    EmptyMethod { index: usize },

    #[error("invalid bind address `{0}`")]
    BindAddress(String),

    #[error("invalid metrics address `{0}`")]
    MetricsAddress(String),

    #[error("unknown log level `{0}`")]
    LogLevel(String),

    #[error("base path `{0}` must start with `/`")]
    BasePath(String),

    #[error("request timeout must be greater than zero")]
    RequestTimeout,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }
    if !config.listener.base_path.starts_with('/') {
        errors.push(ValidationError::BasePath(config.listener.base_path.clone()));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    for (index, route) in config.routes.iter().enumerate() {
        let found = route.kind_count();
        if found != 1 {
            errors.push(ValidationError::RouteKind { index, found });
        }
        if route.method.trim().is_empty() {
            errors.push(ValidationError::EmptyMethod { index });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
