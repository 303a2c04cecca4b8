//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that duration strings parse
//! - Check listen and metrics addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::duration::{parse_duration, DurationError};
use crate::config::schema::RouterConfig;
use crate::config::settings::check_listen_address;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{key} invalid: {value:?} is not a duration like \"1m\", \"90s\" or \"1h30m\" ({source})")]
    InvalidDuration {
        key: &'static str,
        value: String,
        #[source]
        source: DurationError,
    },

    #[error("{key} invalid: {value:?} is not an address like \":8080\" or \"127.0.0.1:8080\"")]
    InvalidAddress { key: &'static str, value: String },
}

/// Every validation error, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a full configuration, collecting every problem.
pub fn validate_config(config: &RouterConfig) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    for (key, value) in [
        ("server.readTimeout", &config.server.read_timeout),
        ("server.writeTimeout", &config.server.write_timeout),
    ] {
        if let Err(source) = parse_duration(value) {
            errors.push(ValidationError::InvalidDuration {
                key,
                value: value.clone(),
                source,
            });
        }
    }

    if let Err(err) = check_listen_address("server.port", &config.server.port) {
        errors.push(err);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            key: "observability.metricsAddress",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
