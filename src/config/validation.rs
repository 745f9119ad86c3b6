//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Every problem is
//! reported, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AnalyzerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("rekognition.region must not be empty")]
    EmptyRegion,

    #[error("{field} is not a valid socket address: '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("rekognition.similarity_threshold must be between 0 and 100, got {0}")]
    SimilarityOutOfRange(f32),

    #[error("rekognition.endpoint_url must not be empty when set")]
    EmptyEndpoint,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AnalyzerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.rekognition.region.trim().is_empty() {
        errors.push(ValidationError::EmptyRegion);
    }

    if let Some(endpoint) = &config.rekognition.endpoint_url {
        if endpoint.trim().is_empty() {
            errors.push(ValidationError::EmptyEndpoint);
        }
    }

    if let Some(threshold) = config.rekognition.similarity_threshold {
        if !(0.0..=100.0).contains(&threshold) {
            errors.push(ValidationError::SimilarityOutOfRange(threshold));
        }
    }

    check_address(
        "listener.bind_address",
        &config.listener.bind_address,
        &mut errors,
    );
    if config.observability.metrics_enabled {
        check_address(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
