//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML and every
//! field has a default, so an empty file (or no file) is a valid config.

use serde::{Deserialize, Serialize};

/// Root configuration for the analyzer.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Local listener settings (ignored when hosted on Lambda).
    pub listener: ListenerConfig,

    /// Face-analysis backend settings.
    pub rekognition: RekognitionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Which face attributes `DetectFaces` should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectAttributes {
    /// Bounding box, confidence, pose, quality and landmarks.
    #[default]
    Default,
    /// Every facial attribute the service supports.
    All,
}

/// Rekognition client configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RekognitionConfig {
    /// AWS region the client is bound to.
    pub region: String,

    /// Override endpoint (e.g., a local emulator).
    pub endpoint_url: Option<String>,

    /// Attribute set requested from face detection.
    pub detect_attributes: DetectAttributes,

    /// Minimum similarity (0-100) for a face match. Service default when unset.
    pub similarity_threshold: Option<f32>,
}

impl Default for RekognitionConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            endpoint_url: None,
            detect_attributes: DetectAttributes::Default,
            similarity_threshold: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines. Always on when hosted on Lambda.
    pub json_logs: bool,

    /// Enable the Prometheus metrics endpoint (local mode only).
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
