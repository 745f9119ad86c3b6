//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → AnalyzerConfig (validated, immutable)
//!     → shared read-only by the server and the backend connector
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the handler runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, parse_config, ConfigError};
pub use schema::{
    AnalyzerConfig, DetectAttributes, ListenerConfig, ObservabilityConfig, RekognitionConfig,
};
pub use validation::ValidationError;
