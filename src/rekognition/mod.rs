//! AWS Rekognition backend.
//!
//! # Data Flow
//! ```text
//! RekognitionConfig (region, endpoint, attributes)
//!     → client.rs (connector: aws-config load + Client per invocation)
//!     → DetectFaces / CompareFaces over S3 object references
//!     → convert.rs (SDK types → pass-through records)
//! ```
//!
//! # Constraints
//! - Image bytes never pass through this process; only (bucket, key) pairs
//! - No retries or timeouts beyond the SDK defaults

pub mod client;
pub mod convert;

pub use client::{RekognitionConnector, RekognitionFaces};
