//! KYC document analysis handler.
//!
//! Forwards a selfie and an identity-document photo, both referenced by S3
//! location, to AWS Rekognition and relays the detected faces plus the
//! face comparison as JSON.

pub mod analysis;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod rekognition;

pub use analysis::{FaceAnalysis, FaceAnalysisConnector};
pub use config::AnalyzerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use rekognition::RekognitionConnector;
