//! KYC document analysis.
//!
//! # Data Flow
//! ```text
//! request body (JSON)
//!     → model.rs (ImageAnalysisRequest)
//!     → handler.rs (connect, detect selfie, detect document, compare)
//!     → service.rs (FaceAnalysis backend seam)
//!     → model.rs (AnalysisResponse)
//!     → JSON response body
//! ```
//!
//! # Design Decisions
//! - A backend client is built per invocation; nothing is shared between requests
//! - The first failing step aborts the invocation, no partial results
//! - Face records are passed through without interpretation

pub mod handler;
pub mod model;
pub mod service;

pub use handler::{analyze, first_or_default, handle_body, AnalysisError, HandlerError};
pub use model::{
    AnalysisResponse, AnalysisResult, FaceComparisonResult, FaceDetail, ImageAnalysisRequest,
    ImageRef, RESULTS_MESSAGE,
};
pub use service::{FaceAnalysis, FaceAnalysisConnector, FaceServiceError};
