//! Seam between the request handler and the face-analysis backend.

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::model::{FaceComparisonResult, FaceDetail, ImageRef};

/// Errors reported by a face-analysis backend.
#[derive(Debug, Error)]
pub enum FaceServiceError {
    /// The backend client could not be constructed.
    #[error("session error: {0}")]
    Session(String),

    /// A remote operation failed.
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },
}

/// Remote face detection and comparison over stored images.
#[async_trait]
pub trait FaceAnalysis: Send + Sync {
    /// Detect faces in the image, in the order the service reports them.
    async fn detect_faces(&self, image: &ImageRef) -> Result<Vec<FaceDetail>, FaceServiceError>;

    /// Compare the face in `source` against the faces in `target`.
    async fn compare_faces(
        &self,
        source: &ImageRef,
        target: &ImageRef,
    ) -> Result<FaceComparisonResult, FaceServiceError>;
}

/// Builds a fresh backend client for one invocation.
#[async_trait]
pub trait FaceAnalysisConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn FaceAnalysis>, FaceServiceError>;
}
