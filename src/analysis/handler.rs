//! Request orchestration.
//!
//! One invocation runs strictly in order and stops at the first failure:
//!
//! ```text
//! decode → connect → detect(selfie) → detect(document)
//!        → compare(source = document, target = selfie) → assemble → encode
//! ```

use std::future::Future;
use std::time::Instant;

use thiserror::Error;

use crate::analysis::model::{
    AnalysisResponse, AnalysisResult, FaceDetail, ImageAnalysisRequest,
};
use crate::analysis::service::{FaceAnalysisConnector, FaceServiceError};
use crate::observability::metrics;

/// Failure of a step after the body was decoded.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("error creating rekognition session : {0}")]
    Connect(#[source] FaceServiceError),

    #[error("error check selfie image: {0}")]
    DetectSelfie(#[source] FaceServiceError),

    #[error("error failed to check identity document : {0}")]
    DetectDocument(#[source] FaceServiceError),

    #[error("error failed to compare selfie with identity document : {0}")]
    Compare(#[source] FaceServiceError),

    #[error("error marshalling response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Outcome of [`handle_body`] when no success body is produced.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The body did not decode as an [`ImageAnalysisRequest`].
    #[error("invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl HandlerError {
    /// Label used for the request outcome metric.
    pub fn outcome(&self) -> &'static str {
        match self {
            HandlerError::InvalidBody(_) => "invalid_body",
            HandlerError::Analysis(AnalysisError::Encode(_)) => "encode_error",
            HandlerError::Analysis(_) => "remote_error",
        }
    }
}

/// Remote steps of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Connect,
    DetectSelfie,
    DetectDocument,
    Compare,
}

impl Step {
    fn operation(self) -> &'static str {
        match self {
            Step::Connect => "connect",
            Step::DetectSelfie | Step::DetectDocument => "detect_faces",
            Step::Compare => "compare_faces",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Step::Connect => "connect",
            Step::DetectSelfie => "detect_selfie",
            Step::DetectDocument => "detect_document",
            Step::Compare => "compare",
        }
    }

    fn wrap(self, source: FaceServiceError) -> AnalysisError {
        match self {
            Step::Connect => AnalysisError::Connect(source),
            Step::DetectSelfie => AnalysisError::DetectSelfie(source),
            Step::DetectDocument => AnalysisError::DetectDocument(source),
            Step::Compare => AnalysisError::Compare(source),
        }
    }
}

/// Await one remote step, wrapping its error with the step context.
async fn attempt<T, F>(step: Step, call: F) -> Result<T, AnalysisError>
where
    F: Future<Output = Result<T, FaceServiceError>>,
{
    let started = Instant::now();
    let result = call.await;
    metrics::record_remote_call(step.operation(), result.is_ok(), started);

    result.map_err(|e| {
        tracing::error!(step = step.as_str(), error = %e, "Remote face analysis step failed");
        step.wrap(e)
    })
}

/// Keep the first detected face, or the zero-valued record if there is none.
pub fn first_or_default(faces: Vec<FaceDetail>) -> FaceDetail {
    faces.into_iter().next().unwrap_or_default()
}

/// Run the remote steps for a decoded request and assemble the response.
pub async fn analyze(
    connector: &dyn FaceAnalysisConnector,
    request: &ImageAnalysisRequest,
) -> Result<AnalysisResponse, AnalysisError> {
    let faces = attempt(Step::Connect, connector.connect()).await?;

    let selfie = request.selfie();
    let document = request.document();

    let selfie_faces = attempt(Step::DetectSelfie, faces.detect_faces(&selfie)).await?;
    if selfie_faces.len() > 1 {
        tracing::debug!(image = %selfie, faces = selfie_faces.len(), "Keeping first detected face");
    }
    let selfie_details = first_or_default(selfie_faces);

    let document_faces = attempt(Step::DetectDocument, faces.detect_faces(&document)).await?;
    if document_faces.len() > 1 {
        tracing::debug!(image = %document, faces = document_faces.len(), "Keeping first detected face");
    }
    let document_face_details = first_or_default(document_faces);

    // The document photo is the comparison source, the selfie the target.
    let selfie_matches_document =
        attempt(Step::Compare, faces.compare_faces(&document, &selfie)).await?;

    Ok(AnalysisResponse::new(AnalysisResult {
        selfie_details,
        document_face_details,
        selfie_matches_document,
    }))
}

/// Decode a raw body, analyze it and encode the JSON response.
pub async fn handle_body(
    connector: &dyn FaceAnalysisConnector,
    body: &[u8],
) -> Result<String, HandlerError> {
    let request = ImageAnalysisRequest::from_json(body).map_err(|e| {
        tracing::info!(error = %e, "Error unmarshalling request body");
        HandlerError::InvalidBody(e)
    })?;

    tracing::debug!(
        bucket = %request.bucket,
        selfie = %request.selfie_image,
        document = %request.document_image,
        "Analyzing KYC documents"
    );

    let response = analyze(connector, &request).await?;
    let encoded = serde_json::to_string(&response).map_err(AnalysisError::Encode)?;
    Ok(encoded)
}
