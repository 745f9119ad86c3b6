//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use kyc_analyzer::analysis::model::{
    BooleanAttribute, BoundingBox, CompareFacesMatch, ComparedSourceImageFace, Emotion, Pose,
};
use kyc_analyzer::analysis::{
    FaceAnalysis, FaceAnalysisConnector, FaceComparisonResult, FaceDetail, FaceServiceError,
    ImageRef,
};
use kyc_analyzer::http::AppState;
use kyc_analyzer::HttpServer;

/// A call observed by the stub backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Connect,
    Detect(ImageRef),
    Compare { source: ImageRef, target: ImageRef },
}

/// Canned behaviour for the stub backend.
#[derive(Default)]
pub struct StubBehaviour {
    faces: HashMap<String, Vec<FaceDetail>>,
    comparisons: HashMap<(String, String), FaceComparisonResult>,
    failing_keys: HashSet<String>,
    fail_connect: bool,
    fail_compare: bool,
}

impl StubBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Faces reported for an object key. Unknown keys report no faces.
    pub fn faces(mut self, key: &str, faces: Vec<FaceDetail>) -> Self {
        self.faces.insert(key.to_string(), faces);
        self
    }

    /// Comparison reported for a (source key, target key) pair.
    pub fn comparison(mut self, source: &str, target: &str, result: FaceComparisonResult) -> Self {
        self.comparisons
            .insert((source.to_string(), target.to_string()), result);
        self
    }

    pub fn fail_detect(mut self, key: &str) -> Self {
        self.failing_keys.insert(key.to_string());
        self
    }

    pub fn fail_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    pub fn fail_compare(mut self) -> Self {
        self.fail_compare = true;
        self
    }

    pub fn build(self) -> StubConnector {
        StubConnector {
            inner: Arc::new(StubInner {
                behaviour: self,
                calls: Mutex::new(Vec::new()),
            }),
        }
    }
}

struct StubInner {
    behaviour: StubBehaviour,
    calls: Mutex<Vec<Call>>,
}

impl StubInner {
    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Call-recording stand-in for the Rekognition connector.
#[derive(Clone)]
pub struct StubConnector {
    inner: Arc<StubInner>,
}

impl StubConnector {
    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// Remote calls, excluding connects.
    pub fn remote_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Connect))
            .collect()
    }

    pub fn router(&self) -> Router {
        HttpServer::build_router(AppState {
            connector: Arc::new(self.clone()),
        })
    }
}

#[async_trait]
impl FaceAnalysisConnector for StubConnector {
    async fn connect(&self) -> Result<Box<dyn FaceAnalysis>, FaceServiceError> {
        self.inner.record(Call::Connect);
        if self.inner.behaviour.fail_connect {
            return Err(FaceServiceError::Session("no credentials".into()));
        }
        Ok(Box::new(StubSession {
            inner: self.inner.clone(),
        }))
    }
}

struct StubSession {
    inner: Arc<StubInner>,
}

#[async_trait]
impl FaceAnalysis for StubSession {
    async fn detect_faces(&self, image: &ImageRef) -> Result<Vec<FaceDetail>, FaceServiceError> {
        self.inner.record(Call::Detect(image.clone()));
        let behaviour = &self.inner.behaviour;
        if behaviour.failing_keys.contains(&image.key) {
            return Err(FaceServiceError::Request {
                operation: "DetectFaces",
                message: format!("InvalidS3ObjectException: {}", image.key),
            });
        }
        Ok(behaviour.faces.get(&image.key).cloned().unwrap_or_default())
    }

    async fn compare_faces(
        &self,
        source: &ImageRef,
        target: &ImageRef,
    ) -> Result<FaceComparisonResult, FaceServiceError> {
        self.inner.record(Call::Compare {
            source: source.clone(),
            target: target.clone(),
        });
        let behaviour = &self.inner.behaviour;
        if behaviour.fail_compare {
            return Err(FaceServiceError::Request {
                operation: "CompareFaces",
                message: "InvalidParameterException".into(),
            });
        }
        Ok(behaviour
            .comparisons
            .get(&(source.key.clone(), target.key.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

/// A fully populated face record, distinguishable by `confidence`.
pub fn face(confidence: f32) -> FaceDetail {
    FaceDetail {
        bounding_box: Some(BoundingBox {
            height: Some(0.4),
            left: Some(0.3),
            top: Some(0.2),
            width: Some(0.25),
        }),
        confidence: Some(confidence),
        emotions: Some(vec![Emotion {
            confidence: Some(91.5),
            r#type: Some("CALM".into()),
        }]),
        pose: Some(Pose {
            pitch: Some(1.5),
            roll: Some(-2.0),
            yaw: Some(0.5),
        }),
        smile: Some(BooleanAttribute {
            confidence: Some(80.0),
            value: Some(false),
        }),
        ..Default::default()
    }
}

/// A comparison reporting one match with the given similarity.
pub fn comparison(similarity: f32) -> FaceComparisonResult {
    FaceComparisonResult {
        face_matches: Some(vec![CompareFacesMatch {
            face: None,
            similarity: Some(similarity),
        }]),
        source_image_face: Some(ComparedSourceImageFace {
            bounding_box: None,
            confidence: Some(99.0),
        }),
        unmatched_faces: Some(Vec::new()),
        ..Default::default()
    }
}

pub fn request_body(bucket: &str, selfie: &str, document: &str) -> String {
    serde_json::json!({
        "bucket": bucket,
        "selfieImage": selfie,
        "documentImage": document,
    })
    .to_string()
}

/// Send one request through the router.
pub async fn invoke(router: Router, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    router.oneshot(request).await.unwrap()
}

/// Split a response into status and body text.
pub async fn read(response: Response<Body>) -> (StatusCode, String) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
