//! Request, response and pass-through face records.
//!
//! The face records mirror the shapes returned by the face-analysis service.
//! Their contents are never interpreted here; they only need to survive the
//! trip from the remote client to the JSON response body. Field names keep the
//! service's PascalCase spelling and absent values serialize as `null`.

use serde::{Deserialize, Serialize};

/// Message attached to every successful analysis.
pub const RESULTS_MESSAGE: &str = "KYC Documents Analysis Results";

/// Inbound request body.
///
/// Missing fields decode to the empty string and are forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageAnalysisRequest {
    /// Object-storage container holding both images.
    pub bucket: String,
    /// Object key of the live-capture photo.
    pub selfie_image: String,
    /// Object key of the identity-document photo.
    pub document_image: String,
}

impl ImageAnalysisRequest {
    /// Decode a request body. The body must be a JSON object.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)?;
        serde_json::from_value(serde_json::Value::Object(object))
    }

    pub fn selfie(&self) -> ImageRef {
        ImageRef::new(&self.bucket, &self.selfie_image)
    }

    pub fn document(&self) -> ImageRef {
        ImageRef::new(&self.bucket, &self.document_image)
    }
}

/// Location of a stored image: (container, object key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    pub bucket: String,
    pub key: String,
}

impl ImageRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    pub height: Option<f32>,
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub width: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgeRange {
    pub high: Option<i32>,
    pub low: Option<i32>,
}

/// Yes/no facial attribute (smile, beard, eyeglasses, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BooleanAttribute {
    pub confidence: Option<f32>,
    pub value: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Gender {
    pub confidence: Option<f32>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Emotion {
    pub confidence: Option<f32>,
    pub r#type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Landmark {
    pub r#type: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pose {
    pub pitch: Option<f32>,
    pub roll: Option<f32>,
    pub yaw: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageQuality {
    pub brightness: Option<f32>,
    pub sharpness: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EyeDirection {
    pub confidence: Option<f32>,
    pub pitch: Option<f32>,
    pub yaw: Option<f32>,
}

/// Attributes of a single detected face.
///
/// `FaceDetail::default()` is the zero-valued record used when an image has
/// no detectable face.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetail {
    pub age_range: Option<AgeRange>,
    pub beard: Option<BooleanAttribute>,
    pub bounding_box: Option<BoundingBox>,
    pub confidence: Option<f32>,
    pub emotions: Option<Vec<Emotion>>,
    pub eye_direction: Option<EyeDirection>,
    pub eyeglasses: Option<BooleanAttribute>,
    pub eyes_open: Option<BooleanAttribute>,
    pub face_occluded: Option<BooleanAttribute>,
    pub gender: Option<Gender>,
    pub landmarks: Option<Vec<Landmark>>,
    pub mouth_open: Option<BooleanAttribute>,
    pub mustache: Option<BooleanAttribute>,
    pub pose: Option<Pose>,
    pub quality: Option<ImageQuality>,
    pub smile: Option<BooleanAttribute>,
    pub sunglasses: Option<BooleanAttribute>,
}

/// Face found in one side of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComparedFace {
    pub bounding_box: Option<BoundingBox>,
    pub confidence: Option<f32>,
    pub emotions: Option<Vec<Emotion>>,
    pub landmarks: Option<Vec<Landmark>>,
    pub pose: Option<Pose>,
    pub quality: Option<ImageQuality>,
    pub smile: Option<BooleanAttribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComparedSourceImageFace {
    pub bounding_box: Option<BoundingBox>,
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompareFacesMatch {
    pub face: Option<ComparedFace>,
    pub similarity: Option<f32>,
}

/// Similarity data between the faces of a source and a target image.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceComparisonResult {
    pub face_matches: Option<Vec<CompareFacesMatch>>,
    pub source_image_face: Option<ComparedSourceImageFace>,
    pub source_image_orientation_correction: Option<String>,
    pub target_image_orientation_correction: Option<String>,
    pub unmatched_faces: Option<Vec<ComparedFace>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub selfie_details: FaceDetail,
    pub document_face_details: FaceDetail,
    pub selfie_matches_document: FaceComparisonResult,
}

/// Outbound success body.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResponse {
    pub message: String,
    pub result: AnalysisResult,
}

impl AnalysisResponse {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            message: RESULTS_MESSAGE.to_string(),
            result,
        }
    }
}
