//! Conversion from SDK response types to the pass-through records.
//!
//! Field for field; nothing is dropped or reinterpreted. SDK enums are
//! carried as their wire strings.

use aws_sdk_rekognition::types as sdk;

use crate::analysis::model::{
    AgeRange, BooleanAttribute, BoundingBox, CompareFacesMatch, ComparedFace,
    ComparedSourceImageFace, Emotion, EyeDirection, FaceComparisonResult, FaceDetail, Gender,
    ImageQuality, Landmark, Pose,
};
use aws_sdk_rekognition::operation::compare_faces::CompareFacesOutput;

fn bounding_box(b: &sdk::BoundingBox) -> BoundingBox {
    BoundingBox {
        height: b.height(),
        left: b.left(),
        top: b.top(),
        width: b.width(),
    }
}

fn age_range(a: &sdk::AgeRange) -> AgeRange {
    AgeRange {
        high: a.high(),
        low: a.low(),
    }
}

fn emotion(e: &sdk::Emotion) -> Emotion {
    Emotion {
        confidence: e.confidence(),
        r#type: e.r#type().map(|t| t.as_str().to_string()),
    }
}

fn landmark(l: &sdk::Landmark) -> Landmark {
    Landmark {
        r#type: l.r#type().map(|t| t.as_str().to_string()),
        x: l.x(),
        y: l.y(),
    }
}

fn pose(p: &sdk::Pose) -> Pose {
    Pose {
        pitch: p.pitch(),
        roll: p.roll(),
        yaw: p.yaw(),
    }
}

fn quality(q: &sdk::ImageQuality) -> ImageQuality {
    ImageQuality {
        brightness: q.brightness(),
        sharpness: q.sharpness(),
    }
}

fn gender(g: &sdk::Gender) -> Gender {
    Gender {
        confidence: g.confidence(),
        value: g.value().map(|v| v.as_str().to_string()),
    }
}

fn eye_direction(e: &sdk::EyeDirection) -> EyeDirection {
    EyeDirection {
        confidence: e.confidence(),
        pitch: e.pitch(),
        yaw: e.yaw(),
    }
}

/// The SDK models every yes/no attribute as its own type with the same shape.
macro_rules! boolean_attribute {
    ($attr:expr) => {
        $attr.map(|a| BooleanAttribute {
            confidence: a.confidence(),
            value: Some(a.value()),
        })
    };
}

fn emotions(list: Option<&Vec<sdk::Emotion>>) -> Option<Vec<Emotion>> {
    list.map(|items| items.iter().map(emotion).collect())
}

fn landmarks(list: Option<&Vec<sdk::Landmark>>) -> Option<Vec<Landmark>> {
    list.map(|items| items.iter().map(landmark).collect())
}

pub fn face_detail(d: &sdk::FaceDetail) -> FaceDetail {
    FaceDetail {
        age_range: d.age_range().map(age_range),
        beard: boolean_attribute!(d.beard()),
        bounding_box: d.bounding_box().map(bounding_box),
        confidence: d.confidence(),
        emotions: emotions(d.emotions.as_ref()),
        eye_direction: d.eye_direction().map(eye_direction),
        eyeglasses: boolean_attribute!(d.eyeglasses()),
        eyes_open: boolean_attribute!(d.eyes_open()),
        face_occluded: boolean_attribute!(d.face_occluded()),
        gender: d.gender().map(gender),
        landmarks: landmarks(d.landmarks.as_ref()),
        mouth_open: boolean_attribute!(d.mouth_open()),
        mustache: boolean_attribute!(d.mustache()),
        pose: d.pose().map(pose),
        quality: d.quality().map(quality),
        smile: boolean_attribute!(d.smile()),
        sunglasses: boolean_attribute!(d.sunglasses()),
    }
}

fn compared_face(f: &sdk::ComparedFace) -> ComparedFace {
    ComparedFace {
        bounding_box: f.bounding_box().map(bounding_box),
        confidence: f.confidence(),
        emotions: emotions(f.emotions.as_ref()),
        landmarks: landmarks(f.landmarks.as_ref()),
        pose: f.pose().map(pose),
        quality: f.quality().map(quality),
        smile: boolean_attribute!(f.smile()),
    }
}

fn compare_match(m: &sdk::CompareFacesMatch) -> CompareFacesMatch {
    CompareFacesMatch {
        face: m.face().map(compared_face),
        similarity: m.similarity(),
    }
}

pub fn comparison(output: &CompareFacesOutput) -> FaceComparisonResult {
    FaceComparisonResult {
        face_matches: output
            .face_matches
            .as_ref()
            .map(|items| items.iter().map(compare_match).collect()),
        source_image_face: output
            .source_image_face()
            .map(|f| ComparedSourceImageFace {
                bounding_box: f.bounding_box().map(bounding_box),
                confidence: f.confidence(),
            }),
        source_image_orientation_correction: output
            .source_image_orientation_correction()
            .map(|o| o.as_str().to_string()),
        target_image_orientation_correction: output
            .target_image_orientation_correction()
            .map(|o| o.as_str().to_string()),
        unmatched_faces: output
            .unmatched_faces
            .as_ref()
            .map(|items| items.iter().map(compared_face).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_detail_conversion() {
        let detail = sdk::FaceDetail::builder()
            .bounding_box(
                sdk::BoundingBox::builder()
                    .width(0.5)
                    .height(0.4)
                    .left(0.1)
                    .top(0.2)
                    .build(),
            )
            .age_range(sdk::AgeRange::builder().low(25).high(35).build())
            .smile(sdk::Smile::builder().value(true).confidence(97.5).build())
            .emotions(
                sdk::Emotion::builder()
                    .r#type(sdk::EmotionName::Calm)
                    .confidence(88.0)
                    .build(),
            )
            .confidence(99.9)
            .build();

        let face = face_detail(&detail);
        assert_eq!(face.confidence, Some(99.9));
        assert_eq!(face.bounding_box.unwrap().width, Some(0.5));
        assert_eq!(face.age_range.unwrap().low, Some(25));
        assert_eq!(
            face.smile,
            Some(BooleanAttribute {
                confidence: Some(97.5),
                value: Some(true),
            })
        );
        let emotions = face.emotions.unwrap();
        assert_eq!(emotions.len(), 1);
        assert_eq!(emotions[0].r#type.as_deref(), Some("CALM"));
        assert!(face.landmarks.is_none());
        assert!(face.gender.is_none());
    }

    #[test]
    fn test_empty_face_detail_is_zero_valued() {
        let detail = sdk::FaceDetail::builder().build();
        assert_eq!(face_detail(&detail), FaceDetail::default());
    }

    #[test]
    fn test_comparison_conversion() {
        let output = CompareFacesOutput::builder()
            .face_matches(
                sdk::CompareFacesMatch::builder()
                    .similarity(98.2)
                    .face(sdk::ComparedFace::builder().confidence(99.0).build())
                    .build(),
            )
            .source_image_face(
                sdk::ComparedSourceImageFace::builder()
                    .confidence(99.5)
                    .build(),
            )
            .build();

        let result = comparison(&output);
        let matches = result.face_matches.unwrap();
        assert_eq!(matches[0].similarity, Some(98.2));
        assert_eq!(matches[0].face.as_ref().unwrap().confidence, Some(99.0));
        assert_eq!(result.source_image_face.unwrap().confidence, Some(99.5));
        assert!(result.unmatched_faces.is_none());
        assert!(result.source_image_orientation_correction.is_none());
    }
}
