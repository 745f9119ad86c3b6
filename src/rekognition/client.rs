//! Rekognition-backed face analysis.
//!
//! # Responsibilities
//! - Load AWS configuration for the configured region on every connect
//! - Issue `DetectFaces` and `CompareFaces` against S3-stored images
//! - Flatten SDK errors into [`FaceServiceError`] with full context

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_rekognition::config::Region;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::types::{Attribute, Image, S3Object};
use aws_sdk_rekognition::Client;

use crate::analysis::model::{FaceComparisonResult, FaceDetail, ImageRef};
use crate::analysis::service::{FaceAnalysis, FaceAnalysisConnector, FaceServiceError};
use crate::config::{DetectAttributes, RekognitionConfig};
use crate::rekognition::convert;

/// Builds a [`RekognitionFaces`] client per invocation.
#[derive(Debug, Clone)]
pub struct RekognitionConnector {
    config: RekognitionConfig,
}

impl RekognitionConnector {
    pub fn new(config: RekognitionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RekognitionConfig {
        &self.config
    }
}

#[async_trait]
impl FaceAnalysisConnector for RekognitionConnector {
    async fn connect(&self) -> Result<Box<dyn FaceAnalysis>, FaceServiceError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.config.region.clone()));
        if let Some(endpoint) = &self.config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        if sdk_config.region().is_none() {
            return Err(FaceServiceError::Session("no AWS region resolved".to_string()));
        }
        if sdk_config.credentials_provider().is_none() {
            return Err(FaceServiceError::Session(
                "no AWS credentials provider resolved".to_string(),
            ));
        }

        tracing::debug!(region = %self.config.region, "Rekognition client created");

        Ok(Box::new(RekognitionFaces {
            client: Client::new(&sdk_config),
            attributes: self.config.detect_attributes,
            similarity_threshold: self.config.similarity_threshold,
        }))
    }
}

/// A Rekognition client bound to one invocation.
pub struct RekognitionFaces {
    client: Client,
    attributes: DetectAttributes,
    similarity_threshold: Option<f32>,
}

fn s3_image(image: &ImageRef) -> Image {
    Image::builder()
        .s3_object(
            S3Object::builder()
                .bucket(&image.bucket)
                .name(&image.key)
                .build(),
        )
        .build()
}

fn attribute(attributes: DetectAttributes) -> Attribute {
    match attributes {
        DetectAttributes::Default => Attribute::Default,
        DetectAttributes::All => Attribute::All,
    }
}

fn request_error<E>(operation: &'static str, err: E) -> FaceServiceError
where
    E: std::error::Error,
{
    FaceServiceError::Request {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
}

#[async_trait]
impl FaceAnalysis for RekognitionFaces {
    async fn detect_faces(&self, image: &ImageRef) -> Result<Vec<FaceDetail>, FaceServiceError> {
        let output = self
            .client
            .detect_faces()
            .image(s3_image(image))
            .attributes(attribute(self.attributes))
            .send()
            .await
            .map_err(|e| request_error("DetectFaces", e))?;

        let faces: Vec<FaceDetail> = output.face_details().iter().map(convert::face_detail).collect();
        tracing::debug!(image = %image, faces = faces.len(), "DetectFaces completed");
        Ok(faces)
    }

    async fn compare_faces(
        &self,
        source: &ImageRef,
        target: &ImageRef,
    ) -> Result<FaceComparisonResult, FaceServiceError> {
        let output = self
            .client
            .compare_faces()
            .source_image(s3_image(source))
            .target_image(s3_image(target))
            .set_similarity_threshold(self.similarity_threshold)
            .send()
            .await
            .map_err(|e| request_error("CompareFaces", e))?;

        tracing::debug!(
            source = %source,
            target = %target,
            matches = output.face_matches().len(),
            "CompareFaces completed"
        );
        Ok(convert::comparison(&output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s3_image_reference() {
        let image = s3_image(&ImageRef::new("kyc-bucket", "selfies/42.jpg"));
        let object = image.s3_object().unwrap();
        assert_eq!(object.bucket(), Some("kyc-bucket"));
        assert_eq!(object.name(), Some("selfies/42.jpg"));
        assert!(image.bytes().is_none());
    }

    #[test]
    fn test_attribute_mapping() {
        assert_eq!(attribute(DetectAttributes::Default), Attribute::Default);
        assert_eq!(attribute(DetectAttributes::All), Attribute::All);
    }

    #[tokio::test]
    async fn test_connect_builds_client() {
        let connector = RekognitionConnector::new(RekognitionConfig {
            endpoint_url: Some("http://127.0.0.1:1".into()),
            ..Default::default()
        });
        assert!(connector.connect().await.is_ok());
    }
}
