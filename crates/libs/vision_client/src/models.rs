use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which analyses to request from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualFeature {
    Caption,
    DenseCaptions,
    Tags,
    Objects,
    People,
}

impl VisualFeature {
    pub const ALL: [Self; 5] = [
        Self::Caption,
        Self::DenseCaptions,
        Self::Tags,
        Self::Objects,
        Self::People,
    ];

    /// The token the service expects in the `features` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Caption => "caption",
            Self::DenseCaptions => "denseCaptions",
            Self::Tags => "tags",
            Self::Objects => "objects",
            Self::People => "people",
        }
    }
}

impl fmt::Display for VisualFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("Unknown visual feature: {0}")]
pub struct UnknownFeature(String);

impl FromStr for VisualFeature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "caption" => Ok(Self::Caption),
            "densecaptions" => Ok(Self::DenseCaptions),
            "tags" => Ok(Self::Tags),
            "objects" => Ok(Self::Objects),
            "people" => Ok(Self::People),
            _ => Err(UnknownFeature(s.to_string())),
        }
    }
}

/// Axis-aligned pixel rectangle identifying a detected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Caption {
    pub text: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenseCaption {
    pub text: String,
    pub confidence: f64,
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DenseCaptionsResult {
    pub values: Vec<DenseCaption>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagsResult {
    pub values: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedObject {
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl DetectedObject {
    /// The service lists an object's most likely tag first.
    #[must_use]
    pub fn label(&self) -> &str {
        self.tags.first().map_or("object", |tag| tag.name.as_str())
    }

    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.tags.first().map_or(0.0, |tag| tag.confidence)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObjectsResult {
    pub values: Vec<DetectedObject>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedPerson {
    pub bounding_box: BoundingBox,
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PeopleResult {
    pub values: Vec<DetectedPerson>,
}

/// Everything the service returned for one image. Sections that were not
/// requested, or that produced nothing, are absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub metadata: Option<ImageMetadata>,
    #[serde(default)]
    pub caption_result: Option<Caption>,
    #[serde(default)]
    pub dense_captions_result: Option<DenseCaptionsResult>,
    #[serde(default)]
    pub tags_result: Option<TagsResult>,
    #[serde(default)]
    pub objects_result: Option<ObjectsResult>,
    #[serde(default)]
    pub people_result: Option<PeopleResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "modelVersion": "2023-10-01",
        "metadata": { "width": 1038, "height": 692 },
        "captionResult": { "text": "a dog on a beach", "confidence": 0.8894 },
        "denseCaptionsResult": {
            "values": [
                { "text": "a dog on a beach", "confidence": 0.8894,
                  "boundingBox": { "x": 0, "y": 0, "w": 1038, "h": 692 } },
                { "text": "a wave in the background", "confidence": 0.7211,
                  "boundingBox": { "x": 120, "y": 31, "w": 400, "h": 150 } }
            ]
        },
        "tagsResult": {
            "values": [
                { "name": "outdoor", "confidence": 0.99 },
                { "name": "dog", "confidence": 0.94 }
            ]
        },
        "objectsResult": {
            "values": [
                { "boundingBox": { "x": 320, "y": 220, "w": 280, "h": 310 },
                  "tags": [ { "name": "dog", "confidence": 0.84 } ] }
            ]
        },
        "peopleResult": {
            "values": [
                { "boundingBox": { "x": 12, "y": 8, "w": 60, "h": 180 }, "confidence": 0.91 },
                { "boundingBox": { "x": 700, "y": 10, "w": 55, "h": 170 }, "confidence": 0.12 }
            ]
        }
    }"#;

    #[test]
    fn deserializes_full_response() -> Result<(), serde_json::Error> {
        let analysis: ImageAnalysis = serde_json::from_str(FULL_RESPONSE)?;

        let caption = analysis.caption_result.expect("caption present");
        assert_eq!(caption.text, "a dog on a beach");

        let dense = analysis.dense_captions_result.expect("dense captions present");
        assert_eq!(dense.values.len(), 2);
        assert_eq!(dense.values[1].bounding_box.x, 120);

        let objects = analysis.objects_result.expect("objects present");
        assert_eq!(objects.values[0].label(), "dog");
        assert!((objects.values[0].confidence() - 0.84).abs() < 1e-9);

        let people = analysis.people_result.expect("people present");
        assert_eq!(people.values[0].bounding_box.h, 180);
        Ok(())
    }

    #[test]
    fn deserializes_caption_only_response() -> Result<(), serde_json::Error> {
        let body = r#"{
            "modelVersion": "2023-10-01",
            "metadata": { "width": 100, "height": 100 },
            "captionResult": { "text": "a thing", "confidence": 0.5 }
        }"#;
        let analysis: ImageAnalysis = serde_json::from_str(body)?;
        assert!(analysis.caption_result.is_some());
        assert!(analysis.tags_result.is_none());
        assert!(analysis.objects_result.is_none());
        assert!(analysis.people_result.is_none());
        Ok(())
    }

    #[test]
    fn object_without_tags_gets_fallback_label() -> Result<(), serde_json::Error> {
        let body = r#"{ "boundingBox": { "x": 1, "y": 2, "w": 3, "h": 4 } }"#;
        let object: DetectedObject = serde_json::from_str(body)?;
        assert_eq!(object.label(), "object");
        assert!(object.confidence() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn feature_tokens_match_service_spelling() {
        let tokens: Vec<&str> = VisualFeature::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            tokens,
            vec!["caption", "denseCaptions", "tags", "objects", "people"]
        );
    }

    #[test]
    fn features_parse_case_insensitively() {
        let parsed: VisualFeature = "DENSECAPTIONS".parse().expect("parses");
        assert_eq!(parsed, VisualFeature::DenseCaptions);
        assert!("outlines".parse::<VisualFeature>().is_err());
    }
}
