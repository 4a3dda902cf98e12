use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub vision: RawVisionSettings,
    pub annotate: AnnotateSettings,
    pub logging: LoggingSettings,
}

/// Connection details for the image-analysis service.
#[derive(Debug, Deserialize, Clone)]
pub struct RawVisionSettings {
    pub endpoint: String,
    pub key: String,
    pub api_version: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnnotateSettings {
    /// Outline color for detected-object boxes.
    pub object_color: [u8; 3],
    /// Outline color for people boxes.
    pub people_color: [u8; 3],
    /// Detections at or below this confidence are neither listed nor drawn.
    pub people_confidence_floor: f32,
    /// Annotated copies are scaled down so neither edge exceeds this.
    pub preview_max_edge: u32,
    /// TTF/OTF file used for box labels. Boxes stay unlabeled without one.
    pub label_font: Option<PathBuf>,
    pub font_scale: f32,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}
