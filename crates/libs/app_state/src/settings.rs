use crate::{AnnotateSettings, LoggingSettings, RawSettings};
use url::Url;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub vision: VisionSettings,
    pub annotate: AnnotateSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct VisionSettings {
    pub endpoint: Url,
    pub key: String,
    pub api_version: String,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let endpoint = Url::parse(&raw.vision.endpoint).expect("Invalid vision endpoint");
        let mut annotate = raw.annotate;
        annotate.people_confidence_floor = annotate.people_confidence_floor.clamp(0.0, 1.0);

        Self {
            vision: VisionSettings {
                endpoint,
                key: raw.vision.key,
                api_version: raw.vision.api_version,
            },
            annotate,
            logging: raw.logging,
        }
    }
}
