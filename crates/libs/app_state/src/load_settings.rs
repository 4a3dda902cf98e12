use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

pub fn load_app_settings() -> Result<AppSettings> {
    // Need to load from dotenv first so the endpoint and key can come from the environment.
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path.clone()))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    debug!("Loaded settings from {config_path:?}");
    Ok(raw_settings.into())
}

/// Immutable global settings, initialized on first access.
pub static SETTINGS: LazyLock<AppSettings> =
    LazyLock::new(|| load_app_settings().expect("Cannot load app settings."));

#[must_use]
pub fn settings() -> &'static AppSettings {
    &SETTINGS
}
