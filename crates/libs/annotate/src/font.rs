use ab_glyph::FontArc;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Reads the configured label font. Boxes are drawn without text labels when
/// this returns `None`.
#[must_use]
pub fn load_label_font(path: Option<&Path>) -> Option<FontArc> {
    let path = path?;
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!("Cannot read label font {path:?}: {error}");
            return None;
        }
    };
    match FontArc::try_from_vec(bytes) {
        Ok(font) => Some(font),
        Err(error) => {
            warn!("Cannot parse label font {path:?}: {error}");
            None
        }
    }
}
