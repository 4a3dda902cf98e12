use image::RgbImage;
use image::imageops::{self, FilterType};

/// Proportionally downsizes an image so neither edge exceeds `max_edge`.
/// Images already within bounds pass through untouched.
#[must_use]
pub fn fit_within(image: RgbImage, max_edge: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    if max_edge == 0 || (width <= max_edge && height <= max_edge) {
        return image;
    }

    let ratio = f64::from(max_edge) / f64::from(width.max(height));
    let new_width = (f64::from(width) * ratio).round().max(1.0) as u32;
    let new_height = (f64::from(height) * ratio).round().max(1.0) as u32;
    imageops::resize(&image, new_width, new_height, FilterType::Lanczos3)
}
