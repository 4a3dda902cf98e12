use ab_glyph::FontArc;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use vision_client::{BoundingBox, DetectedObject, DetectedPerson};

/// How boxes and labels are rendered.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: Rgb<u8>,
    /// Outline width in pixels.
    pub stroke: u32,
    /// Label height in pixels.
    pub font_scale: f32,
}

/// One rectangle plus the text drawn at its corner.
#[derive(Debug, Clone)]
pub struct BoxLabel {
    pub rect: BoundingBox,
    pub text: String,
}

/// Intersects a detection rectangle with the image bounds. Detections that
/// fall entirely outside the image, or have no area, are not drawable.
fn clamp_rect(rect: BoundingBox, width: u32, height: u32) -> Option<Rect> {
    if rect.x >= width || rect.y >= height || rect.w == 0 || rect.h == 0 {
        return None;
    }
    let w = rect.w.min(width - rect.x);
    let h = rect.h.min(height - rect.y);
    Some(Rect::at(rect.x as i32, rect.y as i32).of_size(w, h))
}

pub fn draw_boxes(image: &mut RgbImage, boxes: &[BoxLabel], style: Style, font: Option<&FontArc>) {
    let (width, height) = image.dimensions();
    for marked in boxes {
        let Some(rect) = clamp_rect(marked.rect, width, height) else {
            continue;
        };

        // Nested 1-px outlines give the stroke its width.
        for inset in 0..style.stroke {
            let w = rect.width().saturating_sub(inset * 2);
            let h = rect.height().saturating_sub(inset * 2);
            if w == 0 || h == 0 {
                break;
            }
            let inner = Rect::at(rect.left() + inset as i32, rect.top() + inset as i32).of_size(w, h);
            draw_hollow_rect_mut(image, inner, style.color);
        }

        if let Some(font) = font {
            let offset = style.stroke as i32 + 1;
            draw_text_mut(
                image,
                style.color,
                rect.left() + offset,
                rect.top() + offset,
                style.font_scale,
                font,
                &marked.text,
            );
        }
    }
}

/// Annotated copy with one labeled box per detected object.
#[must_use]
pub fn annotate_objects(
    image: &RgbImage,
    objects: &[DetectedObject],
    style: Style,
    font: Option<&FontArc>,
) -> RgbImage {
    let boxes: Vec<BoxLabel> = objects
        .iter()
        .map(|object| BoxLabel {
            rect: object.bounding_box,
            text: object.label().to_string(),
        })
        .collect();

    let mut annotated = image.clone();
    draw_boxes(&mut annotated, &boxes, style, font);
    annotated
}

/// Annotated copy with a box per person above the confidence floor.
#[must_use]
pub fn annotate_people(
    image: &RgbImage,
    people: &[DetectedPerson],
    confidence_floor: f32,
    style: Style,
    font: Option<&FontArc>,
) -> RgbImage {
    let boxes: Vec<BoxLabel> = people
        .iter()
        .filter(|person| person.confidence > f64::from(confidence_floor))
        .map(|person| BoxLabel {
            rect: person.bounding_box,
            text: "Person".to_string(),
        })
        .collect();

    let mut annotated = image.clone();
    draw_boxes(&mut annotated, &boxes, style, font);
    annotated
}
