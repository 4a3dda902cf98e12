use vision_client::ImageAnalysis;

/// Renders the analysis as a text report: one section per returned
/// component, confidences as percentages. Components the service did not
/// return are omitted entirely.
#[must_use]
pub fn render(analysis: &ImageAnalysis, people_confidence_floor: f32) -> String {
    let mut out = String::new();

    if let Some(caption) = &analysis.caption_result {
        out.push_str("=== MAIN CAPTION ===\n");
        out.push_str(&format!(
            "'{}' (confidence: {:.2}%)\n\n",
            caption.text,
            caption.confidence * 100.0
        ));
    }

    if let Some(dense) = &analysis.dense_captions_result {
        out.push_str("=== DENSE CAPTIONS ===\n");
        for caption in &dense.values {
            out.push_str(&format!(
                "'{}' (confidence: {:.2}%)\n",
                caption.text,
                caption.confidence * 100.0
            ));
        }
        out.push('\n');
    }

    if let Some(tags) = &analysis.tags_result {
        out.push_str("=== TAGS ===\n");
        for tag in &tags.values {
            out.push_str(&format!(
                "'{}' (confidence: {:.2}%)\n",
                tag.name,
                tag.confidence * 100.0
            ));
        }
        out.push('\n');
    }

    if let Some(objects) = &analysis.objects_result {
        out.push_str("=== DETECTED OBJECTS ===\n");
        for object in &objects.values {
            out.push_str(&format!(
                "- '{}' (confidence: {:.2}%)\n",
                object.label(),
                object.confidence() * 100.0
            ));
        }
        out.push('\n');
    }

    if let Some(people) = &analysis.people_result {
        out.push_str("=== DETECTED PEOPLE ===\n");
        for person in &people.values {
            if person.confidence > f64::from(people_confidence_floor) {
                out.push_str(&format!(
                    "- Person detected (confidence: {:.2}%)\n",
                    person.confidence * 100.0
                ));
            }
        }
    }

    out
}
