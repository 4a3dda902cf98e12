use crate::Args;
use crate::report;
use annotate::{Style, annotate_objects, annotate_people, fit_within, load_label_font};
use app_state::{AnnotateSettings, AppSettings};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;
use tracing::info;
use vision_client::{ImageAnalysis, VisionClient};

const BOX_STROKE: u32 = 3;

pub async fn run(args: Args, settings: AppSettings) -> Result<()> {
    if args.input.trim().is_empty() {
        return Err(eyre!("Give an image file path or an image URL to analyze"));
    }

    let client = VisionClient::new(
        settings.vision.endpoint.clone(),
        &settings.vision.key,
        &settings.vision.api_version,
    );

    let image_bytes = read_input(&client, &args.input).await?;
    info!("Analyzing {} ({} bytes)", args.input, image_bytes.len());
    let analysis = client.analyze(image_bytes.clone(), &args.features).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!(
            "{}",
            report::render(&analysis, settings.annotate.people_confidence_floor)
        );
    }

    write_annotated_copies(&args, &settings.annotate, &image_bytes, &analysis)
}

/// A URL input is downloaded so the exact same bytes get analyzed and
/// annotated; anything else is treated as a local file path.
async fn read_input(client: &VisionClient, input: &str) -> Result<Vec<u8>> {
    if input.starts_with("http://") || input.starts_with("https://") {
        Ok(client.fetch_image(input).await?)
    } else {
        fs::read(input).wrap_err_with(|| format!("Cannot read image file {input}"))
    }
}

fn write_annotated_copies(
    args: &Args,
    settings: &AnnotateSettings,
    image_bytes: &[u8],
    analysis: &ImageAnalysis,
) -> Result<()> {
    if analysis.objects_result.is_none() && analysis.people_result.is_none() {
        return Ok(());
    }

    let image = image::load_from_memory(image_bytes)
        .wrap_err("Cannot decode the image for annotation")?
        .to_rgb8();
    let font = load_label_font(settings.label_font.as_deref());
    let extension = preview_extension(&args.input);
    fs::create_dir_all(&args.out_dir)?;

    if let Some(objects) = &analysis.objects_result {
        let style = Style {
            color: Rgb(settings.object_color),
            stroke: BOX_STROKE,
            font_scale: settings.font_scale,
        };
        let annotated = annotate_objects(&image, &objects.values, style, font.as_ref());
        save_preview(annotated, settings, &args.out_dir.join(format!("objects.{extension}")))?;
    }

    if let Some(people) = &analysis.people_result {
        let style = Style {
            color: Rgb(settings.people_color),
            stroke: BOX_STROKE,
            font_scale: settings.font_scale,
        };
        let annotated = annotate_people(
            &image,
            &people.values,
            settings.people_confidence_floor,
            style,
            font.as_ref(),
        );
        save_preview(annotated, settings, &args.out_dir.join(format!("people.{extension}")))?;
    }

    Ok(())
}

fn save_preview(image: RgbImage, settings: &AnnotateSettings, path: &Path) -> Result<()> {
    let preview = fit_within(image, settings.preview_max_edge);
    preview
        .save(path)
        .wrap_err_with(|| format!("Cannot write annotated copy {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Annotated copies keep the input's format when the image crate can encode
/// it, and fall back to PNG otherwise (URLs with query strings, exotic
/// formats).
fn preview_extension(input: &str) -> String {
    let extension = Path::new(input)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension {
        Some(ext) if image::ImageFormat::from_extension(&ext).is_some_and(|f| f.can_write()) => ext,
        _ => "png".to_string(),
    }
}
