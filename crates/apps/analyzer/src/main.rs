use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use app_state::load_app_settings;
use vision_client::VisualFeature;

mod report;
mod run;

#[derive(Parser, Debug)]
#[command(version, about = "Analyze an image with a cloud vision service", long_about = None)]
struct Args {
    /// Image file path or http(s) URL.
    input: String,

    /// Analyses to request: caption, denseCaptions, tags, objects, people.
    #[clap(long, value_delimiter = ',', default_values_t = VisualFeature::ALL)]
    features: Vec<VisualFeature>,

    /// Where annotated copies are written.
    #[clap(long, default_value = "analysis_output")]
    out_dir: PathBuf,

    /// Print the raw analysis as JSON instead of the text report.
    #[clap(long, default_value_t = false, action)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = load_app_settings()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run::run(Args::parse(), settings).await
}
