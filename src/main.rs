use std::path::PathBuf;
use std::process::ExitCode;

use brand_scraper::{
    config::{self, Config},
    error::AppError,
    output::RunArtifacts,
    scrape_brand,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Extract brand identity (colors, fonts, images) from a website using Firecrawl.
#[derive(Parser)]
#[command(name = "brand-scraper", version)]
#[command(after_help = "Examples:\n  brand-scraper https://firecrawl.dev\n  brand-scraper https://example.com --output-dir ./brand-data")]
struct Cli {
    /// Website URL to scrape
    url: String,

    /// Directory to save outputs
    #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("brand_scraper=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            if let AppError::MissingCredential(var) = e {
                eprintln!("   Set it with: export {}='fc-YOUR-API-KEY'", var);
            }
            return ExitCode::FAILURE;
        }
    };

    match scrape_brand(&config, &cli.url, &cli.output_dir).await {
        Ok(artifacts) => {
            print_summary(&artifacts);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_summary(artifacts: &RunArtifacts) {
    println!("Brand data: {}", artifacts.json_path.display());
    for image in &artifacts.images {
        println!("Image ({}): {}", image.role, image.path.display());
    }
    if let Some(screenshot) = &artifacts.screenshot_path {
        println!("Screenshot: {}", screenshot.display());
    }
    println!("Report: {}", artifacts.report_path.display());
    println!(
        "\n✨ Brand scraping complete! Output saved to: {}",
        artifacts.output_dir.display()
    );
}
