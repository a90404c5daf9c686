pub mod api;
pub mod assets;
pub mod config;
pub mod error;
pub mod output;
pub mod report;

use std::path::Path;

use chrono::Local;
use tracing::info;

use api::FirecrawlClient;
use config::Config;
use error::Result;
use output::{OutputLayout, RunArtifacts};

/// Scrapes `url` and writes its brand data, images, screenshot and report
/// under `output_dir`.
///
/// Nothing is written unless the API call succeeds. Asset download failures
/// are logged and leave the asset out.
pub async fn scrape_brand(config: &Config, url: &str, output_dir: &Path) -> Result<RunArtifacts> {
    info!("🔍 Scraping brand data from: {}", url);

    let client = FirecrawlClient::new(config)?;
    let data = client.scrape(url).await?;

    tokio::fs::create_dir_all(output_dir).await?;
    let generated_at = Local::now().naive_local();
    let layout = OutputLayout::allocate(output_dir, url, generated_at);

    let json_path = layout.write_branding(&data.branding).await?;

    let images_dir = layout.create_images_dir().await?;
    let images = assets::download_images(&data.branding, &images_dir, config.asset_timeout).await;

    let screenshot_path = match data.screenshot.as_deref() {
        Some(shot) if !shot.is_empty() => {
            assets::download_screenshot(shot, &layout.screenshot_path(), config.asset_timeout)
                .await
        }
        _ => None,
    };

    let report = report::generate_report(
        url,
        &data.branding,
        &images,
        data.markdown.as_deref().unwrap_or_default(),
        generated_at,
    );
    let report_path = layout.write_report(&report).await?;

    Ok(RunArtifacts {
        output_dir: output_dir.to_path_buf(),
        json_path,
        images_dir,
        images,
        screenshot_path,
        report_path,
    })
}
