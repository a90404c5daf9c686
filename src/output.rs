use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;
use url::Url;

use crate::api::BrandingResult;
use crate::assets::DownloadedImage;
use crate::error::Result;

/// Everything one run left on disk.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub output_dir: PathBuf,
    pub json_path: PathBuf,
    pub images_dir: PathBuf,
    pub images: Vec<DownloadedImage>,
    pub screenshot_path: Option<PathBuf>,
    pub report_path: PathBuf,
}

/// File names for one run, all sharing `base_name` as prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
    base_name: String,
}

impl OutputLayout {
    /// Picks a base name that no earlier run in `dir` has used.
    ///
    /// Runs in the same second get a `_2`, `_3`, ... suffix.
    pub fn allocate(dir: &Path, url: &str, generated_at: NaiveDateTime) -> Self {
        let stem = base_name(url, generated_at);
        let mut layout = OutputLayout {
            dir: dir.to_path_buf(),
            base_name: stem.clone(),
        };

        let mut n = 2;
        while layout.is_taken() {
            layout.base_name = format!("{}_{}", stem, n);
            n += 1;
        }
        layout
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn json_path(&self) -> PathBuf {
        self.dir.join(format!("{}_brand.json", self.base_name))
    }

    pub fn images_dir(&self) -> PathBuf {
        self.dir.join(format!("{}_images", self.base_name))
    }

    pub fn screenshot_path(&self) -> PathBuf {
        self.dir.join(format!("{}_screenshot.png", self.base_name))
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.join(format!("{}_report.md", self.base_name))
    }

    fn is_taken(&self) -> bool {
        [
            self.json_path(),
            self.images_dir(),
            self.screenshot_path(),
            self.report_path(),
        ]
        .iter()
        .any(|path| path.exists())
    }

    pub async fn write_branding(&self, branding: &BrandingResult) -> Result<PathBuf> {
        let path = self.json_path();
        let json = serde_json::to_string_pretty(branding)?;
        tokio::fs::write(&path, json).await?;
        info!("✅ Saved brand data: {}", path.display());
        Ok(path)
    }

    pub async fn create_images_dir(&self) -> Result<PathBuf> {
        let path = self.images_dir();
        tokio::fs::create_dir_all(&path).await?;
        Ok(path)
    }

    pub async fn write_report(&self, report: &str) -> Result<PathBuf> {
        let path = self.report_path();
        tokio::fs::write(&path, report).await?;
        info!("✅ Generated report: {}", path.display());
        Ok(path)
    }
}

/// Host of `url` without a leading `www.`, or `unknown` when there is no host.
pub fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .map(|host| host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn base_name(url: &str, generated_at: NaiveDateTime) -> String {
    format!("{}_{}", domain_of(url), generated_at.format("%Y%m%d_%H%M%S"))
}
