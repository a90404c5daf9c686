use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use tracing::{info, warn};
use url::Url;

use crate::api::BrandingResult;
use crate::error::{AppError, Result};

const DEFAULT_EXTENSION: &str = ".png";

// Shared client so image and screenshot downloads reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build HTTP client")
});

/// An image saved under the run's images directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedImage {
    pub role: String,
    pub path: PathBuf,
}

pub async fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let response = CLIENT
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| AppError::AssetFetchError(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::AssetFetchError(format!(
            "HTTP {} for {}",
            status.as_u16(),
            url
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::AssetFetchError(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// File extension (with the dot) of the last path segment, `.png` when there is none.
pub fn extension_for(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let name = path.rsplit('/').next().unwrap_or_default();
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => name[idx..].to_string(),
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

fn file_stem_for(role: &str) -> String {
    role.replace(['/', '\\'], "_")
}

/// Path for `role` inside `images_dir` that no earlier image of this run uses.
///
/// Roles that sanitise to the same stem get a `_2`, `_3`, ... suffix.
fn image_path(images_dir: &Path, role: &str, url: &str, taken: &HashSet<PathBuf>) -> PathBuf {
    let stem = file_stem_for(role);
    let ext = extension_for(url);

    let mut path = images_dir.join(format!("{}{}", stem, ext));
    let mut n = 2;
    while taken.contains(&path) {
        path = images_dir.join(format!("{}_{}{}", stem, n, ext));
        n += 1;
    }
    path
}

async fn save(url: &str, path: &Path, timeout: Duration) -> Result<()> {
    let bytes = fetch_bytes(url, timeout).await?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Downloads every image the branding data references, one after another.
///
/// A failed download is logged and skipped; the returned list only holds the
/// roles that made it to disk, in the order the API listed them.
pub async fn download_images(
    branding: &BrandingResult,
    images_dir: &Path,
    timeout: Duration,
) -> Vec<DownloadedImage> {
    let mut downloaded = Vec::new();
    let mut taken = HashSet::new();

    for (role, source) in branding.images() {
        let Some(url) = source.as_str() else {
            warn!("⚠️  Failed to download {}: source is not a URL: {}", role, source);
            continue;
        };
        let path = image_path(images_dir, role, url, &taken);

        match save(url, &path, timeout).await {
            Ok(()) => {
                info!("✅ Downloaded {}: {}", role, path.display());
                taken.insert(path.clone());
                downloaded.push(DownloadedImage {
                    role: role.to_string(),
                    path,
                });
            }
            Err(e) => warn!("⚠️  Failed to download {}: {}", role, e),
        }
    }

    downloaded
}

pub async fn download_screenshot(url: &str, path: &Path, timeout: Duration) -> Option<PathBuf> {
    match save(url, path, timeout).await {
        Ok(()) => {
            info!("✅ Saved screenshot: {}", path.display());
            Some(path.to_path_buf())
        }
        Err(e) => {
            warn!("⚠️  Failed to download screenshot: {}", e);
            None
        }
    }
}
