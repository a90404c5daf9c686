//! Markdown rendering of a scrape result.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::api::BrandingResult;
use crate::api::models::render_value;
use crate::assets::DownloadedImage;

pub const PREVIEW_CHARS: usize = 500;

pub fn generate_report(
    url: &str,
    branding: &BrandingResult,
    images: &[DownloadedImage],
    markdown: &str,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("# Brand Analysis Report\n\n");
    out.push_str(&format!("**Website**: {}  \n", url));
    out.push_str(&format!(
        "**Generated**: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str("---\n\n");

    push_colors(&mut out, branding);
    push_typography(&mut out, branding);

    out.push_str("\n## Spacing & Layout\n\n");
    if let Some(spacing) = branding.spacing() {
        push_bullets(&mut out, spacing);
    }

    push_components(&mut out, branding);
    push_images(&mut out, images);

    out.push_str("\n## Brand Personality\n\n");
    if let Some(personality) = branding.personality() {
        push_bullets(&mut out, personality);
    }

    out.push_str("\n---\n\n## Page Content Preview\n\n");
    if !markdown.is_empty() {
        out.push_str(&preview(markdown));
        out.push('\n');
    }

    out
}

fn push_colors(out: &mut String, branding: &BrandingResult) {
    out.push_str("## Color Scheme\n\n");
    out.push_str(&format!(
        "**Mode**: {}\n\n",
        branding.color_scheme().unwrap_or_else(|| "N/A".to_string())
    ));
    out.push_str("### Brand Colors\n");

    match branding.colors() {
        Some(colors) => {
            out.push_str("\n| Color Type | Hex Value |\n|------------|----------|\n");
            for (role, hex) in colors {
                out.push_str(&format!("| {} | `{}` |\n", role, render_value(hex)));
            }
        }
        None => out.push_str("\nNo color data available.\n"),
    }
}

fn push_typography(out: &mut String, branding: &BrandingResult) {
    out.push_str("\n## Typography\n\n");

    if let Some(families) = branding.typography("fontFamilies") {
        out.push_str("### Font Families\n\n");
        push_bullets(out, families);
    }

    if let Some(sizes) = branding.typography("fontSizes") {
        out.push_str("\n### Font Sizes\n\n");
        push_bullets(out, sizes);
    }

    if let Some(weights) = branding.typography("fontWeights") {
        out.push_str("\n### Font Weights\n\n");
        push_bullets(out, weights);
    }

    let fonts = branding.font_families();
    if !fonts.is_empty() {
        out.push_str("\n### Detected Fonts\n\n");
        for family in fonts {
            out.push_str(&format!("- {}\n", family));
        }
    }
}

fn push_components(out: &mut String, branding: &BrandingResult) {
    out.push_str("\n## UI Components\n\n");

    let Some(components) = branding.components() else {
        return;
    };

    for (name, data) in components {
        out.push_str(&format!("\n### {}\n\n", name));
        if let Value::Object(props) = data {
            push_bullets(out, props);
        }
    }
}

fn push_images(out: &mut String, images: &[DownloadedImage]) {
    out.push_str("\n## Brand Images\n\n");

    if images.is_empty() {
        out.push_str("No images downloaded.\n");
        return;
    }

    for image in images {
        out.push_str(&format!("- **{}**: `{}`\n", image.role, image.path.display()));
    }
}

fn push_bullets(out: &mut String, entries: &Map<String, Value>) {
    for (key, value) in entries {
        out.push_str(&format!("- **{}**: {}\n", key, render_value(value)));
    }
}

/// First [`PREVIEW_CHARS`] characters of the page, with `...` when cut.
pub fn preview(markdown: &str) -> String {
    match markdown.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &markdown[..cut]),
        None => markdown.to_string(),
    }
}
