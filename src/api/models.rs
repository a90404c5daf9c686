use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const SCRAPE_FORMATS: [&str; 3] = ["branding", "markdown", "screenshot"];

#[derive(Serialize)]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub formats: [&'static str; 3],
}

impl<'a> ScrapeRequest<'a> {
    pub fn new(url: &'a str) -> Self {
        ScrapeRequest {
            url,
            formats: SCRAPE_FORMATS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branding: BrandingResult,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub screenshot: Option<String>,
}

/// Branding payload as returned by Firecrawl.
///
/// The shape is owned by the remote API, so the raw object is kept as-is and
/// read through accessors that treat missing or mistyped sections as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandingResult(Map<String, Value>);

impl BrandingResult {
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn color_scheme(&self) -> Option<String> {
        self.0.get("colorScheme").map(render_value)
    }

    pub fn colors(&self) -> Option<&Map<String, Value>> {
        self.section("colors")
    }

    /// One of `fontFamilies`, `fontSizes` or `fontWeights`.
    pub fn typography(&self, key: &str) -> Option<&Map<String, Value>> {
        non_empty(self.section("typography")?.get(key)?.as_object()?)
    }

    pub fn font_families(&self) -> Vec<String> {
        let Some(fonts) = self.0.get("fonts").and_then(Value::as_array) else {
            return Vec::new();
        };

        fonts
            .iter()
            .map(|font| match font.get("family") {
                Some(family) if !family.is_null() => render_value(family),
                _ => "Unknown".to_string(),
            })
            .collect()
    }

    pub fn spacing(&self) -> Option<&Map<String, Value>> {
        self.section("spacing")
    }

    pub fn components(&self) -> Option<&Map<String, Value>> {
        self.section("components")
    }

    pub fn personality(&self) -> Option<&Map<String, Value>> {
        self.section("personality")
    }

    /// Image role and source pairs, skipping null and blank entries.
    ///
    /// Sources are left as received; anything that is not a string is kept so
    /// the downloader can report it.
    pub fn images(&self) -> Vec<(&str, &Value)> {
        let Some(images) = self.section("images") else {
            return Vec::new();
        };

        images
            .iter()
            .filter(|(_, source)| match source {
                Value::Null => false,
                Value::String(url) => !url.trim().is_empty(),
                _ => true,
            })
            .map(|(role, source)| (role.as_str(), source))
            .collect()
    }

    fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        non_empty(self.0.get(key)?.as_object()?)
    }
}

/// Strings render bare, everything else in compact JSON form.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn non_empty(map: &Map<String, Value>) -> Option<&Map<String, Value>> {
    if map.is_empty() { None } else { Some(map) }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BrandingResult, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BrandingResult>::deserialize(deserializer)?.unwrap_or_default())
}
