#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use brand_scraper::config::{API_KEY_VAR, API_URL_VAR, Config};
use serde_json::Value;
use tokio::net::TcpListener;

pub const API_KEY: &str = "fc-test-key";
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg"><rect fill="#FA5D19"/></svg>"##;
pub const SCREENSHOT_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake-screenshot";
pub const FAVICON_ICO: &[u8] = b"\x00\x00\x01\x00fake-icon";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    response: Value,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local stand-in for the Firecrawl scrape endpoint plus a tiny asset host.
///
/// Serves `/assets/logo.svg`, `/assets/favicon.ico` and `/assets/shot.png`;
/// every other path is a 404.
pub struct MockFirecrawl {
    pub base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockFirecrawl {
    /// `respond` receives the server's base URL so the body can point at its assets.
    pub async fn start(status: StatusCode, respond: impl FnOnce(&str) -> Value) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            response: respond(&base),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/v2/scrape", post(scrape))
            .route("/assets/logo.svg", get(|| async { LOGO_SVG }))
            .route("/assets/favicon.ico", get(|| async { FAVICON_ICO }))
            .route("/assets/shot.png", get(|| async { SCREENSHOT_PNG }))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockFirecrawl { base, requests }
    }

    pub fn api_url(&self) -> String {
        format!("{}/v2/scrape", self.base)
    }

    pub fn config(&self) -> Config {
        let api_url = self.api_url();
        Config::from_lookup(|key| match key {
            k if k == API_KEY_VAR => Some(API_KEY.to_string()),
            k if k == API_URL_VAR => Some(api_url.clone()),
            _ => None,
        })
        .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn scrape(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { authorization, body });

    (state.status, Json(state.response.clone()))
}

/// A realistic successful response whose assets live on the mock server.
pub fn brand_response(base: &str) -> Value {
    serde_json::json!({
        "success": true,
        "data": {
            "branding": {
                "colorScheme": "dark",
                "colors": {
                    "primary": "#FA5D19",
                    "accent": "#FF8A4C",
                    "background": "#0A0A0A",
                    "textPrimary": "#FFFFFF"
                },
                "typography": {
                    "fontFamilies": { "primary": "Inter", "heading": "Inter" },
                    "fontSizes": { "h1": "56px", "body": "16px" },
                    "fontWeights": { "regular": 400, "bold": 700 }
                },
                "fonts": [{ "family": "Inter" }, { "family": "Geist Mono" }],
                "spacing": { "baseUnit": 4, "borderRadius": "8px" },
                "components": {
                    "buttonPrimary": { "background": "#FA5D19", "textColor": "#FFFFFF" }
                },
                "personality": { "tone": "technical", "energy": "high" },
                "images": {
                    "logo": format!("{base}/assets/logo.svg"),
                    "favicon": format!("{base}/assets/favicon.ico"),
                    "ogImage": ""
                }
            },
            "markdown": "# Firecrawl\n\nTurn websites into LLM-ready data.",
            "screenshot": format!("{base}/assets/shot.png")
        }
    })
}

pub fn files_in(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
