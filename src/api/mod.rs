pub mod client;
pub mod models;
pub mod response;

pub use client::FirecrawlClient;
pub use models::{BrandingResult, ScrapeData};
