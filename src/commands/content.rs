//! Content Commands
//!
//! Fetch collection resources and the optional site configuration.

use serde::Deserialize;
use web_sys::Request;

use super::{fetch, response_text};
use crate::config::{parse_site_config, SiteConfig, SITE_CONFIG_URL};
use crate::error::{js_message, LoadError};
use crate::models::parse_collection;

/// Fetch `url` and parse it as a JSON array of `T`
pub async fn load_collection<T>(url: &str) -> Result<Vec<T>, LoadError>
where
    T: for<'de> Deserialize<'de>,
{
    let body = fetch_text(url).await?;
    Ok(parse_collection(&body)?)
}

/// Load `site.json`, falling back to defaults when it is missing or bad
pub async fn load_site_config() -> SiteConfig {
    let body = match fetch_text(SITE_CONFIG_URL).await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Using default site config: {}", e);
            return SiteConfig::default();
        }
    };
    match parse_site_config(&body) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", SITE_CONFIG_URL, e);
            SiteConfig::default()
        }
    }
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let request = Request::new_with_str(url).map_err(|e| LoadError::Network(js_message(&e)))?;
    let response = fetch(&request).await.map_err(LoadError::Network)?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    response_text(&response).await.map_err(LoadError::Body)
}
