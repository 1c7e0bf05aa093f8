//! Site Configuration
//!
//! Owner details, the form endpoint and motion tuning. Loaded from
//! `./data/site.json` when present; every key falls back to a default.

use serde::{Deserialize, Serialize};

/// Where the optional configuration file lives
pub const SITE_CONFIG_URL: &str = "./data/site.json";

/// Marker left in the endpoint until the form service is set up
pub const ENDPOINT_PLACEHOLDER: &str = "{your-id}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub headshot: String,
    pub about: Vec<String>,
    pub achievements: Vec<String>,
    pub email: String,
    pub cv_url: String,
    pub cv_label: String,
    pub form_endpoint: String,
    pub data_dir: String,
    pub motion: MotionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Your Name".to_string(),
            tagline: "Software engineer building reliable, accessible things for the web.".to_string(),
            headshot: "./assets/headshot.jpg".to_string(),
            about: Vec::new(),
            achievements: Vec::new(),
            email: "hello@example.com".to_string(),
            cv_url: "./assets/resume.pdf".to_string(),
            cv_label: "Resume.pdf".to_string(),
            form_endpoint: format!("https://formspree.io/f/{}", ENDPOINT_PLACEHOLDER),
            data_dir: "./data".to_string(),
            motion: MotionConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Whether the form endpoint has been filled in
    pub fn form_configured(&self) -> bool {
        !is_placeholder_endpoint(&self.form_endpoint)
    }
}

pub fn is_placeholder_endpoint(endpoint: &str) -> bool {
    endpoint.contains(ENDPOINT_PLACEHOLDER)
}

/// Delays and visibility thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Milliseconds between consecutive skill badge reveals
    pub skill_stagger_ms: u32,
    pub skill_threshold: f64,
    pub skill_root_margin: String,
    pub reveal_threshold: f64,
    pub nav_threshold: f64,
    pub nav_root_margin: String,
    /// Modal close transition before it is hidden
    pub modal_close_ms: u32,
    pub typewriter_ms: u32,
    pub copied_reset_ms: u32,
    pub sticky_offset: f64,
    pub back_to_top_offset: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            skill_stagger_ms: 70,
            skill_threshold: 0.2,
            skill_root_margin: "0px 0px -20% 0px".to_string(),
            reveal_threshold: 0.15,
            nav_threshold: 0.01,
            nav_root_margin: "-50% 0px -45% 0px".to_string(),
            modal_close_ms: 200,
            typewriter_ms: 24,
            copied_reset_ms: 2000,
            sticky_offset: 8.0,
            back_to_top_offset: 600.0,
        }
    }
}

/// Parse `site.json`, keeping defaults for anything it leaves out
pub fn parse_site_config(body: &str) -> Result<SiteConfig, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_is_placeholder() {
        let config = SiteConfig::default();
        assert!(!config.form_configured());
        assert!(is_placeholder_endpoint("https://formspree.io/f/{your-id}"));
        assert!(!is_placeholder_endpoint("https://formspree.io/f/xyzabcd"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_site_config(
            r#"{"owner":"Ada","form_endpoint":"https://formspree.io/f/abc","motion":{"skill_stagger_ms":50}}"#,
        )
        .unwrap();
        assert_eq!(config.owner, "Ada");
        assert!(config.form_configured());
        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.motion.skill_stagger_ms, 50);
        assert_eq!(config.motion.modal_close_ms, 200);
        assert_eq!(config.motion.nav_root_margin, "-50% 0px -45% 0px");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(parse_site_config("{}").unwrap(), SiteConfig::default());
    }
}
