//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::{MotionConfig, SiteConfig};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<SiteConfig>,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Snapshot of the site configuration
    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn motion(&self) -> MotionConfig {
        self.config.with_value(|c| c.motion.clone())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
