#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::font_size::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::core::render::TextStyle;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://expressjs-api-resume-random.onrender.com/";
pub const DEFAULT_RESUME_NAME: &str = "Vivek Sachan";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Fully resolved settings: defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub name: String,
    pub timeout_seconds: u64,
    pub style: TextStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            name: DEFAULT_RESUME_NAME.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            style: TextStyle::default(),
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resume_name(&self) -> &str {
        &self.name
    }

    fn request_timeout(&self) -> Option<Duration> {
        Some(Duration::from_secs(self.timeout_seconds))
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_non_empty_string("api.name", &self.name)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, 600)?;
        validate_range(
            "display.font_size",
            self.style.font_size.value(),
            MIN_FONT_SIZE,
            MAX_FONT_SIZE,
        )?;
        Ok(())
    }
}
