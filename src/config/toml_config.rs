use crate::config::Settings;
use crate::core::font_size::FontSize;
use crate::core::palette::Rgb;
use crate::utils::error::{ResumeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub name: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub font_size: Option<f32>,
    pub font_color: Option<Rgb>,
    pub background_color: Option<Rgb>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ResumeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ResumeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the value of the environment variable. Unset
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ResumeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlay the values present in the file onto `settings`. Font sizes
    /// outside [12, 40] are rejected, not clamped.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(base_url) = &self.api.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(name) = &self.api.name {
            settings.name = name.clone();
        }
        if let Some(timeout) = self.api.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(size) = self.display.font_size {
            settings.style.font_size = FontSize::try_new("display.font_size", size)?;
        }
        if let Some(color) = self.display.font_color {
            settings.style.font_color = color;
        }
        if let Some(color) = self.display.background_color {
            settings.style.background = color;
        }
        Ok(())
    }
}
