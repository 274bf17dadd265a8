use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::font_size::FontSize;
use crate::core::palette::Rgb;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "text-resume")]
#[command(about = "Fetch a resume over HTTP and read it in the terminal")]
pub struct CliConfig {
    #[arg(long, help = "Base URL of the resume API")]
    pub base_url: Option<String>,

    #[arg(long, help = "Name passed as the `name` query parameter")]
    pub name: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Initial font size (12-40)")]
    pub font_size: Option<f32>,

    #[arg(long, help = "Initial font color (palette name or #RRGGBB)")]
    pub font_color: Option<Rgb>,

    #[arg(long, help = "Initial background color (palette name or #RRGGBB)")]
    pub background_color: Option<Rgb>,

    #[arg(long, help = "Print the resume as plain text and exit")]
    pub print: bool,

    #[arg(long, help = "Log file used while the TUI is running")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, overlaid by the config file, overlaid by flags.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut settings)?;
        }

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(name) = &self.name {
            settings.name = name.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(size) = self.font_size {
            settings.style.font_size = FontSize::try_new("font_size", size)?;
        }
        if let Some(color) = self.font_color {
            settings.style.font_color = color;
        }
        if let Some(color) = self.background_color {
            settings.style.background = color;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::try_parse_from([
            "text-resume",
            "--name",
            "Ada Lovelace",
            "--font-color",
            "red",
            "--print",
        ])
        .unwrap();

        assert!(cli.print);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.name, "Ada Lovelace");
        assert_eq!(settings.style.font_color, Rgb::from_hex(0xFF0000));
    }

    #[test]
    fn test_bad_color_flag_is_rejected() {
        assert!(CliConfig::try_parse_from(["text-resume", "--font-color", "#12"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nname = \"From File\"\nbase_url = \"https://file.example.com/\"\n")
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_path_buf()),
            name: Some("From Flag".to_string()),
            ..CliConfig::default()
        };
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.name, "From Flag");
        assert_eq!(settings.base_url, "https://file.example.com/");
    }

    #[test]
    fn test_out_of_range_font_size_flag_is_rejected() {
        let cli = CliConfig::try_parse_from(["text-resume", "--font-size", "99"]).unwrap();
        assert!(cli.resolve().is_err());

        let cli = CliConfig::try_parse_from(["text-resume", "--font-size", "NaN"]).unwrap();
        assert!(cli.resolve().is_err());

        let cli = CliConfig::try_parse_from(["text-resume", "--font-size", "40"]).unwrap();
        assert_eq!(cli.resolve().unwrap().style.font_size.value(), 40.0);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/nonexistent/text-resume.toml")),
            ..CliConfig::default()
        };
        assert!(cli.resolve().is_err());
    }
}
