use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub distribution: DistributionSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub localization: LocalizationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistributionSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { ttl_secs: default_ttl_secs() }
    }
}

fn default_ttl_secs() -> u64 { 3600 }

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizationSettings {
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for LocalizationSettings {
    fn default() -> Self {
        Self { default_locale: default_locale() }
    }
}

fn default_locale() -> String { crate::models::DEFAULT_LOCALE.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Output format for the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Plain,
}

impl LoggingSettings {
    /// Parsed `format`; anything other than "json" or "pretty" is plain text
    pub fn log_format(&self) -> LogFormat {
        match self.format.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Plain,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SELFDX__)
    /// 4. DISTRIBUTION_BASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., SELFDX__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SELFDX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SELFDX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known unprefixed environment variables on top of the loaded config
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(base_url) = std::env::var("DISTRIBUTION_BASE_URL") {
        builder = builder.set_override("distribution.base_url", base_url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(CacheSettings::default().ttl_secs, 3600);
        assert_eq!(LocalizationSettings::default().default_locale, "en-GB");
        assert_eq!(default_timeout_secs(), 30);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
        assert_eq!(logging.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_parsing() {
        let with_format = |format: &str| LoggingSettings {
            level: default_log_level(),
            format: format.to_string(),
        };

        assert_eq!(with_format("JSON").log_format(), LogFormat::Json);
        assert_eq!(with_format("pretty").log_format(), LogFormat::Pretty);
        assert_eq!(with_format("compact").log_format(), LogFormat::Plain);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("self-diagnosis-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 9090

[distribution]
base_url = "https://distribution.test"

[localization]
default_locale = "cy"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.distribution.base_url, "https://distribution.test");
        assert_eq!(settings.distribution.timeout_secs, 30);
        assert_eq!(settings.cache.ttl_secs, 3600);
        assert_eq!(settings.localization.default_locale, "cy");

        std::fs::remove_dir_all(&dir).ok();
    }
}
