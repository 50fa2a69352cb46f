use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names accepted by the `theme` setting
pub const THEME_NAMES: &[&str] = &["matrix", "amber", "mono"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Prefix shown before the input line and on echoed commands
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub boot: BootConfig,
}

fn default_theme_name() -> String {
    "matrix".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

/// Boot sequence timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootConfig {
    /// When false every boot delay is zero. The lines are still emitted.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Divides every boot delay (2.0 plays twice as fast)
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Pause between the banner and accepting input
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_speed() -> f64 {
    1.0
}

fn default_settle_delay() -> u64 {
    500
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: default_speed(),
            settle_delay_ms: default_settle_delay(),
        }
    }
}

impl BootConfig {
    /// Settings that play the whole sequence at zero delay
    pub fn instant() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Scale a delay from the boot table by these settings.
    pub fn scale_ms(&self, delay_ms: u64) -> u64 {
        if !self.enabled {
            return 0;
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return delay_ms;
        }
        (delay_ms as f64 / self.speed).round() as u64
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            prompt: default_prompt(),
            boot: BootConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::IoError(e.to_string()))?;
            }
        }
        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// `$XDG_CONFIG_HOME/meta-landing/config.json`, or the platform equivalent
    #[cfg(feature = "runtime")]
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("meta-landing").join("config.json"))
    }

    /// Load the user's config, falling back to defaults on any problem.
    /// A missing file is not a problem and is not logged above debug.
    #[cfg(feature = "runtime")]
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// Load `path` if it exists, otherwise defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.boot.speed.is_finite() || self.boot.speed <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "boot.speed must be a positive number, got {}",
                self.boot.speed
            )));
        }

        if self.prompt.contains(['\n', '\r']) {
            return Err(ConfigError::ValidationError(
                "prompt cannot contain a line break".to_string(),
            ));
        }

        if !THEME_NAMES.contains(&self.theme.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown theme '{}' (expected one of: {})",
                self.theme,
                THEME_NAMES.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
