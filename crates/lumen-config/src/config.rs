//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Sphere tessellation settings.
    pub sphere: SphereConfig,
    /// Texture loading settings.
    pub textures: TextureConfig,
    /// Curve sampling settings.
    pub curve: CurveConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Sphere tessellation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SphereConfig {
    /// Sphere radius in world units.
    pub radius: f32,
    /// Samples per latitude ring (slices).
    pub longitude_segments: u32,
    /// Latitude rings including both poles (stacks).
    pub latitude_segments: u32,
}

/// Texture loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    /// Directory that relative texture file names resolve against.
    pub directory: PathBuf,
    /// Bitmap files to load.
    pub files: Vec<String>,
    /// Flip decoded rows to top-down order.
    pub flip_rows: bool,
    /// Expand decoded RGB to RGBA.
    pub expand_rgba: bool,
}

/// Curve sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurveConfig {
    /// Line segments per Bézier curve.
    pub samples: u32,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for JSON log files in debug builds.
    pub log_dir: Option<PathBuf>,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            longitude_segments: 32,
            latitude_segments: 16,
        }
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("textures"),
            files: Vec::new(),
            flip_rows: false,
            expand_rgba: false,
        }
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self { samples: 25 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// Platform config directory for lumen, e.g. `~/.config/lumen` on Linux.
///
/// Falls back to the working directory when the platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("lumen"))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl TextureConfig {
    /// Full paths of all configured texture files.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| self.directory.join(f)).collect()
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Checks values serde cannot: radius sign, curve sample count.
    ///
    /// Sphere segment counts are not checked; the tessellator clamps them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sphere.radius.is_finite() && self.sphere.radius > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "sphere.radius",
                reason: format!("must be positive, got {}", self.sphere.radius),
            });
        }
        if self.curve.samples == 0 {
            return Err(ConfigError::InvalidValue {
                field: "curve.samples",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
