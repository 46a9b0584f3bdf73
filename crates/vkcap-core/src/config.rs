use serde::{Deserialize, Serialize};
use vkcap_protocol::serialiser::DEFAULT_MAX_DEPTH;
use vkcap_protocol::wire::COMPRESSION_THRESHOLD;
use vkcap_protocol::{ExtensionPolicy, StreamLimits};

use crate::error::CoreError;

/// Top-level configuration, loaded from vkcap.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VkcapConfig {
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Deepest structure nesting accepted on load
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// Chained extensions with an unknown type tag: "skip" or "fail"
    #[serde(default)]
    pub unknown_extensions: ExtensionPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// LZ4-compress chunk payloads
    #[serde(default = "default_true")]
    pub compress: bool,
    /// Payloads at or below this size are stored as-is
    #[serde(default = "default_compression_threshold")]
    pub compression_threshold: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            unknown_extensions: ExtensionPolicy::default(),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            compress: true,
            compression_threshold: default_compression_threshold(),
        }
    }
}

impl StreamConfig {
    pub fn limits(&self) -> StreamLimits {
        StreamLimits {
            max_depth: self.max_depth,
            unknown_extensions: self.unknown_extensions,
        }
    }
}

impl CaptureConfig {
    /// Threshold handed to the chunk encoder; `None` disables compression.
    pub fn threshold(&self) -> Option<usize> {
        self.compress.then_some(self.compression_threshold)
    }
}

impl VkcapConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let config: VkcapConfig =
            toml::from_str(&content).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        if config.stream.max_depth == 0 {
            return Err(CoreError::ConfigError(
                "stream.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load configuration from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(CoreError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring {}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Returns the default config file path based on platform conventions.
/// Search order:
/// 1. System-wide config: `%PROGRAMDATA%\VKCAP\vkcap.toml` (Windows) or `/etc/vkcap/vkcap.toml` (Linux/macOS)
/// 2. Local fallback: `./vkcap.toml`
pub fn default_config_path() -> String {
    #[cfg(windows)]
    {
        let programdata = std::env::var("PROGRAMDATA")
            .unwrap_or_else(|_| r"C:\ProgramData".to_string());
        let system_path = format!(r"{}\VKCAP\vkcap.toml", programdata);
        if std::path::Path::new(&system_path).exists() {
            return system_path;
        }
    }
    #[cfg(not(windows))]
    {
        let system_path = "/etc/vkcap/vkcap.toml";
        if std::path::Path::new(system_path).exists() {
            return system_path.to_string();
        }
    }
    "vkcap.toml".to_string()
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

fn default_compression_threshold() -> usize {
    COMPRESSION_THRESHOLD
}

fn default_true() -> bool {
    true
}
