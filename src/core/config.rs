//! Configuration management for studypack.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, StudyError};
use crate::core::ingest::{DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source_file: Option<PathBuf>,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Words per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Words shared between consecutive chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Root directory for document records
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Limits configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum source file size in MB
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Level for studypack's own targets (RUST_LOG overrides)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_overlap() -> usize {
    DEFAULT_OVERLAP
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_max_file_size() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| StudyError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. STUDYPACK_CONFIG env var
    /// 2. XDG config file (~/.config/studypack/config.toml)
    /// 3. ./studypack.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let source_file = if let Ok(config_path) = env::var("STUDYPACK_CONFIG") {
            Some(PathBuf::from(config_path))
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Some(xdg_config)
            } else if Path::new("studypack.toml").exists() {
                Some(PathBuf::from("studypack.toml"))
            } else {
                None
            }
        };

        let mut config = match &source_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.source_file = source_file;

        // Default data dir moves under XDG data home
        if env::var("STUDYPACK_DATA_DIR").is_err() && config.storage.data_dir == default_data_dir()
        {
            config.storage.data_dir = xdg.data_dir.clone();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(chunk_size) = env::var("STUDYPACK_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.chunking.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("STUDYPACK_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.chunking.overlap = o;
            }
        }

        if let Ok(data_dir) = env::var("STUDYPACK_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(max_size) = env::var("STUDYPACK_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.limits.max_file_size_mb = size;
            }
        }

        if let Ok(level) = env::var("STUDYPACK_LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.logging.level = level.trim().to_lowercase();
            }
        }
        if let Ok(json) = env::var("STUDYPACK_LOG_JSON") {
            if let Ok(j) = json.parse() {
                self.logging.json = j;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_size == 0 {
            return Err(StudyError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.chunking.overlap >= self.chunking.chunk_size {
            return Err(StudyError::ConfigError(
                "Overlap must be less than chunk size".to_string(),
            ));
        }

        if self.limits.max_file_size_mb == 0 {
            return Err(StudyError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
            other => {
                return Err(StudyError::ConfigError(format!(
                    "Unknown log level '{other}' (expected trace, debug, info, warn, error or off)"
                )));
            }
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        match &self.source_file {
            Some(path) => tracing::info!("Configuration loaded from {:?}:", path),
            None => tracing::info!("Configuration loaded (defaults):"),
        }
        tracing::info!("  Chunk size: {} words", self.chunking.chunk_size);
        tracing::info!("  Overlap: {} words", self.chunking.overlap);
        tracing::info!("  Data dir: {:?}", self.storage.data_dir);
        tracing::info!("  Max file size: {} MB", self.limits.max_file_size_mb);
        tracing::info!(
            "  Logging: level={} json={}",
            self.logging.level,
            self.logging.json
        );
    }
}
