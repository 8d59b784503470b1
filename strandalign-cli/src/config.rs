//! Configuration handling for the strandalign CLI
//!
//! Supports loading configuration from strandalign.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use strandalign_core::{AlignmentEngine, LinearScoring, ResultFormatter, Strategy};

use crate::error::{CliError, CliResult};

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "strandalign.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: LinearScoring,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Evaluation order: "bottom-up", "top-down" or "wavefront"
    #[serde(default)]
    pub strategy: Strategy,

    /// Largest memo table accepted, in cells
    #[serde(default = "default_max_cells")]
    pub max_cells: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Shortest random strand
    #[serde(default = "default_min_len")]
    pub min_len: usize,

    /// Longest random strand
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Symbols random strands are drawn from
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Character printed for a gap
    #[serde(default = "default_gap_char")]
    pub gap_char: char,

    /// Print the match line between aligned rows
    #[serde(default = "default_true")]
    pub show_matches: bool,
}

// Default value functions
fn default_max_cells() -> Option<usize> { Some(50_000_000) }
fn default_min_len() -> usize { 8 }
fn default_max_len() -> usize { 10 }
fn default_alphabet() -> String { "ATGC".to_string() }
fn default_gap_char() -> char { '-' }
fn default_true() -> bool { true }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_cells: default_max_cells(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_len: default_min_len(),
            max_len: default_max_len(),
            alphabet: default_alphabet(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            gap_char: default_gap_char(),
            show_matches: default_true(),
        }
    }
}

impl GeneratorConfig {
    pub fn alphabet_bytes(&self) -> &[u8] {
        self.alphabet.as_bytes()
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default configuration")
    }

    /// Reject values the engine or generator cannot work with.
    pub fn validate(&self) -> CliResult<()> {
        self.scoring.validate()?;

        let generator = &self.generator;
        if generator.min_len == 0 || generator.max_len < generator.min_len {
            return Err(CliError::config(format!(
                "generator length range [{}, {}] is empty",
                generator.min_len, generator.max_len
            )));
        }
        if generator.alphabet.is_empty() {
            return Err(CliError::config("generator alphabet is empty"));
        }
        if !generator.alphabet.is_ascii() {
            return Err(CliError::config(format!(
                "generator alphabet '{}' must be ASCII",
                generator.alphabet
            )));
        }
        if self.engine.max_cells == Some(0) {
            return Err(CliError::config("engine.max_cells must be positive"));
        }

        Ok(())
    }

    /// Engine built from the `[scoring]` and `[engine]` sections
    pub fn engine(&self) -> AlignmentEngine {
        AlignmentEngine::new(self.scoring)
            .with_strategy(self.engine.strategy)
            .with_max_cells(self.engine.max_cells)
    }

    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new(self.output.gap_char, self.output.show_matches)
    }
}
