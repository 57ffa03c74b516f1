use crate::constants::{DEFAULT_BASE_DIR, DEFAULT_INPUT_FILE};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved configuration with every value filled in.
///
/// The input document is `{base_dir}/{input_file}`; the tables are written to
/// `output_dir`, or next to the input when no output directory is given.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Directory holding the downloaded registry dump
    pub base_dir: PathBuf,
    /// File name of the dump inside `base_dir`
    pub input_file: String,
    /// Directory for the CSV tables (defaults to `base_dir`)
    pub output_dir: Option<PathBuf>,
    /// Whether to draw a progress bar while walking the document
    pub progress: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            input_file: DEFAULT_INPUT_FILE.to_string(),
            output_dir: None,
            progress: true,
        }
    }
}

impl ResolvedConfig {
    pub fn input_path(&self) -> PathBuf {
        self.base_dir.join(&self.input_file)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.base_dir.clone())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.input_file.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Input file name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration that can be loaded from a TOML file.
///
/// `base_dir` is required; every other key falls back to the defaults of
/// [`ResolvedConfig`]. Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolvedConfigFile {
    pub base_dir: PathBuf,
    #[serde(default = "default_input_file")]
    pub input_file: String,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl ResolvedConfigFile {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the TOML
    /// is malformed, `base_dir` is missing, unknown keys are present, or
    /// `input_file` is empty.
    pub fn from_toml_file(path: &Path) -> AppResult<ResolvedConfig> {
        let contents = fs::read_to_string(path)?;
        let file: ResolvedConfigFile = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        let config = ResolvedConfig {
            base_dir: file.base_dir,
            input_file: file.input_file,
            output_dir: file.output_dir,
            progress: file.progress,
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_input_file() -> String {
    DEFAULT_INPUT_FILE.to_string()
}

fn default_progress() -> bool {
    true
}
