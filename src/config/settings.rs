//! Configuration settings for the wiring encoder and decoder

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub input: InputConfig,
    pub decode: DecodeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Instance file holding the connectivity matrix
    pub instance_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Solver output file to decode
    pub solution_file: PathBuf,
    /// Instance size the solution was encoded with
    pub size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// DIMACS destination; stdout when absent
    pub cnf_file: Option<PathBuf>,
    /// Decoded pairing destination
    pub pairing_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputConfig {
                instance_file: PathBuf::from("input/instances/inst-1.txt"),
            },
            decode: DecodeConfig {
                solution_file: PathBuf::from("input/solutions/inst-1.sat"),
                size: 3,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                cnf_file: None,
                pairing_file: PathBuf::from("output/soln-default.txt"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.decode.size == 0 {
            anyhow::bail!("Instance size must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref instance_file) = cli_overrides.instance_file {
            self.input.instance_file = instance_file.clone();
        }
        if let Some(ref solution_file) = cli_overrides.solution_file {
            self.decode.solution_file = solution_file.clone();
        }
        if let Some(size) = cli_overrides.size {
            self.decode.size = size;
        }
        if let Some(ref cnf_file) = cli_overrides.cnf_file {
            self.output.cnf_file = Some(cnf_file.clone());
        }
        if let Some(ref pairing_file) = cli_overrides.pairing_file {
            self.output.pairing_file = pairing_file.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub instance_file: Option<PathBuf>,
    pub solution_file: Option<PathBuf>,
    pub size: Option<usize>,
    pub cnf_file: Option<PathBuf>,
    pub pairing_file: Option<PathBuf>,
}
