//! Configuration loading from goudbench.toml
//!
//! Harness settings can live in a `goudbench.toml` discovered by walking up
//! from the current directory. CLI flags always override file values; every
//! field has a default so the file is optional.

use crate::Cli;
use goudbench_oracle::{Algorithm, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The built-in sample set used for `--files all`.
pub const DEFAULT_SAMPLE_FILES: [&str; 6] = [
    "test.txt",
    "big_lorem_ipsum.txt",
    "repeated_text.txt",
    "random_text.txt",
    "big_config.json",
    "repeated_data.json",
];

/// Harness configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HarnessConfig {
    /// Input discovery configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Root directory every file reference is resolved against
    #[serde(default = "default_root")]
    pub root: String,
    /// Accepted file extensions, leading dot included
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// File references used when `--files all` is in effect
    #[serde(default = "default_files")]
    pub default_files: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            default_files: default_files(),
        }
    }
}

fn default_root() -> String {
    "files".to_string()
}
fn default_extensions() -> Vec<String> {
    vec![".txt".to_string(), ".json".to_string()]
}
fn default_files() -> Vec<String> {
    DEFAULT_SAMPLE_FILES.iter().map(|s| s.to_string()).collect()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for results documents and debug transcripts
    #[serde(default = "default_results_dir")]
    pub results_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
        }
    }
}

fn default_results_dir() -> String {
    "results".to_string()
}

impl HarnessConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the current
    /// directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("goudbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}

/// Which file references a run tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    /// The configured default sample set.
    All,
    /// A single file or directory reference, relative to the input root.
    One(String),
}

/// Fully resolved options for one run.
///
/// Built once from CLI flags layered over `goudbench.toml`; the algorithm and
/// log level are forwarded opaquely to the oracle.
#[derive(Debug, Clone)]
pub struct Options {
    /// Diagnostic verbosity, shared by harness and oracle.
    pub log_level: LogLevel,
    /// Emit per-trial timing lines.
    pub verbose: bool,
    /// File references to test.
    pub files: FileSelection,
    /// Persist results, transcripts, and round-trip sibling files.
    pub save: bool,
    /// Encoding requested from the oracle.
    pub algorithm: Algorithm,
    /// Root directory for file references.
    pub input_root: PathBuf,
    /// Accepted extensions, leading dot included.
    pub extensions: Vec<String>,
    /// References substituted for `all`.
    pub default_files: Vec<String>,
    /// Directory for persisted results.
    pub results_dir: PathBuf,
}

impl Options {
    /// Layer CLI flags over the discovered configuration.
    pub fn from_cli(cli: &Cli, config: &HarnessConfig) -> anyhow::Result<Self> {
        let log_level: LogLevel = cli.log.parse().map_err(anyhow::Error::msg)?;
        let algorithm: Algorithm = cli.algorithm.parse().map_err(anyhow::Error::msg)?;

        let files = if cli.files == "all" {
            FileSelection::All
        } else {
            FileSelection::One(cli.files.clone())
        };

        Ok(Options {
            log_level,
            verbose: cli.verbose,
            files,
            save: cli.save,
            algorithm,
            input_root: PathBuf::from(&config.input.root),
            extensions: config.input.extensions.clone(),
            default_files: config.input.default_files.clone(),
            results_dir: PathBuf::from(&config.output.results_dir),
        })
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            log_level: LogLevel::None,
            verbose: false,
            files: FileSelection::All,
            save: false,
            algorithm: Algorithm::Best,
            input_root: PathBuf::from(default_root()),
            extensions: default_extensions(),
            default_files: default_files(),
            results_dir: PathBuf::from(default_results_dir()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.input.root, "files");
        assert_eq!(config.input.extensions, [".txt", ".json"]);
        assert_eq!(config.input.default_files.len(), 6);
        assert_eq!(config.output.results_dir, "results");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
            [input]
            root = "corpus"

            [output]
            results_dir = "out"
        "#;

        let config: HarnessConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input.root, "corpus");
        assert_eq!(config.output.results_dir, "out");
        // Defaults still apply to unset fields
        assert_eq!(config.input.extensions, [".txt", ".json"]);
    }

    #[test]
    fn cli_strings_parse_into_enums() {
        let cli = Cli {
            log: "performance".to_string(),
            verbose: true,
            files: "subdir/sample.txt".to_string(),
            save: false,
            algorithm: "rle".to_string(),
        };

        let options = Options::from_cli(&cli, &HarnessConfig::default()).unwrap();
        assert_eq!(options.log_level, LogLevel::Performance);
        assert_eq!(options.algorithm, Algorithm::Rle);
        assert_eq!(
            options.files,
            FileSelection::One("subdir/sample.txt".to_string())
        );
    }

    #[test]
    fn unknown_log_level_is_an_error() {
        let cli = Cli {
            log: "loud".to_string(),
            verbose: false,
            files: "all".to_string(),
            save: false,
            algorithm: "best".to_string(),
        };

        assert!(Options::from_cli(&cli, &HarnessConfig::default()).is_err());
    }
}
