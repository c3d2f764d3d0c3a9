//! Game configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// What the session writes to the score file when the player stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreFormat {
    /// Four `- <n> ...` lines and a blank line.
    #[default]
    Totals,
    /// A timestamped six-line score record.
    Record,
}

impl fmt::Display for ScoreFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreFormat::Totals => write!(f, "totals"),
            ScoreFormat::Record => write!(f, "record"),
        }
    }
}

impl FromStr for ScoreFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "totals" => Ok(ScoreFormat::Totals),
            "record" | "records" => Ok(ScoreFormat::Record),
            other => Err(format!("unknown score format: {other}")),
        }
    }
}

/// Top-level geoquiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoquizConfig {
    /// Directory holding `a.txt` .. `z.txt`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// File the session results are appended to.
    #[serde(default = "default_score_file")]
    pub score_file: PathBuf,
    #[serde(default)]
    pub format: ScoreFormat,
    /// Fixed seed for reproducible sessions.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("countries")
}
fn default_score_file() -> PathBuf {
    PathBuf::from("score.txt")
}

impl Default for GeoquizConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            score_file: default_score_file(),
            format: ScoreFormat::default(),
            seed: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `geoquiz.toml` in the current directory
/// 2. `~/.config/geoquiz/config.toml`
///
/// Environment variable overrides: `GEOQUIZ_DATA_DIR`, `GEOQUIZ_SCORE_FILE`.
pub fn load_config_from(path: Option<&Path>) -> Result<GeoquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("geoquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config(&path)?
        }
        None => GeoquizConfig::default(),
    };

    if let Ok(dir) = std::env::var("GEOQUIZ_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Ok(file) = std::env::var("GEOQUIZ_SCORE_FILE") {
        config.score_file = PathBuf::from(file);
    }

    Ok(config)
}

fn parse_config(path: &Path) -> Result<GeoquizConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<GeoquizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("geoquiz"))
}
