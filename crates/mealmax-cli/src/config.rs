//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mealmax_core::statistics::SortBy;

/// Top-level mealmax configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealmaxConfig {
    /// Seed for the random source. Unset means entropy-seeded battles.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Default leaderboard ordering.
    #[serde(default)]
    pub leaderboard_sort: SortBy,
    /// Where tournament reports are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./mealmax-results")
}

impl Default for MealmaxConfig {
    fn default() -> Self {
        Self {
            seed: None,
            leaderboard_sort: SortBy::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `mealmax.toml` in the current directory
/// 2. `~/.config/mealmax/config.toml`
///
/// `MEALMAX_SEED` overrides the configured seed.
pub fn load_config_from(path: Option<&Path>) -> Result<MealmaxConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mealmax.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MealmaxConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MealmaxConfig::default(),
    };

    apply_env_overrides(config, std::env::var("MEALMAX_SEED").ok())
}

fn apply_env_overrides(mut config: MealmaxConfig, seed: Option<String>) -> Result<MealmaxConfig> {
    if let Some(raw) = seed {
        let seed = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid MEALMAX_SEED: '{raw}'"))?;
        config.seed = Some(seed);
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mealmax"))
}
