//! Configuration handling
//!
//! An optional `eggshell.toml` in the working directory supplies default
//! paths for the two sources and the default links paging. Flags always
//! win over the file; the file wins over the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "eggshell.toml";

/// Default source paths
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourcesConfig {
    /// Path to the combination list
    pub combinations: PathBuf,

    /// Path to the inventory paste
    pub inventory: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            combinations: PathBuf::from("combinations.txt"),
            inventory: PathBuf::from("inventory.txt"),
        }
    }
}

/// Defaults for the links command
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct LinksConfig {
    /// Insert a post break after this many combinations
    pub break_at: Option<usize>,
}

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub links: LinksConfig,
}

impl Config {
    /// Loads `eggshell.toml` from the working directory, or defaults when
    /// the file is absent
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Path for the combination list: flag, then config, then default
    pub fn combinations_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .unwrap_or_else(|| self.sources.combinations.clone())
    }

    /// Path for the inventory paste: flag, then config, then default
    pub fn inventory_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .unwrap_or_else(|| self.sources.inventory.clone())
    }

    /// Links paging: flag, then config; no built-in break
    pub fn break_at(&self, flag: Option<usize>) -> Option<usize> {
        flag.or(self.links.break_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.sources.combinations, PathBuf::from("combinations.txt"));
        assert_eq!(config.sources.inventory, PathBuf::from("inventory.txt"));
        assert_eq!(config.links.break_at, None);
    }

    #[test]
    fn parse_config() {
        let toml = r#"
[sources]
combinations = "all_combinations.txt"

[links]
break-at = 75
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.sources.combinations,
            PathBuf::from("all_combinations.txt")
        );
        // Unset fields keep their defaults.
        assert_eq!(config.sources.inventory, PathBuf::from("inventory.txt"));
        assert_eq!(config.links.break_at, Some(75));
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/eggshell.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sources\ncombinations = 3").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn flags_win_over_config() {
        let config: Config = toml::from_str(
            r#"
[sources]
combinations = "from-config.txt"

[links]
break-at = 75
"#,
        )
        .unwrap();

        assert_eq!(
            config.combinations_path(Some(Path::new("from-flag.txt"))),
            PathBuf::from("from-flag.txt")
        );
        assert_eq!(
            config.combinations_path(None),
            PathBuf::from("from-config.txt")
        );
        assert_eq!(config.break_at(Some(10)), Some(10));
        assert_eq!(config.break_at(None), Some(75));
    }
}
