//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::get_app_dir;
use super::model::{Category, Priority};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_list")]
    pub default_list: String,

    #[serde(default)]
    pub add: AddDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_list: default_list(),
            add: AddDefaults::default(),
        }
    }
}

/// Defaults applied by `add` when no flag is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddDefaults {
    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub category: Category,
}

fn default_list() -> String {
    super::DEFAULT_LIST.to_string()
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(get_app_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(Self::path()?, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_load_missing_config_uses_defaults() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let config = Config::load()?;
        assert_eq!(config.default_list, "default");
        assert_eq!(config.add.priority, Priority::Medium);
        assert_eq!(config.add.category, Category::General);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_config_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let config = Config {
            default_list: "errands".to_string(),
            add: AddDefaults {
                priority: Priority::High,
                category: Category::Shopping,
            },
        };
        config.save()?;

        let loaded = Config::load()?;
        assert_eq!(loaded.default_list, "errands");
        assert_eq!(loaded.add.priority, Priority::High);
        assert_eq!(loaded.add.category, Category::Shopping);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let path = get_app_dir()?.join("config.toml");
        fs::write(&path, "default_list = \"work\"\n")?;

        let loaded = Config::load()?;
        assert_eq!(loaded.default_list, "work");
        assert_eq!(loaded.add.priority, Priority::Medium);
        Ok(())
    }
}
