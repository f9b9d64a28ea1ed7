// Application settings, loaded from the YAML file named by HOTO_SETTINGS

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const SETTINGS_ENV_VAR: &str = "HOTO_SETTINGS";

const DEFAULT_SETTINGS_PATH: &str = "hoto.yml";
const DEFAULT_DATABASE_PATH: &str = "hoto.db";

#[derive(Deserialize, Debug, PartialEq)]
pub struct Settings {
    pub database: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

// Resolve which settings file to read: explicit flag first, then the
// HOTO_SETTINGS environment variable, then the default path.
pub fn resolve_path(flag: Option<&str>) -> String {
    if let Some(path) = flag {
        return path.to_string();
    }
    env::var(SETTINGS_ENV_VAR).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string())
}

// Load settings from the given path. A missing file falls back to the
// defaults so the tool works against a fresh checkout; an unreadable or
// malformed file is an error.
pub fn load(path: &str) -> Result<Settings> {
    if !Path::new(path).exists() {
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path))?;

    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse settings file {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings() {
        let settings: Settings = serde_yaml::from_str("database: /var/lib/hoto/users.db").unwrap();
        assert_eq!(settings.database, "/var/lib/hoto/users.db");
    }

    #[test]
    fn test_default_settings() {
        assert_eq!(Settings::default().database, "hoto.db");
    }

    #[test]
    fn test_resolve_path_prefers_flag() {
        assert_eq!(resolve_path(Some("custom.yml")), "custom.yml");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let settings = load("does-not-exist.yml").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
