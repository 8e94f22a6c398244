use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::domain::VersionLine;
use crate::error::{AutomatorError, Result};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "lae-automator.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".lae-automator.toml";

/// Represents the complete configuration for lae-automator.
///
/// Holds the version table: one entry per major release line, in file order.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub versions: VersionTable,
}

/// Raw version numbers for one major line, as written in the config file.
///
/// The new versions are optional; when absent they are derived by bumping
/// the patch of the old ones.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VersionEntry {
    pub old_core_version: String,

    #[serde(default)]
    pub new_core_version: Option<String>,

    pub old_lae_version: String,

    #[serde(default)]
    pub new_lae_version: Option<String>,
}

/// Major identifier to version entry, keeping the order of the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionTable(Vec<(String, VersionEntry)>);

impl VersionTable {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionEntry)> {
        self.0.iter().map(|(major, entry)| (major.as_str(), entry))
    }

    pub fn majors(&self) -> Vec<&str> {
        self.0.iter().map(|(major, _)| major.as_str()).collect()
    }

    pub fn get(&self, major: &str) -> Option<&VersionEntry> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == major)
            .map(|(_, entry)| entry)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for VersionTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = VersionTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of major versions")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((major, entry)) = map.next_entry::<String, VersionEntry>()? {
                    entries.push((major, entry));
                }
                Ok(VersionTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

impl VersionEntry {
    /// Resolve this entry into a [`VersionLine`] for `major`.
    pub fn resolve(&self, major: &str) -> Result<VersionLine> {
        VersionLine::resolve(
            major,
            self.old_core_version.clone(),
            self.new_core_version.clone(),
            self.old_lae_version.clone(),
            self.new_lae_version.clone(),
        )
    }

    fn validate(&self, major: &str) -> Result<()> {
        let fields = [
            ("old_core_version", Some(&self.old_core_version)),
            ("new_core_version", self.new_core_version.as_ref()),
            ("old_lae_version", Some(&self.old_lae_version)),
            ("new_lae_version", self.new_lae_version.as_ref()),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(AutomatorError::config(format!(
                        "major version {}: {} must not be empty",
                        major, field
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        for (major, entry) in config.versions.iter() {
            entry.validate(major)?;
        }
        Ok(config)
    }
}

/// Loads configuration from file or returns an empty table.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `lae-automator.toml` in current directory
/// 3. `.lae-automator.toml` in user config directory
/// 4. Empty configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or empty configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            AutomatorError::config(format!("cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}
