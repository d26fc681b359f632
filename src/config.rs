//! Settings loaded from `~/.config/pinyin-annotate/config.toml`.
//!
//! ```toml
//! suffix = "_pinyin"
//! preview = true
//!
//! [lookup]
//! style = "marked"
//! dictionary = "readings.tsv"
//!
//! [lookup.overrides]
//! "行" = "háng"
//! ```
//!
//! Every key is optional. A relative `dictionary` path is resolved against
//! the directory holding the config file.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::lookup::table::single_char;
use crate::lookup::{LookupConfig, TableLookup, ToneStyle};
use crate::storage::DEFAULT_SUFFIX;

/// Resolved settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Inserted before the extension of generated output names.
    pub suffix: String,
    /// Print the converted text after writing it.
    pub preview: bool,
    pub lookup: LookupConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            preview: true,
            lookup: LookupConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    suffix: Option<String>,
    preview: Option<bool>,
    #[serde(default)]
    lookup: LookupSection,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct LookupSection {
    #[serde(default)]
    style: ToneStyle,
    dictionary: Option<PathBuf>,
    #[serde(default)]
    overrides: BTreeMap<String, String>,
}

impl Settings {
    /// Load settings.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is tried and a missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = config_path();
                if !default.exists() {
                    debug!(path = %default.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml(&content, base)
            .with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Parse settings from TOML text, resolving relative paths against `base`.
    pub fn from_toml(content: &str, base: &Path) -> Result<Self> {
        let file: SettingsFile = toml::from_str(content)?;

        let mut overrides = HashMap::new();
        if let Some(dictionary) = &file.lookup.dictionary {
            let path = base.join(dictionary);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read dictionary {}", path.display()))?;
            let table = TableLookup::parse(&text)
                .with_context(|| format!("invalid dictionary {}", path.display()))?;
            debug!(path = %path.display(), entries = table.len(), "loaded dictionary");
            overrides.extend(table.into_entries());
        }

        // inline overrides win over dictionary entries
        for (key, reading) in file.lookup.overrides {
            let Some(ch) = single_char(&key) else {
                bail!("override key {key:?} must be exactly one character");
            };
            let reading = reading.trim();
            if reading.is_empty() {
                bail!("override for {key:?} has an empty reading");
            }
            overrides.insert(ch, reading.to_string());
        }

        let suffix = file.suffix.unwrap_or_else(|| DEFAULT_SUFFIX.to_string());
        if suffix.contains(['/', '\\']) {
            bail!("suffix {suffix:?} must not contain path separators");
        }

        Ok(Self {
            suffix,
            preview: file.preview.unwrap_or(true),
            lookup: LookupConfig {
                style: file.lookup.style,
                overrides,
            },
        })
    }
}

/// Return the path to the default config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pinyin-annotate")
        .join("config.toml")
}
