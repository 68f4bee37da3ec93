//! Trader config loader.

use std::path::Path;

use trader_core::TraderConfig;

use crate::loaders::{LoadResult, read_file};

/// On-disk config formats, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ConfigFormat {
    /// JSON with comments. Parsed as JSON5, which also allows trailing commas.
    #[strum(serialize = "jsonc", serialize = "json", serialize = "json5")]
    Jsonc,
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "ron")]
    Ron,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| anyhow::anyhow!("Config file {} has no extension", path.display()))?;
        ext.parse()
            .map_err(|_| anyhow::anyhow!("Unsupported config format `{}` ({})", ext, path.display()))
    }
}

/// Loader for the trader config.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the trader config from a file.
    ///
    /// The format is picked from the extension (`.jsonc`, `.json`, `.json5`,
    /// `.toml`, `.ron`). The file is a map of trader id to entries:
    ///
    /// ```jsonc
    /// {
    ///     // Therapist
    ///     "54cb57776803fa99248b456e": [
    ///         { "id": "5448fee04bdc2dbc018b4567", "preset": false, "price": 500,
    ///           "currency": "USD", "loyaltylevel": 1, "count": 3 },
    ///     ],
    /// }
    /// ```
    pub fn load(path: &Path) -> LoadResult<TraderConfig> {
        let format = ConfigFormat::from_path(path)?;
        let content = read_file(path)?;
        Self::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("Failed to parse trader config {}: {}", path.display(), e))
    }

    /// Parse a config from a string in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> LoadResult<TraderConfig> {
        let config = match format {
            ConfigFormat::Jsonc => json5::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Ron => ron::from_str(content)?,
        };
        Ok(config)
    }
}
