use crate::models::language::LanguageDescriptor;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Site-level language configuration loaded from a TOML file.
///
/// Entries here overlay the built-in table: a matching tag replaces the
/// built-in record in place, an unknown tag appends a new locale.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Language entries, in presentation order
    #[serde(default)]
    pub languages: Vec<LanguageDescriptor>,
}

impl SiteConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Rejects empty names, empty tags, and tags that collide after
    /// normalization. Failures here are authoring errors and fatal at load.
    pub fn validate(&self) -> Result<()> {
        let mut seen_tags = HashSet::new();

        for language in &self.languages {
            if language.name.is_empty() {
                return Err(anyhow::anyhow!(
                    "Language '{}' has empty name",
                    language.tag
                ));
            }

            let key = language.normalized_tag();
            if key.is_empty() {
                return Err(anyhow::anyhow!(
                    "Language '{}' has empty tag",
                    language.name
                ));
            }

            if !seen_tags.insert(key) {
                return Err(anyhow::anyhow!(
                    "Duplicate language tag '{}'",
                    language.tag
                ));
            }
        }

        Ok(())
    }

    /// Create a template configuration
    pub fn template() -> String {
        r#"# Site language configuration
# Entries overlay the built-in language table: a matching tag replaces the
# built-in record (keeping its menu position), a new tag appends a locale.

[[languages]]
enabled = true
name = "English"
tag = "en"

[[languages]]
enabled = false
name = "简体中文"
tag = "zh-Hans"

[[languages]]
enabled = false
name = "繁體中文"
tag = "zh-Hant"
"#
        .to_string()
    }
}
