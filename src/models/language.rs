use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single entry of the site's language table: whether the locale is
/// published, its display name in its own script, and the locale tag keying
/// its translation resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    /// Whether the site generator should build/publish this locale
    #[serde(default)]
    pub enabled: bool,

    /// Human-readable display name, in the language's own script
    pub name: String,

    /// BCP-47-style locale tag (e.g. "zh-Hans")
    pub tag: String,
}

impl LanguageDescriptor {
    pub fn new(enabled: bool, name: &str, tag: &str) -> Self {
        Self {
            enabled,
            name: name.to_string(),
            tag: tag.to_string(),
        }
    }

    /// Canonical lookup key for this descriptor's tag.
    pub fn normalized_tag(&self) -> String {
        normalize_tag(&self.tag)
    }
}

/// Tags compare case-insensitively and `_` is treated as `-`, so "zh_HANS"
/// and "zh-Hans" normalize to the same key.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_lowercase()
}

impl PartialEq for LanguageDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_tag() == other.normalized_tag()
    }
}

impl Eq for LanguageDescriptor {}

impl Hash for LanguageDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_tag().hash(state);
    }
}
