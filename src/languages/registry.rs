use crate::config::SiteConfig;
use crate::models::language::{LanguageDescriptor, normalize_tag};
use anyhow::Result;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

static DEFAULT_REGISTRY: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::new);

/// Process-wide registry holding the built-in language table.
///
/// Built on first access and read-only afterwards, so it can be shared across
/// threads without synchronization.
pub fn registry() -> &'static LanguageRegistry {
    &DEFAULT_REGISTRY
}

/// Ordered collection of [`LanguageDescriptor`] records.
///
/// Insertion order is presentation order (the language-switcher menu), so the
/// registry keeps descriptors in a `Vec` and maintains a separate normalized
/// tag -> position index for lookup.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageDescriptor>,
    tag_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            languages: Vec::new(),
            tag_map: HashMap::new(),
        };

        registry.register_default_languages();
        registry
    }

    /// Built-in table plus the overrides from a TOML config file.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = SiteConfig::from_file(path)?;
        let mut registry = Self::new();
        registry.register_configured_languages(&config);
        Ok(registry)
    }

    fn register_default_languages(&mut self) {
        for descriptor in crate::languages::definitions::builtin_languages() {
            self.register_language(descriptor);
        }
    }

    /// Adds a descriptor to the registry.
    ///
    /// A descriptor whose normalized tag is already registered replaces the
    /// existing entry in place, keeping its original menu position. New tags
    /// are appended at the end.
    pub fn register_language(&mut self, descriptor: LanguageDescriptor) {
        let key = descriptor.normalized_tag();

        if let Some(&index) = self.tag_map.get(&key) {
            self.languages[index] = descriptor;
        } else {
            self.tag_map.insert(key, self.languages.len());
            self.languages.push(descriptor);
        }
    }

    /// Overlays file-based language entries onto the registry.
    ///
    /// The config is assumed validated (`SiteConfig::from_file` does that), so
    /// this never fails; entries land via [`Self::register_language`] and thus
    /// never reorder existing positions.
    pub fn register_configured_languages(&mut self, config: &SiteConfig) {
        for descriptor in &config.languages {
            self.register_language(descriptor.clone());
        }
    }

    /// All descriptors in declaration order.
    pub fn get_all(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    /// Descriptors with `enabled == true`, relative order preserved.
    pub fn get_enabled(&self) -> Vec<&LanguageDescriptor> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Looks a descriptor up by tag, tolerating case and `_` separators.
    pub fn get(&self, tag: &str) -> Option<&LanguageDescriptor> {
        let index = *self.tag_map.get(&normalize_tag(tag))?;
        self.languages.get(index)
    }

    pub fn is_supported(&self, tag: &str) -> bool {
        self.tag_map.contains_key(&normalize_tag(tag))
    }

    pub fn is_enabled(&self, tag: &str) -> bool {
        self.get(tag).is_some_and(|lang| lang.enabled)
    }

    /// All tags in declaration order, as authored (not normalized).
    pub fn tags(&self) -> Vec<&str> {
        self.languages.iter().map(|lang| lang.tag.as_str()).collect()
    }

    /// Tags of the enabled subset, declaration order preserved.
    pub fn enabled_tags(&self) -> Vec<&str> {
        self.languages
            .iter()
            .filter(|lang| lang.enabled)
            .map(|lang| lang.tag.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
