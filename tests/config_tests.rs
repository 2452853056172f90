use std::fs;

use pretty_assertions::assert_eq;
use site_languages::{LanguageRegistry, SiteConfig};
use tempfile::TempDir;

/// Test that language overrides can be loaded from a config file
#[test]
fn test_config_file_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("languages.toml");

    let config_content = r#"
# Turn Simplified Chinese on for the next release
[[languages]]
enabled = true
name = "简体中文"
tag = "zh-Hans"

# Stage Japanese, not published yet
[[languages]]
enabled = false
name = "日本語"
tag = "ja"
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = SiteConfig::from_file(&config_path).unwrap();
    assert_eq!(config.languages.len(), 2);
    assert!(config.languages[0].enabled);
    assert_eq!(config.languages[1].tag, "ja");
}

#[test]
fn test_registry_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("languages.toml");

    fs::write(
        &config_path,
        r#"
[[languages]]
enabled = true
name = "简体中文"
tag = "zh-Hans"

[[languages]]
enabled = false
name = "日本語"
tag = "ja"
"#,
    )
    .unwrap();

    let registry = LanguageRegistry::from_config_file(&config_path).unwrap();

    // Overridden entry keeps its menu position, new entry lands at the end.
    assert_eq!(registry.tags(), vec!["en", "zh-Hans", "zh-Hant", "ja"]);
    assert!(registry.is_enabled("zh-Hans"));
    assert!(!registry.is_enabled("ja"));
    assert_eq!(registry.enabled_tags(), vec!["en", "zh-Hans"]);
}

#[test]
fn test_missing_config_file_fails_with_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("does-not-exist.toml");

    let err = SiteConfig::from_file(&config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_fails_with_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("languages.toml");

    fs::write(&config_path, "[[languages]\nname = oops").unwrap();

    let err = SiteConfig::from_file(&config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_duplicate_tags_rejected_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("languages.toml");

    fs::write(
        &config_path,
        r#"
[[languages]]
enabled = false
name = "简体中文"
tag = "zh-Hans"

[[languages]]
enabled = true
name = "Chinese (Simplified)"
tag = "zh_hans"
"#,
    )
    .unwrap();

    let err = SiteConfig::from_file(&config_path).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("Invalid configuration"));
    assert!(chain.contains("Duplicate language tag"));
}

#[test]
fn test_empty_name_rejected_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("languages.toml");

    fs::write(
        &config_path,
        r#"
[[languages]]
enabled = true
name = ""
tag = "fr"
"#,
    )
    .unwrap();

    let err = SiteConfig::from_file(&config_path).unwrap_err();
    assert!(format!("{err:#}").contains("empty name"));
}

#[test]
fn test_template_loads_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("languages.toml");

    fs::write(&config_path, SiteConfig::template()).unwrap();

    let registry = LanguageRegistry::from_config_file(&config_path).unwrap();
    assert_eq!(registry.tags(), vec!["en", "zh-Hans", "zh-Hant"]);
}
