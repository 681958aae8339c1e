use super::data::EmojiConfig;
use super::io::ConfigError;
use crate::emoji::entry::EmojiSet;
use crate::emoji::handle::{HandleRegistry, HandleRequest};
use crate::emoji::{EmojiCatalog, EmojiStyles};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_emoji.toml");

    let config = EmojiConfig::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, EmojiConfig::default());
    assert_eq!(config.emoji_set, EmojiSet::Twitter);
}

#[test]
fn test_config_persistence_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("emoji.toml");

    let config = EmojiConfig {
        emoji_set: EmojiSet::Google,
        image_url_template: Some("https://cdn.example.org/{set}/{code}.png".to_string()),
        definitions_path: Some(PathBuf::from("/usr/share/emoji.json")),
    };
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");

    let loaded = EmojiConfig::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_save_replaces_existing_file_without_leftovers() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("emoji.toml");
    std::fs::write(&config_path, "emoji_set = \"apple\"\n").unwrap();

    let config = EmojiConfig {
        emoji_set: EmojiSet::Facebook,
        ..Default::default()
    };
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");

    let loaded = EmojiConfig::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, ["emoji.toml"]);
}

#[test]
fn test_save_below_a_plain_file_reports_write_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let config_path = blocker.join("emoji.toml");

    let err = EmojiConfig::default().save_to_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Write { .. }));
    assert!(!config_path.exists());
}

#[test]
fn test_parse_error_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("emoji.toml");
    std::fs::write(&config_path, "emoji_set = \"comic-sans\"\n").unwrap();

    let err = EmojiConfig::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("emoji.toml"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = EmojiConfig::from_toml_str("emoji_set = \"apple\"\n").unwrap();
    assert_eq!(config.emoji_set, EmojiSet::Apple);
    assert!(config.image_url_template.is_none());
    assert!(config.definitions_path.is_none());
}

#[test]
fn test_registry_follows_template_setting() {
    let request = HandleRequest {
        unified: "\u{1F427}",
        unified_id: "1F427",
        styles: EmojiStyles::all(),
    };

    let plain = EmojiConfig::default();
    assert_eq!(plain.registry().handle_for(&request).as_str(), "1F427");

    let templated = EmojiConfig {
        emoji_set: EmojiSet::Apple,
        image_url_template: Some("{set}:{code}".to_string()),
        ..Default::default()
    };
    assert_eq!(
        templated.registry().handle_for(&request).as_str(),
        "apple:1f427"
    );
}

#[test]
fn test_configured_registry_reaches_catalog_handles() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let definitions_path = temp_dir.path().join("emoji.json");
    std::fs::write(
        &definitions_path,
        r#"[
          {"unified": "1F427", "short_names": ["penguin"],
           "has_img_twitter": true, "has_img_facebook": true},
          {"unified": "2122-FE0F", "short_names": ["tm"],
           "has_img_apple": true, "has_img_twitter": true, "has_img_facebook": false}
        ]"#,
    )
    .unwrap();

    let mut config = EmojiConfig::from_toml_str(
        "emoji_set = \"facebook\"\nimage_url_template = \"/img/{set}/{code}.png\"\n",
    )
    .unwrap();
    config.definitions_path = Some(definitions_path);
    let catalog = EmojiCatalog::load(&config).expect("definitions must parse");

    let penguin = catalog.entry_by_short_code("penguin").unwrap();
    assert_eq!(penguin.handle().as_str(), "/img/facebook/1f427.png");

    // No Facebook artwork for the trademark sign; Twitter is next in line.
    let tm = catalog.entry_by_short_code("tm").unwrap();
    assert_eq!(tm.handle().as_str(), "/img/twitter/2122-fe0f.png");
}

#[test]
fn test_default_path_is_named_emoji_toml() {
    if let Some(path) = EmojiConfig::default_path() {
        assert_eq!(path.file_name().unwrap(), "emoji.toml");
    }
}
