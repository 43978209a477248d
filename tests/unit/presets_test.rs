//! Unit tests for presets and user preset files

use casewrap::conversion::{builtin_presets, find_preset, PresetRegistry};
use casewrap::{CaseStyle, ConversionError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_builtin_preset_names() {
    let names: Vec<String> = builtin_presets().into_iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec!["csvBindPositionJava", "columnJava", "jsonPropertyJava"]
    );
}

#[test]
fn test_json_property_preset() {
    let preset = find_preset("jsonPropertyJava").unwrap();
    assert_eq!(preset.label, "@JsonProperty for Java");
    assert_eq!(preset.options.prepend, "\n@JsonProperty(\"{CONVERTED_VALUE}\")");
}

#[test]
fn test_registry_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("presets.toml");
    fs::write(
        &path,
        r#"
[[preset]]
name = "rustField"
label = "Rust struct field"
style = "snake"
prefix = "pub "
suffix = ": String,"
"#,
    )
    .unwrap();

    let registry = PresetRegistry::with_file(&path).unwrap();
    assert_eq!(registry.len(), 4);

    let preset = registry.resolve("rustField").unwrap();
    assert_eq!(preset.style, CaseStyle::Snake);
    assert_eq!(preset.options.prefix, "pub ");
    assert_eq!(preset.options.prepend, "");
}

#[test]
fn test_registry_missing_file() {
    let dir = tempdir().unwrap();
    let err = PresetRegistry::with_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConversionError::PresetFile { .. }));
}

#[test]
fn test_registry_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[preset]\nname = ").unwrap();

    let err = PresetRegistry::with_file(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_registry_file_with_misspelled_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("typo.toml");
    fs::write(&path, "[[preset]]\nname = \"field\"\nsufix = \";\"\n").unwrap();

    let err = PresetRegistry::with_file(&path).unwrap_err();
    assert!(matches!(err, ConversionError::PresetFile { .. }));
    assert!(err.to_string().contains("sufix"), "{}", err);
}
