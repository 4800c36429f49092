use std::fs;
use std::path::Path;

use super::{Error, LoaderConfig};
use crate::fixture;

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = fixture::temp_dir("config");
    let path = dir.join("loader.json");
    fs::write(&path, r#"{"language": "de-DE", "allowIncorrectChecksum": false, "indexPath": "objects.idx"}"#)
        .unwrap();

    let config = LoaderConfig::from_json_file(&path).unwrap();
    assert_eq!(config.language, "de-DE");
    assert!(!config.allow_incorrect_checksum);
    assert!(config.load_images);
    assert!(config.object_directories.is_empty());
    assert_eq!(config.index_path.as_deref(), Some(Path::new("objects.idx")));
}

#[test]
fn test_config_errors() {
    let dir = fixture::temp_dir("config-errors");
    assert!(matches!(LoaderConfig::from_json_file(&dir.join("absent.json")), Err(Error::Io(_))));

    let path = dir.join("broken.json");
    fs::write(&path, "[1, 2]").unwrap();
    assert!(matches!(LoaderConfig::from_json_file(&path), Err(Error::Json(_))));
}
