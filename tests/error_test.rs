use std::io;
use std::path::PathBuf;

use projgen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid options".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid options.");

    let err = Error::SourceNotFound { path: PathBuf::from("tpl/a.txt") };
    assert_eq!(err.to_string(), "Template project data not exists: tpl/a.txt");
}

#[test]
fn test_item_errors() {
    let missing = Error::SourceNotFound { path: PathBuf::from("a") };
    let exists = Error::TargetExists { path: PathBuf::from("b") };
    let manifest = Error::ManifestError {
        path: PathBuf::from("Template.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };

    assert!(missing.is_item_error());
    assert!(exists.is_item_error());
    assert!(!manifest.is_item_error());
    assert!(!Error::ValidationError("x".to_string()).is_item_error());
}
