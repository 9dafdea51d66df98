use std::path::PathBuf;

use super::*;

#[test]
fn error_display_invalid_input() {
    let err = CdmGuardError::InvalidInput("position_m must have 3 elements".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid input: position_m must have 3 elements"
    );
}

#[test]
fn error_display_rules() {
    let err = CdmGuardError::Rules("negative tolerance".to_string());
    assert_eq!(err.to_string(), "Rules error: negative tolerance");
}

#[test]
fn error_display_file_read() {
    let err = CdmGuardError::FileRead {
        path: PathBuf::from("message.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("message.json"));
}

#[test]
fn error_display_unsupported_format() {
    let err = CdmGuardError::UnsupportedFormat {
        path: PathBuf::from("message.yaml"),
        extension: "yaml".to_string(),
    };
    let text = err.to_string();
    assert!(text.contains("yaml"));
    assert!(text.contains(".json or .toml"));
}
