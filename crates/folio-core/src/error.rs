//! Error types for Folio

use thiserror::Error;

/// Errors raised while loading a profile from disk
///
/// Rendering itself never fails; only an external profile file can be
/// unreadable or malformed.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Profile file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile file is not valid profile JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Profile has no display name
    #[error("Profile has an empty name: {0}")]
    EmptyProfile(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::EmptyProfile("profile.json".to_string());
        assert_eq!(
            format!("{}", err),
            "Profile has an empty name: profile.json"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Parse(_)));
    }
}
