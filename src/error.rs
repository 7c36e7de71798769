//! Error types for tooldir
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network failure talking to the catalog host
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog host answered with a non-success status
    #[error("Catalog fetch failed: {location} returned {status}")]
    Status { status: u16, location: String },

    /// Document is not an array of tool records
    #[error("Invalid catalog data: {0}")]
    InvalidData(String),

    /// A single record violates a catalog invariant
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = CatalogError::Status {
            status: 404,
            location: "http://localhost/tools.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog fetch failed: http://localhost/tools.json returned 404"
        );
    }

    #[test]
    fn test_invalid_data_error() {
        let err = CatalogError::InvalidData("expected an array".to_string());
        assert_eq!(err.to_string(), "Invalid catalog data: expected an array");
    }

    #[test]
    fn test_invalid_record_error() {
        let err = CatalogError::InvalidRecord {
            index: 3,
            reason: "name is empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid record at index 3: name is empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
