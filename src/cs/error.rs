//! Error types for the CS module
//!
//! This module defines custom error types using thiserror for the documentation
//! extraction pipeline. Malformed member entries are not errors; they are skipped
//! by the extractor. Only document-level failures surface here.

use thiserror::Error;

/// Main error type for CS module operations
#[derive(Error, Debug)]
pub enum CsError {
    /// IO errors (reading the documentation export)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// XML parsing errors
    #[error("XML parsing error: {message}")]
    XmlParsing { message: String },

    /// The document has no `assembly/name` node, so cross references cannot be resolved
    #[error("Documentation export is missing the assembly/name element")]
    MissingAssemblyName,
}

/// Result type alias for CS operations
pub type CsResult<T> = Result<T, CsError>;

// Implement From traits for automatic error conversion
impl From<std::io::Error> for CsError {
    fn from(err: std::io::Error) -> Self {
        CsError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

impl From<serde_json::Error> for CsError {
    fn from(err: serde_json::Error) -> Self {
        CsError::Json {
            source: err,
            message: "JSON operation failed".to_string(),
        }
    }
}

impl From<quick_xml::Error> for CsError {
    fn from(err: quick_xml::Error) -> Self {
        CsError::XmlParsing {
            message: err.to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> CsResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> CsResult<T> {
        self.map_err(|e| CsError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> CsResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> CsResult<T> {
        self.map_err(|e| CsError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}
