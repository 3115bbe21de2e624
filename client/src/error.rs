//! Error types for the upload client.
//!
//! - [`UploadError`] - everything that can go wrong in one upload cycle
//! - [`ConfigError`] - invalid client configuration
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors raised while reading, sending or decoding a file upload.
///
/// Every variant ends up as the "upload error" notification; the message is
/// only written to the diagnostic log.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The selected file could not be read.
    #[error("Failed to read file: {0}")]
    Read(String),

    /// The request could not be built or was rejected (network, CORS...).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The response body is not usable structured data.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The prediction payload could not be re-serialized.
    #[error("Failed to encode prediction: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            UploadError::Decode(err.to_string())
        } else {
            UploadError::Transport(err.to_string())
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors in the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Server URL without an http(s) scheme.
    #[error("Invalid server URL '{0}': expected http:// or https://")]
    InvalidServerUrl(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: UploadError = json_err.into();
        assert!(matches!(err, UploadError::Encode(_)));
        assert!(err.to_string().starts_with("Failed to encode prediction"));
    }

    #[test]
    fn test_config_error_format() {
        let err = ConfigError::InvalidServerUrl("ftp://host".into());
        let msg = err.to_string();
        assert!(msg.contains("ftp://host"));
        assert!(msg.contains("https://"));
    }
}
