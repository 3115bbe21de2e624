//! Client configuration.
//!
//! Endpoint paths and user messages are fixed by the prediction service.
//! Only the server location varies between deployments; native builds
//! read it from `ARTSTYLE_SERVER_URL` (a `.env` file is honoured).

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Prediction endpoint.
pub const PREDICT_PATH: &str = "/predict";

/// Result page, receives `image_url` and `prediction` as query parameters.
pub const RESULT_PATH: &str = "/result";

/// Home page, target of the reset operation.
pub const HOME_PATH: &str = "/";

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Shown when the server answers without an image reference or prediction.
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed. Please try again.";

/// Shown when the request fails or the response cannot be decoded.
pub const UPLOAD_ERROR_MESSAGE: &str = "Error uploading file. Please try again.";

/// Development server address of the prediction service.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

/// Environment variable overriding [`DEFAULT_SERVER_URL`].
pub const SERVER_URL_ENV: &str = "ARTSTYLE_SERVER_URL";

/// Paths and field names used by the upload controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routes {
    pub predict: String,
    pub result: String,
    pub home: String,
    pub file_field: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            predict: PREDICT_PATH.to_string(),
            result: RESULT_PATH.to_string(),
            home: HOME_PATH.to_string(),
            file_field: FILE_FIELD.to_string(),
        }
    }
}

/// Where the native client finds the prediction service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    server_url: String,
}

impl ClientConfig {
    /// Validate and normalize a server URL (scheme required, no trailing slash).
    pub fn new(server_url: &str) -> ConfigResult<Self> {
        let trimmed = server_url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidServerUrl(trimmed.to_string()));
        }

        Ok(Self {
            server_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Load from the environment, falling back to [`DEFAULT_SERVER_URL`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        match std::env::var(SERVER_URL_ENV) {
            Ok(url) => Self::new(&url),
            Err(_) => Self::new(DEFAULT_SERVER_URL),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Absolute URL for a server-relative location such as `/result?...`.
    pub fn resolve(&self, location: &str) -> String {
        if location.starts_with('/') {
            format!("{}{}", self.server_url, location)
        } else {
            format!("{}/{}", self.server_url, location)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}
