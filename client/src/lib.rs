//! # Artstyle - upload client for the art style prediction service
//!
//! Picks an image, previews it locally, uploads it to `POST /predict` and
//! opens the result page with the prediction in its query string.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  ImageFile  │────▶│ UploadController │────▶│  Transport  │────▶│  /predict    │
//! │ (disk/DOM)  │     │  preview + send  │     │ (multipart) │     │  (service)   │
//! └─────────────┘     └──────────────────┘     └─────────────┘     └──────────────┘
//!                        │           │
//!                        ▼           ▼
//!               PreviewSurface   Navigator / Notifier
//! ```
//!
//! The controller only talks to traits; the browser frontend and the native
//! CLI ([`native`]) provide the implementations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use artstyle::native::{ConsoleNotifier, FilePreview, HttpTransport, LocalFile, PrintNavigator};
//! use artstyle::{ClientConfig, UploadController};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClientConfig::from_env().unwrap();
//!     let controller = UploadController::new(
//!         HttpTransport::new(config.clone()),
//!         FilePreview::default(),
//!         ConsoleNotifier,
//!         PrintNavigator::new(config),
//!     );
//!     let file = LocalFile::open("starry_night.jpg".as_ref()).await.unwrap();
//!     controller.handle_selection(Some(file)).await;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Paths, messages and server location
//! - [`models`] - Prediction response decoding
//! - [`preview`] - Data URI rendering
//! - [`navigation`] - Result page URL encoding
//! - [`controller`] - The upload controller and its collaborator traits
//! - [`native`] - reqwest/terminal adapters (not on wasm32)

pub mod error;
pub mod config;

pub mod models;
pub mod preview;
pub mod navigation;

pub mod controller;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ConfigResult, UploadError, UploadResult};

pub use config::{
    ClientConfig, Routes,
    PREDICT_PATH, RESULT_PATH, HOME_PATH, FILE_FIELD,
    PREDICTION_FAILED_MESSAGE, UPLOAD_ERROR_MESSAGE,
    DEFAULT_SERVER_URL, SERVER_URL_ENV,
};

pub use models::{Prediction, PredictionResponse};

pub use preview::data_uri;

pub use navigation::result_location;

pub use controller::{
    ImageFile, Transport, PreviewSurface, Notifier, Navigator,
    UploadController, UploadOutcome,
};
