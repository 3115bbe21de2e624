//! Browser services.
//!
//! Adapters plugging the browser into [`artstyle::UploadController`]:
//!
//! # Services
//!
//! - [`upload`] - selected `File` and multipart upload with gloo-net
//! - [`browser`] - `window.alert` notifications and `window.location` navigation

pub mod upload;
pub mod browser;

pub use upload::*;
pub use browser::*;
