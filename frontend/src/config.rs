//! Page configuration.
//!
//! The page is served by the prediction service itself, so requests and
//! navigations stay on the same origin.

/// Prefix for backend requests (empty: same origin).
pub const BACKEND_URL: &str = "";

/// File selection input.
pub const FILE_INPUT_ID: &str = "file-upload";

/// Image element showing the local preview.
pub const PREVIEW_IMAGE_ID: &str = "preview-image";

/// Media types offered by the file picker.
///
/// The prediction service accepts png, jpg and jpeg.
pub const ACCEPTED_TYPES: &str = "image/png,image/jpeg";
