//! UI Components for the Art Style Classifier page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`UploadSection`] - Image selection and upload
//! - [`PreviewImage`] - Local preview of the selected image

mod hero;
mod upload;
mod preview;

pub use hero::*;
pub use upload::*;
pub use preview::*;
