//! Native adapters for the upload controller.
//!
//! - [`LocalFile`] - image read from disk
//! - [`HttpTransport`] - multipart upload with reqwest
//! - [`ConsoleNotifier`], [`PrintNavigator`], [`FilePreview`] - terminal stand-ins
//!   for the page's alert, location and image element

mod console;
mod file;
mod transport;

pub use console::*;
pub use file::*;
pub use transport::*;
