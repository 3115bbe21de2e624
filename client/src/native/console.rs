//! Terminal stand-ins for the page's notification, navigation and preview.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::config::ClientConfig;
use crate::controller::{Navigator, Notifier, PreviewSurface};

/// Prints notifications on stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

/// Prints the absolute URL the page would open.
#[derive(Debug)]
pub struct PrintNavigator {
    config: ClientConfig,
    last: RefCell<Option<String>>,
}

impl PrintNavigator {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            last: RefCell::new(None),
        }
    }

    /// Last URL navigated to.
    pub fn last_url(&self) -> Option<String> {
        self.last.borrow().clone()
    }
}

impl Navigator for PrintNavigator {
    fn navigate(&self, location: &str) {
        let url = self.config.resolve(location);
        println!("{}", url);
        *self.last.borrow_mut() = Some(url);
    }
}

/// Writes the preview data URI to a file, when one is configured.
#[derive(Clone, Debug, Default)]
pub struct FilePreview {
    path: Option<PathBuf>,
}

impl FilePreview {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl PreviewSurface for FilePreview {
    fn show(&self, data_uri: &str) {
        let Some(path) = &self.path else {
            log::debug!("Preview ready ({} chars)", data_uri.len());
            return;
        };

        match std::fs::write(path, data_uri) {
            Ok(()) => log::info!("🖼️  Preview written to {}", path.display()),
            Err(e) => log::warn!("Failed to write preview to {}: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_navigator_resolves_against_server() {
        let navigator = PrintNavigator::new(ClientConfig::new("http://art.local:5001/").unwrap());

        navigator.navigate("/");

        assert_eq!(navigator.last_url().as_deref(), Some("http://art.local:5001/"));
    }

    #[test]
    fn test_file_preview_writes_data_uri() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preview.txt");
        let preview = FilePreview::new(Some(path.clone()));

        preview.show("data:image/png;base64,iVBORw==");

        assert_eq!(std::fs::read_to_string(path).unwrap(), "data:image/png;base64,iVBORw==");
    }
}
