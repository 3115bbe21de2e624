//! Window-level notification and navigation.

use artstyle::{Navigator, Notifier};

/// Notifies with `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to alert: {}", message);
            return;
        };

        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, location: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to navigate to {}", location);
            return;
        };

        if let Err(e) = window.location().set_href(location) {
            log::error!("Failed to navigate to {}: {:?}", location, e);
        }
    }
}
