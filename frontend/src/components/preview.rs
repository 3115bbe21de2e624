//! Local preview of the selected image.

use artstyle::PreviewSurface;
use leptos::*;

use crate::PREVIEW_IMAGE_ID;

/// Preview surface backed by a signal holding the image source.
///
/// `None` keeps the image hidden.
#[derive(Clone, Copy)]
pub struct SignalPreview {
    set_src: WriteSignal<Option<String>>,
}

impl SignalPreview {
    pub fn new(set_src: WriteSignal<Option<String>>) -> Self {
        Self { set_src }
    }
}

impl PreviewSurface for SignalPreview {
    fn show(&self, data_uri: &str) {
        self.set_src.set(Some(data_uri.to_string()));
    }
}

/// CSS `display` value for an element that is only shown with a preview.
pub fn preview_display(src: &Option<String>) -> &'static str {
    if src.is_some() {
        "block"
    } else {
        "none"
    }
}

#[component]
pub fn PreviewImage(src: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <img
            id=PREVIEW_IMAGE_ID
            class="preview-image"
            alt="Selected painting"
            src=move || src.get().unwrap_or_default()
            style:display=move || preview_display(&src.get())
        />
    }
}
