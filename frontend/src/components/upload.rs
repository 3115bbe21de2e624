//! Image upload component.
//!
//! Handles file selection, local preview and upload to the prediction
//! service. Navigation to the result page is done by the controller.

use std::rc::Rc;

use artstyle::UploadController;
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::{preview_display, PreviewImage, SignalPreview};
use crate::services::{AlertNotifier, BrowserFile, FetchTransport, LocationNavigator};
use crate::{ACCEPTED_TYPES, BACKEND_URL, FILE_INPUT_ID};

type PageController = UploadController<FetchTransport, SignalPreview, AlertNotifier, LocationNavigator>;

#[component]
pub fn UploadSection() -> impl IntoView {
    let (preview_src, set_preview_src) = create_signal(None::<String>);

    let controller: Rc<PageController> = Rc::new(UploadController::new(
        FetchTransport::new(BACKEND_URL),
        SignalPreview::new(set_preview_src),
        AlertNotifier,
        LocationNavigator,
    ));

    // Handler pour le changement de fichier
    let on_file_change = {
        let controller = Rc::clone(&controller);
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let file = input
                .files()
                .and_then(|files| files.get(0))
                .map(BrowserFile::new);

            // Each selection runs on its own; earlier uploads are not cancelled
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.handle_selection(file).await;
            });
        }
    };

    let on_reset = move |_| controller.reset();

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="upload-icon">"🖼️"</div>
            <label for=FILE_INPUT_ID class="upload-button">
                "Choose a painting"
            </label>
            <input
                type="file"
                id=FILE_INPUT_ID
                accept=ACCEPTED_TYPES
                style="display:none"
                on:change=on_file_change
            />

            <PreviewImage src=preview_src/>

            <button
                class="btn btn-secondary"
                style:display=move || preview_display(&preview_src.get())
                on:click=on_reset
            >
                "Choose another image"
            </button>
        </div>
    }
}
