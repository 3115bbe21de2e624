//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Art Style Classifier"</h1>
            <p class="subtitle">
                "Upload a painting to find out which art movements it belongs to."
            </p>
        </div>
    }
}
