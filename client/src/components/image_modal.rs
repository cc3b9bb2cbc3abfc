//! Full-size preview modal with a download link.

#[cfg(test)]
#[path = "image_modal_test.rs"]
mod image_modal_test;

use leptos::prelude::*;

use crate::state::gallery::GalleryState;
use crate::util::image_data::{data_uri, download_filename};

/// Shows `GalleryState::preview`. Closes on backdrop click, the close button,
/// or Escape.
#[component]
pub fn ImageModal(on_close: Callback<()>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the dialog on open so Escape reaches it without a click first.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(modal) = modal_ref.get() {
            let _ = modal.focus();
        }
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if closes_modal(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="image-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="image-modal"
                node_ref=modal_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="image-modal__close" on:click=move |_| on_close.run(()) title="Close preview">
                    "✕"
                </button>
                {move || {
                    gallery
                        .with(|g| g.preview.clone())
                        .map(|entry| {
                            let src = data_uri(&entry.image_data);
                            view! {
                                <img
                                    class="image-modal__image"
                                    src=src.clone()
                                    alt=format!("Full size image of {}", entry.word)
                                />
                                <a class="btn btn--primary image-modal__download" href=src download=download_filename(&entry.word)>
                                    "Download"
                                </a>
                            }
                        })
                }}
            </div>
        </div>
    }
}

/// Keys that dismiss the preview.
pub(crate) fn closes_modal(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
