//! The word blender page: board, result, current image, and gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it restores the gallery from storage and
//! draws the first set of words; afterwards every network call is started
//! from a user action (token click or refresh).

use leptos::prelude::*;

use crate::components::blend_result::BlendResult;
use crate::components::gallery_grid::GalleryGrid;
use crate::components::image_card::ImageCard;
use crate::components::image_modal::ImageModal;
use crate::components::selection_slots::SelectionSlots;
use crate::components::word_board::WordBoard;
use crate::net::types::GeneratedImage;
use crate::pages::blender_flow::{FlowSignals, select_word};
use crate::state::words::TokenId;

#[component]
pub fn BlenderPage() -> impl IntoView {
    let signals = FlowSignals::from_context();
    let gallery = signals.gallery;

    #[cfg(feature = "hydrate")]
    {
        let started = RwSignal::new(false);
        Effect::new(move || {
            if started.get_untracked() {
                return;
            }
            started.set(true);
            crate::pages::blender_flow::restore_gallery(signals);
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi;
                crate::pages::blender_flow::load_words(&api, signals, crate::pages::blender_flow::WORDS_LOAD_FAILED)
                    .await;
            });
        });
    }

    let on_select = Callback::new(move |id: TokenId| {
        if !select_word(signals, id) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi;
            crate::pages::blender_flow::run_blend(&api, signals).await;
        });
    });

    let on_refresh = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi;
            crate::pages::blender_flow::refresh_words(&api, signals).await;
        });
    });

    let on_preview = Callback::new(move |image: GeneratedImage| gallery.update(|g| g.open_preview(image)));
    let on_close_preview = Callback::new(move |()| gallery.update(|g| g.close_preview()));

    view! {
        <div class="blender-page">
            <header class="blender-page__header">
                <h1>"Word Blender"</h1>
            </header>
            <main class="blender-page__main">
                <section class="blender-page__board">
                    <WordBoard on_select=on_select on_refresh=on_refresh/>
                    <SelectionSlots/>
                </section>
                <section class="blender-page__result">
                    <BlendResult/>
                    <ImageCard on_open=on_preview/>
                </section>
                <section class="blender-page__gallery">
                    <h2>"Gallery"</h2>
                    <GalleryGrid on_open=on_preview/>
                </section>
            </main>
            <Show when=move || gallery.with(|g| g.preview.is_some())>
                <ImageModal on_close=on_close_preview/>
            </Show>
        </div>
    }
}
