//! Async orchestration for the blender page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Word board -> blend -> image -> gallery. Each step writes its result into
//! the shared state signals so the next step (and the view) can read it.
//! Flows are generic over [`BlendApi`] so they run against a fake in tests.
//!
//! CONCURRENCY
//! ===========
//! All work runs on the browser event loop. The board is disabled while a
//! blend is in flight, so at most one blend/image sequence runs at a time.
//! A reset or refresh racing an in-flight request is not guarded against.

#[cfg(test)]
#[path = "blender_flow_test.rs"]
mod blender_flow_test;

use std::time::Duration;

use leptos::logging::{error, log, warn};
use leptos::prelude::*;

use crate::net::api::BlendApi;
use crate::net::error::ApiError;
use crate::net::types::GeneratedImage;
use crate::state::blend::BlendState;
use crate::state::gallery::GalleryState;
use crate::state::images::{IMAGE_FAILED_MESSAGE, ImageState};
use crate::state::words::{ClickOutcome, TokenId, WordBoardState};
use crate::util::gallery_storage;

/// Pause before showing a cached image, so a replay still reads as "generating".
pub(crate) const CACHE_REPLAY_DELAY: Duration = Duration::from_millis(500);

pub(crate) const WORDS_LOAD_FAILED: &str = "Failed to load words. Please refresh.";
pub(crate) const WORDS_REFRESH_FAILED: &str = "Failed to load new words.";

/// The page's state container: one signal per stage.
#[derive(Clone, Copy)]
pub(crate) struct FlowSignals {
    pub words: RwSignal<WordBoardState>,
    pub blend: RwSignal<BlendState>,
    pub images: RwSignal<ImageState>,
    pub gallery: RwSignal<GalleryState>,
}

impl FlowSignals {
    /// Collect the signals provided by `App`.
    pub fn from_context() -> Self {
        Self {
            words: expect_context::<RwSignal<WordBoardState>>(),
            blend: expect_context::<RwSignal<BlendState>>(),
            images: expect_context::<RwSignal<ImageState>>(),
            gallery: expect_context::<RwSignal<GalleryState>>(),
        }
    }

    /// Clear selections, hide the result panel and image card, and re-enable
    /// the board. Tokens, cache, and gallery are untouched.
    pub fn reset(self) {
        self.words.update(|w| {
            w.clear_selection();
            w.blending = false;
        });
        self.blend.update(BlendState::reset);
        self.images.update(ImageState::hide);
    }
}

/// Load the persisted gallery and seed the image cache from it.
pub(crate) fn restore_gallery(signals: FlowSignals) {
    let entries = match gallery_storage::load_gallery() {
        Ok(entries) => {
            log!("loaded {} gallery images from storage", entries.len());
            entries
        }
        Err(e) => {
            warn!("gallery load failed, starting empty: {e}");
            Vec::new()
        }
    };
    signals.images.update(|i| i.seed(&entries));
    signals.gallery.set(GalleryState::from_entries(entries));
}

/// Fetch a fresh draw of words into the board.
pub(crate) async fn load_words<A: BlendApi>(api: &A, signals: FlowSignals, failure_message: &str) {
    signals.words.update(WordBoardState::begin_loading);
    match api.fetch_words().await {
        Ok(words) => signals.words.update(|w| w.replace_words(words)),
        Err(e) => {
            error!("word fetch failed: {e}");
            signals.words.update(|w| w.fail_loading(failure_message));
        }
    }
}

/// Reset the page and draw new words. Ignored while a blend is in flight.
pub(crate) async fn refresh_words<A: BlendApi>(api: &A, signals: FlowSignals) {
    if signals.words.with_untracked(|w| w.blending) {
        return;
    }
    signals.reset();
    load_words(api, signals, WORDS_REFRESH_FAILED).await;
}

/// Apply a token click. Returns `true` when the selection just became full
/// and the caller should start [`run_blend`].
pub(crate) fn select_word(signals: FlowSignals, id: TokenId) -> bool {
    let outcome = signals
        .words
        .try_update(|w| w.click(id))
        .unwrap_or(ClickOutcome::Ignored);
    match outcome {
        ClickOutcome::Ignored => false,
        ClickOutcome::Reset => {
            signals.blend.update(BlendState::reset);
            signals.images.update(ImageState::hide);
            false
        }
        ClickOutcome::Selected { .. } => signals
            .words
            .with_untracked(|w| w.selected_pair().is_some()),
    }
}

/// Blend the selected pair, append the result to the board, then generate its image.
///
/// On failure the selection is left in place for a retry. The board is
/// re-enabled either way before image generation starts.
pub(crate) async fn run_blend<A: BlendApi>(api: &A, signals: FlowSignals) {
    let Some((word1, word2)) = signals.words.with_untracked(WordBoardState::selected_pair) else {
        return;
    };

    signals.words.update(|w| w.blending = true);
    signals.blend.update(|b| b.begin(&word1, &word2));
    signals.images.update(ImageState::show_overlay);

    let word = match api.blend(&word1, &word2).await {
        Ok(word) => word,
        Err(e) => {
            warn!("blend failed for {word1:?} + {word2:?}: {e}");
            signals.blend.update(|b| b.fail(blend_failure_message(&e)));
            signals.images.update(ImageState::hide_overlay);
            signals.words.update(|w| w.blending = false);
            return;
        }
    };

    signals.blend.update(|b| b.succeed(&word));
    signals.words.update(|w| {
        if w.append_blended(&word) {
            log!("added blended word {word:?} to the board");
        }
        w.clear_selection();
        w.blending = false;
    });

    run_image(api, signals, word).await;
}

/// Show the image for `word`, generating it only when it is not cached.
pub(crate) async fn run_image<A: BlendApi>(api: &A, signals: FlowSignals, word: String) {
    signals.images.update(ImageState::begin_generation);

    let cached = signals
        .images
        .with_untracked(|i| i.cached(&word).map(str::to_owned));
    if let Some(image_data) = cached {
        log!("image for {word:?} already cached");
        api.pause(CACHE_REPLAY_DELAY).await;
        let image = GeneratedImage { word, image_data };
        signals.images.update(|i| i.show(image.clone()));
        if !signals
            .gallery
            .with_untracked(|g| g.contains_word(&image.word))
        {
            add_to_gallery(signals.gallery, image);
        }
        return;
    }

    match api.generate_image(&word).await {
        Ok(image_data) => {
            let image = GeneratedImage { word, image_data };
            signals.images.update(|i| {
                i.remember(&image.word, &image.image_data);
                i.show(image.clone());
            });
            add_to_gallery(signals.gallery, image);
        }
        Err(e) => {
            error!("image generation failed for {word:?}: {e}");
            signals.images.update(|i| i.fail(IMAGE_FAILED_MESSAGE));
        }
    }
}

fn add_to_gallery(gallery: RwSignal<GalleryState>, image: GeneratedImage) {
    gallery.update(|g| g.add(image));
    let saved = gallery.with_untracked(|g| gallery_storage::save_gallery(&g.entries));
    match saved {
        Ok(()) => log!("saved {} gallery images", gallery.with_untracked(|g| g.entries.len())),
        Err(e) => warn!("gallery save failed: {e}"),
    }
}

fn blend_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::EmptyBlend => err.to_string(),
        _ => format!("Failed to blend words: {err}"),
    }
}
