use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::state::blend::BlendPhase;
use crate::state::gallery::MAX_GALLERY_IMAGES;

// =============================================================
// Fake API
// =============================================================

struct FakeApi {
    words: Result<Vec<String>, ApiError>,
    blend: Result<String, ApiError>,
    image: Result<String, ApiError>,
    word_calls: Cell<usize>,
    blend_calls: Cell<usize>,
    image_calls: Cell<usize>,
    pauses: Cell<usize>,
}

impl FakeApi {
    fn new() -> Self {
        Self {
            words: Ok(vec!["cat".to_owned(), "dog".to_owned(), "sun".to_owned()]),
            blend: Ok("catdog".to_owned()),
            image: Ok("IMG".to_owned()),
            word_calls: Cell::new(0),
            blend_calls: Cell::new(0),
            image_calls: Cell::new(0),
            pauses: Cell::new(0),
        }
    }
}

impl BlendApi for FakeApi {
    async fn fetch_words(&self) -> Result<Vec<String>, ApiError> {
        self.word_calls.set(self.word_calls.get() + 1);
        self.words.clone()
    }

    async fn blend(&self, _word1: &str, _word2: &str) -> Result<String, ApiError> {
        self.blend_calls.set(self.blend_calls.get() + 1);
        self.blend.clone()
    }

    async fn generate_image(&self, word: &str) -> Result<String, ApiError> {
        self.image_calls.set(self.image_calls.get() + 1);
        self.image.clone().map(|data| format!("{data}-{word}"))
    }

    async fn pause(&self, _duration: Duration) {
        self.pauses.set(self.pauses.get() + 1);
    }
}

fn signals() -> FlowSignals {
    FlowSignals {
        words: RwSignal::new(WordBoardState::default()),
        blend: RwSignal::new(BlendState::default()),
        images: RwSignal::new(ImageState::default()),
        gallery: RwSignal::new(GalleryState::default()),
    }
}

fn loaded(api: &FakeApi) -> FlowSignals {
    let s = signals();
    block_on(load_words(api, s, WORDS_LOAD_FAILED));
    s
}

fn token(s: FlowSignals, text: &str) -> TokenId {
    s.words
        .with_untracked(|w| w.tokens.iter().find(|t| t.text == text).map(|t| t.id))
        .unwrap()
}

fn select(s: FlowSignals, a: &str, b: &str) {
    assert!(!select_word(s, token(s, a)));
    assert!(select_word(s, token(s, b)));
}

// =============================================================
// Word loading
// =============================================================

#[test]
fn load_words_fills_board() {
    let api = FakeApi::new();
    let s = loaded(&api);
    s.words.with_untracked(|w| {
        assert_eq!(w.tokens.len(), 3);
        assert!(!w.loading);
        assert!(w.error.is_none());
    });
}

#[test]
fn load_words_failure_shows_message() {
    let mut api = FakeApi::new();
    api.words = Err(ApiError::Request("offline".to_owned()));
    let s = loaded(&api);
    assert_eq!(s.words.with_untracked(|w| w.error.clone()).as_deref(), Some(WORDS_LOAD_FAILED));
}

#[test]
fn refresh_resets_results_and_redraws() {
    let api = FakeApi::new();
    let s = loaded(&api);
    select(s, "cat", "dog");
    block_on(run_blend(&api, s));
    block_on(refresh_words(&api, s));
    assert_eq!(api.word_calls.get(), 2);
    assert_eq!(s.blend.with_untracked(|b| b.phase.clone()), BlendPhase::Idle);
    assert!(!s.images.with_untracked(|i| i.card_visible));
    assert_eq!(s.words.with_untracked(|w| w.tokens.len()), 3);
}

#[test]
fn refresh_is_ignored_while_blending() {
    let api = FakeApi::new();
    let s = loaded(&api);
    s.words.update(|w| w.blending = true);
    block_on(refresh_words(&api, s));
    assert_eq!(api.word_calls.get(), 1);
}

#[test]
fn refresh_failure_uses_refresh_message() {
    let api = FakeApi::new();
    let s = loaded(&api);
    let failing = FakeApi { words: Err(ApiError::status(500, "")), ..FakeApi::new() };
    block_on(refresh_words(&failing, s));
    assert_eq!(s.words.with_untracked(|w| w.error.clone()).as_deref(), Some(WORDS_REFRESH_FAILED));
}

// =============================================================
// Selection
// =============================================================

#[test]
fn second_selection_requests_blend() {
    let api = FakeApi::new();
    let s = loaded(&api);
    assert!(!select_word(s, token(s, "cat")));
    assert!(select_word(s, token(s, "dog")));
    assert!(select_word(s, token(s, "sun")));
    assert_eq!(
        s.words.with_untracked(WordBoardState::selected_pair),
        Some(("dog".to_owned(), "sun".to_owned()))
    );
}

#[test]
fn clicking_selected_word_resets_page_and_keeps_it_selected() {
    let api = FakeApi { blend: Err(ApiError::status(500, "nope")), ..FakeApi::new() };
    let s = loaded(&api);
    select(s, "cat", "dog");
    block_on(run_blend(&api, s));
    let cat = token(s, "cat");
    assert!(!select_word(s, cat));
    s.words.with_untracked(|w| {
        assert_eq!(w.selection, vec![cat]);
        assert_eq!(w.slot(0), Some("cat"));
        assert!(!w.blending);
    });
    assert_eq!(s.blend.with_untracked(|b| b.phase.clone()), BlendPhase::Idle);
    assert!(!s.images.with_untracked(|i| i.card_visible));
}

// =============================================================
// Blend
// =============================================================

#[test]
fn successful_blend_appends_word_clears_selection_and_generates_image() {
    let api = FakeApi::new();
    let s = loaded(&api);
    select(s, "cat", "dog");
    block_on(run_blend(&api, s));

    assert_eq!(s.blend.with_untracked(|b| b.blended_word().map(str::to_owned)).as_deref(), Some("catdog"));
    s.words.with_untracked(|w| {
        assert!(w.selection.is_empty());
        assert!(!w.blending);
        let last = w.tokens.last().unwrap();
        assert_eq!(last.text, "catdog");
        assert!(last.blended);
    });
    s.images.with_untracked(|i| {
        assert!(!i.loading);
        assert_eq!(i.current.as_ref().map(|c| c.image_data.as_str()), Some("IMG-catdog"));
        assert_eq!(i.cached("catdog"), Some("IMG-catdog"));
    });
    assert_eq!(s.gallery.with_untracked(|g| g.entries.len()), 1);
    assert_eq!(api.image_calls.get(), 1);
}

#[test]
fn blend_returning_existing_word_does_not_duplicate_token() {
    let api = FakeApi { blend: Ok("sun".to_owned()), ..FakeApi::new() };
    let s = loaded(&api);
    select(s, "cat", "dog");
    block_on(run_blend(&api, s));
    assert_eq!(s.words.with_untracked(|w| w.tokens.len()), 3);
}

#[test]
fn failed_blend_keeps_selection_and_reenables_board() {
    let api = FakeApi { blend: Err(ApiError::status(500, "upstream down")), ..FakeApi::new() };
    let s = loaded(&api);
    select(s, "cat", "dog");
    let before = s.words.with_untracked(|w| w.selection.clone());

    block_on(run_blend(&api, s));

    s.words.with_untracked(|w| {
        assert_eq!(w.selection, before);
        assert!(!w.blending);
        assert_eq!(w.tokens.len(), 3);
    });
    assert_eq!(
        s.blend.with_untracked(BlendState::error_banner).as_deref(),
        Some("Error: Failed to blend words: upstream down")
    );
    assert!(!s.images.with_untracked(|i| i.loading));
    assert_eq!(api.image_calls.get(), 0);
}

#[test]
fn failed_blend_can_be_retried() {
    let failing = FakeApi { blend: Err(ApiError::Request("offline".to_owned())), ..FakeApi::new() };
    let s = loaded(&failing);
    select(s, "cat", "dog");
    block_on(run_blend(&failing, s));

    let api = FakeApi::new();
    block_on(run_blend(&api, s));
    assert_eq!(api.blend_calls.get(), 1);
    assert_eq!(s.blend.with_untracked(|b| b.blended_word().map(str::to_owned)).as_deref(), Some("catdog"));
}

#[test]
fn empty_blend_reports_no_word_generated() {
    let api = FakeApi { blend: Err(ApiError::EmptyBlend), ..FakeApi::new() };
    let s = loaded(&api);
    select(s, "cat", "dog");
    block_on(run_blend(&api, s));
    assert_eq!(s.blend.with_untracked(BlendState::error_banner).as_deref(), Some("Error: No word generated"));
}

#[test]
fn run_blend_without_full_selection_is_noop() {
    let api = FakeApi::new();
    let s = loaded(&api);
    select_word(s, token(s, "cat"));
    block_on(run_blend(&api, s));
    assert_eq!(api.blend_calls.get(), 0);
    assert_eq!(s.blend.with_untracked(|b| b.phase.clone()), BlendPhase::Idle);
}

// =============================================================
// Image pipeline
// =============================================================

#[test]
fn repeated_image_request_uses_cache_without_network() {
    let api = FakeApi::new();
    let s = signals();
    block_on(run_image(&api, s, "catdog".to_owned()));
    block_on(run_image(&api, s, "catdog".to_owned()));
    block_on(run_image(&api, s, "catdog".to_owned()));

    assert_eq!(api.image_calls.get(), 1);
    assert_eq!(api.pauses.get(), 2);
    assert_eq!(s.gallery.with_untracked(|g| g.entries.len()), 1);
    assert_eq!(
        s.images.with_untracked(|i| i.current.as_ref().map(|c| c.word.clone())).as_deref(),
        Some("catdog")
    );
}

#[test]
fn cached_word_missing_from_gallery_is_added_back() {
    let api = FakeApi::new();
    let s = signals();
    s.images.update(|i| i.remember("owl", "OWL"));
    block_on(run_image(&api, s, "owl".to_owned()));
    assert_eq!(api.image_calls.get(), 0);
    s.gallery.with_untracked(|g| {
        assert_eq!(g.entries.len(), 1);
        assert_eq!(g.entries[0].image_data, "OWL");
    });
}

#[test]
fn image_failure_shows_banner_and_skips_gallery() {
    let api = FakeApi { image: Err(ApiError::status(502, "bad gateway")), ..FakeApi::new() };
    let s = signals();
    block_on(run_image(&api, s, "catdog".to_owned()));
    s.images.with_untracked(|i| {
        assert!(!i.loading);
        assert_eq!(i.error.as_deref(), Some(IMAGE_FAILED_MESSAGE));
        assert_eq!(i.cached("catdog"), None);
    });
    assert!(s.gallery.with_untracked(GalleryState::is_empty));
}

#[test]
fn gallery_stays_bounded_across_many_generations() {
    let api = FakeApi::new();
    let s = signals();
    for i in 0..(MAX_GALLERY_IMAGES * 2 + 3) {
        block_on(run_image(&api, s, format!("word{i}")));
        assert!(s.gallery.with_untracked(|g| g.entries.len()) <= MAX_GALLERY_IMAGES);
    }
    // Evicted gallery words stay cached.
    assert_eq!(s.images.with_untracked(|i| i.cache.len()), MAX_GALLERY_IMAGES * 2 + 3);
}

#[test]
fn restore_gallery_outside_browser_starts_empty() {
    let s = signals();
    restore_gallery(s);
    assert!(s.gallery.with_untracked(GalleryState::is_empty));
}
