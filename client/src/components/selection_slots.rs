//! The two slots showing the current selection.

use leptos::prelude::*;

use crate::state::words::WordBoardState;

const EMPTY_SLOT: &str = "Select a word";

#[component]
pub fn SelectionSlots() -> impl IntoView {
    let words = expect_context::<RwSignal<WordBoardState>>();
    let slot = move |index: usize| {
        view! {
            <div class="word-slot" class:word-slot--filled=move || words.with(|w| w.slot(index).is_some())>
                {move || words.with(|w| w.slot(index).unwrap_or(EMPTY_SLOT).to_owned())}
            </div>
        }
    };

    view! {
        <div class="word-slots">
            {slot(0)}
            <span class="word-slots__plus" aria-hidden="true">"+"</span>
            {slot(1)}
        </div>
    }
}
