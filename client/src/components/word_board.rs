//! Word token board with refresh control.

use leptos::prelude::*;

use crate::state::words::{TokenId, WordBoardState};
use crate::util::word_color::token_class;

/// Clickable word tokens. Dimmed and inert while a blend is in flight.
#[component]
pub fn WordBoard(on_select: Callback<TokenId>, on_refresh: Callback<()>) -> impl IntoView {
    let words = expect_context::<RwSignal<WordBoardState>>();
    let busy = move || words.with(|w| w.loading || w.blending);

    view! {
        <div class="word-board">
            <div class="word-board__header">
                <h2 class="word-board__title">"Pick two words"</h2>
                <button
                    class="btn word-board__refresh"
                    class:animate-spin=move || words.with(|w| w.loading)
                    disabled=busy
                    on:click=move |_| on_refresh.run(())
                    title="Draw new words"
                >
                    "↻"
                </button>
            </div>
            <div
                class="word-board__tokens"
                class:word-board__tokens--disabled=move || words.with(|w| w.blending)
            >
                <Show when=move || words.with(|w| w.loading)>
                    <div class="word-board__loading">
                        <span class="loading loading-dots"></span>
                    </div>
                </Show>
                <Show when=move || words.with(|w| w.error.is_some())>
                    <div class="alert alert-error">
                        <span>{move || words.with(|w| w.error.clone().unwrap_or_default())}</span>
                    </div>
                </Show>
                {move || {
                    words
                        .get()
                        .tokens
                        .into_iter()
                        .map(|token| {
                            let id = token.id;
                            let class = token_class(&token.text, token.blended);
                            let data_word = token.text.clone();
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    class:selected=move || words.with(|w| w.is_selected(id))
                                    data-word=data_word
                                    on:click=move |_| on_select.run(id)
                                >
                                    {token.text}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
