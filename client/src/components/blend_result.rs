//! Result panel for the latest blend: pending placeholder, word, or error.

use leptos::prelude::*;

use crate::state::blend::{BlendPhase, BlendState};

#[component]
pub fn BlendResult() -> impl IntoView {
    let blend = expect_context::<RwSignal<BlendState>>();

    view! {
        <Show when=move || blend.with(|b| b.phase != BlendPhase::Idle)>
            <div class="blend-result">
                {move || match blend.get().phase {
                    BlendPhase::Pending { word1, word2 } => {
                        view! {
                            <div class="blend-result__pending animate-pulse">
                                {format!("Blending {word1} + {word2}...")}
                            </div>
                        }
                            .into_any()
                    }
                    BlendPhase::Blended { word } => {
                        view! { <p class="blend-result__word">{word}</p> }.into_any()
                    }
                    BlendPhase::Failed { message } => {
                        view! {
                            <div class="alert alert-error">
                                <span>{format!("Error: {message}")}</span>
                            </div>
                            <p class="blend-result__hint">"Click any word to try again"</p>
                        }
                            .into_any()
                    }
                    BlendPhase::Idle => ().into_any(),
                }}
            </div>
        </Show>
    }
}
