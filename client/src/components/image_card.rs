//! Card showing the image for the latest blended word.

use leptos::prelude::*;

use crate::net::types::GeneratedImage;
use crate::state::images::ImageState;
use crate::util::image_data::data_uri;

/// Current image with loading overlay and inline error. Clicking the image
/// opens it in the preview modal.
#[component]
pub fn ImageCard(on_open: Callback<GeneratedImage>) -> impl IntoView {
    let images = expect_context::<RwSignal<ImageState>>();

    view! {
        <Show when=move || images.with(|i| i.card_visible)>
            <div class="image-card">
                {move || {
                    images
                        .with(|i| i.current.clone())
                        .map(|image| {
                            let src = data_uri(&image.image_data);
                            let alt = format!("Generated image for {}", image.word);
                            view! {
                                <img
                                    class="image-card__image"
                                    src=src
                                    alt=alt
                                    on:click=move |_| on_open.run(image.clone())
                                />
                            }
                        })
                }}
                <Show when=move || images.with(|i| i.error.is_some())>
                    <div class="alert alert-error">
                        <span>{move || images.with(|i| i.error.clone().unwrap_or_default())}</span>
                    </div>
                </Show>
                <Show when=move || images.with(|i| i.loading)>
                    <div class="image-card__loading">
                        <span class="loading loading-dots"></span>
                        <span>"Generating image..."</span>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
