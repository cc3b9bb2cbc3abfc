//! Thumbnail grid for the persisted gallery.

use leptos::prelude::*;

use crate::net::types::GeneratedImage;
use crate::state::gallery::GalleryState;
use crate::util::image_data::data_uri;

/// Newest-first thumbnails, rebuilt whenever the gallery changes.
#[component]
pub fn GalleryGrid(on_open: Callback<GeneratedImage>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    view! {
        <div class="gallery">
            {move || {
                let entries = gallery.get().entries;
                if entries.is_empty() {
                    return view! {
                        <p class="gallery__empty">"Your gallery is empty. Create new blends to add images!"</p>
                    }
                        .into_any();
                }
                entries
                    .into_iter()
                    .map(|entry| {
                        let src = data_uri(&entry.image_data);
                        let alt = format!("Generated image for {}", entry.word);
                        let caption = entry.word.clone();
                        view! {
                            <figure class="gallery__item" on:click=move |_| on_open.run(entry.clone())>
                                <img src=src alt=alt/>
                                <figcaption class="gallery__caption">{caption}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
