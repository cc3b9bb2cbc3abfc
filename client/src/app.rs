//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::blender::BlenderPage;
use crate::state::{blend::BlendState, gallery::GalleryState, images::ImageState, words::WordBoardState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides one state signal per stage of the blend flow so each component
/// reads only the slice it renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let words = RwSignal::new(WordBoardState::default());
    let blend = RwSignal::new(BlendState::default());
    let images = RwSignal::new(ImageState::default());
    let gallery = RwSignal::new(GalleryState::default());

    provide_context(words);
    provide_context(blend);
    provide_context(images);
    provide_context(gallery);

    view! {
        <Stylesheet id="leptos" href="/pkg/word-blender.css"/>
        <Title text="Word Blender"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BlenderPage/>
            </Routes>
        </Router>
    }
}
