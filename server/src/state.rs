//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! cloned per request. The generator is optional: without one, the relay
//! endpoints answer `503` while `/words` and the page keep working.

use std::sync::Arc;

use crate::generator::Generator;

#[derive(Clone, Default)]
pub struct AppState {
    pub generator: Option<Arc<dyn Generator>>,
}

impl AppState {
    #[must_use]
    pub fn new(generator: Option<Arc<dyn Generator>>) -> Self {
        Self { generator }
    }
}
