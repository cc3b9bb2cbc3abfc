//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by stage of the blend flow (`words`, `blend`, `images`,
//! `gallery`) so each component depends on a small focused model. The root
//! `App` provides each one as an `RwSignal` through Leptos context.

pub mod blend;
pub mod gallery;
pub mod images;
pub mod words;
