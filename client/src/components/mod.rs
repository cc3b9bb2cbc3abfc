//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one stage of the blend flow each, reading shared state
//! from Leptos context and reporting user intent through callbacks so the page
//! owns the async orchestration.

pub mod blend_result;
pub mod gallery_grid;
pub mod image_card;
pub mod image_modal;
pub mod selection_slots;
pub mod word_board;
