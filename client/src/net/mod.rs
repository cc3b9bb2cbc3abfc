//! Networking modules for the blend HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `BlendApi` seam and its browser implementation, `error`
//! the failure type shown in banners, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod types;
