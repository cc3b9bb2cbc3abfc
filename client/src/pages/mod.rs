//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod blender;
// Flow entry points are only spawned from the hydrated build.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) mod blender_flow;
