//! shelf-ui - View components for the bookshelf page
//!
//! Pure, props-driven components plus the hook that drives the one-shot
//! shelf fetch. Nothing here touches the network; callers hand in the fetch
//! future and the current year, so the same views render real or fixture data.

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::use_shelf_status;
