//! Common helper UI components

mod error_display;
mod loading_indicator;
mod page_container;

pub use error_display::{ErrorDisplay, UNAVAILABLE_MESSAGE};
pub use loading_indicator::LoadingIndicator;
pub use page_container::PageContainer;
