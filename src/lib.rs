//! Vitrine - Desktop Showcase Kiosk
//!
//! A self-contained kiosk application that presents a product page with an
//! expandable FAQ accordion and an auto-advancing testimonial carousel.
//! Content is read from a local TOML file at startup; there is no network
//! and no persistence of widget state.

pub mod carousel;
pub mod content;
pub mod faq;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use carousel::CarouselController;
pub use content::ShowcaseContent;
pub use faq::AccordionController;
pub use storage::config::AppConfig;
