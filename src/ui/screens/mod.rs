//! UI screens for the application.

pub mod showcase;

pub use showcase::ShowcaseScreen;
