//! Showcase content model.
//!
//! Page copy lives in a `content.toml` under the data directory so a kiosk
//! deployment can swap products without rebuilding. When no file exists the
//! built-in sample content is used.

use serde::{Deserialize, Serialize};
use std::path::Path;

use chrono::NaiveDate;

/// A single FAQ entry: a question header and its answer panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question shown on the clickable header
    pub question: String,
    /// Answer revealed when the item is expanded
    pub answer: String,
}

/// A customer testimonial, one carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// The quote itself
    pub quote: String,
    /// Who said it
    pub author: String,
    /// Role or company line under the author
    #[serde(default)]
    pub role: Option<String>,
    /// When the testimonial was given
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Testimonial {
    /// Attribution line for display: author, with role when present.
    pub fn attribution(&self) -> String {
        match &self.role {
            Some(role) => format!("{}, {}", self.author, role),
            None => self.author.clone(),
        }
    }
}

/// Everything the showcase page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseContent {
    /// Page title
    pub title: String,
    /// Subtitle under the title
    #[serde(default)]
    pub tagline: String,
    /// FAQ section entries
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    /// Testimonial slides
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl ShowcaseContent {
    /// Built-in sample content used when no content file is present.
    pub fn sample() -> Self {
        Self {
            title: "Vitrine".to_string(),
            tagline: "Everything visitors ask, and what customers say.".to_string(),
            faq: vec![
                FaqEntry {
                    question: "How do I update the content on this display?".to_string(),
                    answer: "Drop a content.toml into the data directory and restart. \
                             The file holds the title, FAQ entries, and testimonials."
                        .to_string(),
                },
                FaqEntry {
                    question: "Does the display need a network connection?".to_string(),
                    answer: "No. Everything is read from local files at startup.".to_string(),
                },
                FaqEntry {
                    question: "Can more than one question be open at a time?".to_string(),
                    answer: "Yes. Each question opens and closes on its own.".to_string(),
                },
                FaqEntry {
                    question: "How often do the testimonials rotate?".to_string(),
                    answer: "Every eight seconds, unless someone is navigating by hand."
                        .to_string(),
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: "We set it up in the lobby before lunch and haven't touched it \
                            since. It just runs."
                        .to_string(),
                    author: "Maren Holt".to_string(),
                    role: Some("Front of House, Delta Works".to_string()),
                    date: NaiveDate::from_ymd_opt(2025, 11, 4),
                },
                Testimonial {
                    quote: "Swapping in our own product copy took one file. That was the \
                            whole migration."
                        .to_string(),
                    author: "Theo Brandt".to_string(),
                    role: Some("Operations, Kielgast & Sons".to_string()),
                    date: NaiveDate::from_ymd_opt(2026, 1, 19),
                },
                Testimonial {
                    quote: "Visitors actually read the FAQ now. Nobody ever picked up the \
                            printed one."
                        .to_string(),
                    author: "Priya Raman".to_string(),
                    role: None,
                    date: NaiveDate::from_ymd_opt(2026, 3, 2),
                },
            ],
        }
    }
}

/// Content loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Load showcase content from a TOML file.
///
/// A missing file is not an error: the built-in sample is returned so the
/// kiosk always has something to show.
pub fn load_content(path: &Path) -> Result<ShowcaseContent, ContentError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "no content file found, using sample content");
        return Ok(ShowcaseContent::sample());
    }

    let raw =
        std::fs::read_to_string(path).map_err(|e| ContentError::IoError(e.to_string()))?;

    toml::from_str(&raw).map_err(|e| ContentError::ParseError(e.to_string()))
}
