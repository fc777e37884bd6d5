//! Unit tests for content loading and the content model.

use std::io::Write;

use vitrine::content::{load_content, ContentError, ShowcaseContent, Testimonial};

const FULL_CONTENT: &str = r#"
title = "Acme Widgets"
tagline = "Widgets for every occasion"

[[faq]]
question = "Do widgets ship assembled?"
answer = "Yes, fully assembled and tested."

[[faq]]
question = "What is the warranty?"
answer = "Two years, parts and labor."

[[testimonials]]
quote = "Best widgets we have ever bought."
author = "Jo March"
role = "Procurement, Orchard House"
date = "2026-02-14"

[[testimonials]]
quote = "Arrived a day early."
author = "Sam Kim"
"#;

#[test]
fn full_content_file_parses() {
    let content: ShowcaseContent = toml::from_str(FULL_CONTENT).unwrap();

    assert_eq!(content.title, "Acme Widgets");
    assert_eq!(content.faq.len(), 2);
    assert_eq!(content.testimonials.len(), 2);

    let dated = &content.testimonials[0];
    assert_eq!(dated.role.as_deref(), Some("Procurement, Orchard House"));
    assert!(dated.date.is_some());

    let bare = &content.testimonials[1];
    assert_eq!(bare.role, None);
    assert_eq!(bare.date, None);
}

#[test]
fn minimal_content_uses_defaults() {
    let content: ShowcaseContent = toml::from_str(r#"title = "Acme""#).unwrap();

    assert_eq!(content.title, "Acme");
    assert!(content.tagline.is_empty());
    assert!(content.faq.is_empty());
    assert!(content.testimonials.is_empty());
}

#[test]
fn missing_file_falls_back_to_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.toml");

    let content = load_content(&path).unwrap();
    assert_eq!(content, ShowcaseContent::sample());
}

#[test]
fn existing_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(FULL_CONTENT.as_bytes()).unwrap();

    let content = load_content(&path).unwrap();
    assert_eq!(content.title, "Acme Widgets");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.toml");
    std::fs::write(&path, "title = [not toml").unwrap();

    match load_content(&path) {
        Err(ContentError::ParseError(_)) => {}
        other => panic!("expected parse error, got {:?}", other.map(|c| c.title)),
    }
}

#[test]
fn content_round_trips_through_toml() {
    let sample = ShowcaseContent::sample();
    let serialized = toml::to_string_pretty(&sample).unwrap();
    let restored: ShowcaseContent = toml::from_str(&serialized).unwrap();
    assert_eq!(restored, sample);
}

#[test]
fn attribution_formats_author_and_role() {
    let with_role = Testimonial {
        quote: "Great.".to_string(),
        author: "Ada".to_string(),
        role: Some("Engineer".to_string()),
        date: None,
    };
    assert_eq!(with_role.attribution(), "Ada, Engineer");

    let without_role = Testimonial {
        role: None,
        ..with_role
    };
    assert_eq!(without_role.attribution(), "Ada");
}
