//! Showcase screen: testimonial carousel above the FAQ accordion.

use std::time::{Duration, Instant};

use egui::{RichText, Ui};

use crate::carousel::CarouselController;
use crate::content::ShowcaseContent;
use crate::faq::AccordionController;
use crate::ui::theme::Palette;
use crate::ui::widgets::{FaqAccordion, TestimonialCarousel};

/// The single page this application shows.
///
/// Owns the loaded content and both interaction controllers. The carousel
/// controller only exists when there is at least one testimonial; with an
/// empty slide list nothing is bound and nothing ticks.
pub struct ShowcaseScreen {
    /// Loaded page content
    content: ShowcaseContent,
    /// FAQ expanded/collapsed state
    accordion: AccordionController,
    /// Carousel state, absent when there are no testimonials
    carousel: Option<CarouselController>,
}

impl ShowcaseScreen {
    /// Create the screen from loaded content.
    pub fn new(content: ShowcaseContent, now: Instant) -> Self {
        let accordion = AccordionController::new(content.faq.len());
        let carousel = CarouselController::new(content.testimonials.len(), now);

        Self {
            content,
            accordion,
            carousel,
        }
    }

    /// Advance time-driven carousel state (autoplay, transition completion).
    pub fn tick(&mut self, now: Instant) {
        if let Some(carousel) = &mut self.carousel {
            carousel.tick(now);
        }
    }

    /// Delay until the next scheduled carousel event, for repaint planning.
    pub fn time_until_next_event(&self, now: Instant) -> Option<Duration> {
        self.carousel
            .as_ref()
            .and_then(|carousel| carousel.time_until_next_event(now))
    }

    /// Render the page.
    pub fn show(&mut self, ui: &mut Ui, now: Instant, palette: Palette) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(&self.content.title).size(30.0).strong());
            if !self.content.tagline.is_empty() {
                ui.label(
                    RichText::new(&self.content.tagline)
                        .size(15.0)
                        .color(palette.text_secondary),
                );
            }
        });
        ui.add_space(18.0);

        if let Some(carousel) = &mut self.carousel {
            ui.label(
                RichText::new("What customers say")
                    .size(18.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(8.0);
            TestimonialCarousel::new(&self.content.testimonials, carousel, palette, now).show(ui);
            ui.add_space(18.0);
            ui.separator();
            ui.add_space(18.0);
        }

        if !self.content.faq.is_empty() {
            ui.label(
                RichText::new("Frequently asked questions")
                    .size(18.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(8.0);
            FaqAccordion::new(&self.content.faq, &mut self.accordion, palette).show(ui);
        }
    }

    /// Loaded content, mostly for tests and the status line.
    pub fn content(&self) -> &ShowcaseContent {
        &self.content
    }

    /// Carousel controller, when one exists.
    pub fn carousel(&self) -> Option<&CarouselController> {
        self.carousel.as_ref()
    }

    /// Mutable carousel controller, when one exists.
    pub fn carousel_mut(&mut self) -> Option<&mut CarouselController> {
        self.carousel.as_mut()
    }

    /// FAQ controller.
    pub fn accordion(&self) -> &AccordionController {
        &self.accordion
    }

    /// Mutable FAQ controller.
    pub fn accordion_mut(&mut self) -> &mut AccordionController {
        &mut self.accordion
    }
}
