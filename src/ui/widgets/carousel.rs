//! Testimonial carousel widget.
//!
//! Draws the active slide (and, mid-transition, the outgoing one) inside a
//! clipped viewport at eased horizontal offsets, with previous/next arrows,
//! an indicator dot row, and horizontal drag-swipe capture.

use std::time::Instant;

use egui::{
    Align2, Button, FontId, Pos2, Rect, RichText, Sense, Ui, Vec2,
};

use crate::carousel::{CarouselController, SlideDirection};
use crate::content::Testimonial;
use crate::ui::theme::Palette;

const CARD_HEIGHT: f32 = 170.0;
const CARD_PADDING: f32 = 24.0;
const ARROW_WIDTH: f32 = 30.0;
const DOT_SPACING: f32 = 20.0;
const DOT_ROW_HEIGHT: f32 = 22.0;

/// One-frame view over the carousel controller and its slides.
pub struct TestimonialCarousel<'a> {
    slides: &'a [Testimonial],
    controller: &'a mut CarouselController,
    palette: Palette,
    now: Instant,
}

impl<'a> TestimonialCarousel<'a> {
    /// Create the widget for one frame.
    pub fn new(
        slides: &'a [Testimonial],
        controller: &'a mut CarouselController,
        palette: Palette,
        now: Instant,
    ) -> Self {
        Self {
            slides,
            controller,
            palette,
            now,
        }
    }

    /// Render the slide viewport, arrows, and dots.
    pub fn show(self, ui: &mut Ui) {
        let Self {
            slides,
            controller,
            palette,
            now,
        } = self;

        ui.horizontal(|ui| {
            let prev_clicked = ui
                .add_sized(
                    [ARROW_WIDTH, CARD_HEIGHT],
                    Button::new(RichText::new("\u{25C0}").size(20.0)).frame(false),
                )
                .clicked();

            let viewport_width = (ui.available_width() - ARROW_WIDTH - ui.spacing().item_spacing.x)
                .max(ARROW_WIDTH);
            let (viewport, response) = ui.allocate_exact_size(
                Vec2::new(viewport_width, CARD_HEIGHT),
                Sense::click_and_drag(),
            );

            // Swipe capture: record the press x, interpret the release
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    controller.touch_start(pos.x);
                }
            }
            if response.drag_stopped() {
                let end = response
                    .interact_pointer_pos()
                    .or_else(|| ui.input(|i| i.pointer.latest_pos()));
                if let Some(pos) = end {
                    controller.touch_end(pos.x, now);
                }
            }

            paint_slides(ui, viewport, slides, controller, &palette, now);

            let next_clicked = ui
                .add_sized(
                    [ARROW_WIDTH, CARD_HEIGHT],
                    Button::new(RichText::new("\u{25B6}").size(20.0)).frame(false),
                )
                .clicked();

            if prev_clicked {
                controller.prev(now);
            }
            if next_clicked {
                controller.next(now);
            }
        });

        show_dots(ui, controller, &palette, now);

        if controller.is_transitioning() {
            ui.ctx().request_repaint();
        }
    }
}

fn paint_slides(
    ui: &Ui,
    viewport: Rect,
    slides: &[Testimonial],
    controller: &CarouselController,
    palette: &Palette,
    now: Instant,
) {
    let painter = ui.painter_at(viewport);
    let width = viewport.width();

    match controller.outgoing() {
        None => {
            paint_card(
                &painter,
                viewport,
                &slides[controller.current_index()],
                palette,
            );
        }
        Some((outgoing, direction)) => {
            let t = ease(controller.transition_progress(now));
            // Incoming enters from the side matching the direction of
            // travel; outgoing keeps moving the same way and exits through
            // the opposite side.
            let (enter_from, exit_to) = match direction {
                SlideDirection::Next => (width, -width),
                SlideDirection::Prev => (-width, width),
            };

            let incoming_rect = viewport.translate(Vec2::new(enter_from * (1.0 - t), 0.0));
            let outgoing_rect = viewport.translate(Vec2::new(exit_to * t, 0.0));

            paint_card(&painter, outgoing_rect, &slides[outgoing], palette);
            paint_card(
                &painter,
                incoming_rect,
                &slides[controller.current_index()],
                palette,
            );
        }
    }
}

fn paint_card(painter: &egui::Painter, rect: Rect, slide: &Testimonial, palette: &Palette) {
    painter.rect_filled(rect, 8.0, palette.card_bg);

    let wrap_width = (rect.width() - 2.0 * CARD_PADDING).max(1.0);
    let quote = format!("\u{201C}{}\u{201D}", slide.quote);
    let galley = painter.layout(
        quote,
        FontId::proportional(17.0),
        palette.text_primary,
        wrap_width,
    );
    painter.galley(
        Pos2::new(rect.left() + CARD_PADDING, rect.top() + CARD_PADDING),
        galley,
        palette.text_primary,
    );

    painter.text(
        Pos2::new(
            rect.left() + CARD_PADDING,
            rect.bottom() - CARD_PADDING * 0.75,
        ),
        Align2::LEFT_BOTTOM,
        slide.attribution(),
        FontId::proportional(13.0),
        palette.text_secondary,
    );

    if let Some(date) = slide.date {
        painter.text(
            Pos2::new(
                rect.right() - CARD_PADDING,
                rect.bottom() - CARD_PADDING * 0.75,
            ),
            Align2::RIGHT_BOTTOM,
            date.format("%B %Y").to_string(),
            FontId::proportional(12.0),
            palette.text_muted,
        );
    }
}

fn show_dots(ui: &mut Ui, controller: &mut CarouselController, palette: &Palette, now: Instant) {
    let count = controller.slide_count();
    let (row, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), DOT_ROW_HEIGHT),
        Sense::hover(),
    );

    let total = count as f32 * DOT_SPACING;
    let start_x = row.center().x - total / 2.0 + DOT_SPACING / 2.0;

    for index in 0..count {
        let center = Pos2::new(start_x + index as f32 * DOT_SPACING, row.center().y);
        let dot_rect = Rect::from_center_size(center, Vec2::splat(14.0));
        let id = ui.make_persistent_id(("testimonial_dot", index));
        let response = ui
            .interact(dot_rect, id, Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            controller.select(index, now);
        }

        let active = index == controller.current_index();
        let (radius, color) = if active {
            (5.0, palette.accent)
        } else if response.hovered() {
            (4.5, palette.text_secondary)
        } else {
            (4.0, palette.text_muted)
        };
        ui.painter().circle_filled(center, radius, color);
    }
}

/// Smoothstep easing for the slide offsets.
fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
