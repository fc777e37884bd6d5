//! FAQ accordion widget.

use egui::{Align2, Color32, FontId, Pos2, Sense, Ui, Vec2};

use crate::content::FaqEntry;
use crate::faq::AccordionController;
use crate::ui::theme::Palette;

const HEADER_PADDING: f32 = 12.0;
const PANEL_PADDING: f32 = 12.0;
const CHEVRON_WIDTH: f32 = 28.0;

/// Accordion of FAQ items: clickable question headers, each revealing its
/// answer panel at natural content height when expanded.
pub struct FaqAccordion<'a> {
    entries: &'a [FaqEntry],
    controller: &'a mut AccordionController,
    palette: Palette,
}

impl<'a> FaqAccordion<'a> {
    /// Create the widget for one frame.
    pub fn new(
        entries: &'a [FaqEntry],
        controller: &'a mut AccordionController,
        palette: Palette,
    ) -> Self {
        Self {
            entries,
            controller,
            palette,
        }
    }

    /// Render all items.
    pub fn show(mut self, ui: &mut Ui) {
        let entries = self.entries;
        for (index, entry) in entries.iter().enumerate() {
            self.show_header(ui, index, entry);
            self.show_panel(ui, index, entry);
            ui.add_space(6.0);
        }
    }

    fn show_header(&mut self, ui: &mut Ui, index: usize, entry: &FaqEntry) {
        let width = ui.available_width();
        let wrap_width = width - CHEVRON_WIDTH - 2.0 * HEADER_PADDING;
        let active = self.controller.is_expanded(index);

        let text_color = if active {
            self.palette.accent
        } else {
            self.palette.text_primary
        };
        let galley = ui.painter().layout(
            entry.question.clone(),
            FontId::proportional(16.0),
            text_color,
            wrap_width.max(1.0),
        );

        let height = galley.size().y + 2.0 * HEADER_PADDING;
        let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::click());
        let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

        let bg = if response.hovered() {
            ui.visuals().widgets.hovered.bg_fill
        } else {
            self.palette.card_bg
        };
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 4.0, bg);
        painter.galley(
            Pos2::new(rect.left() + HEADER_PADDING, rect.top() + HEADER_PADDING),
            galley,
            text_color,
        );
        painter.text(
            Pos2::new(rect.right() - HEADER_PADDING, rect.center().y),
            Align2::RIGHT_CENTER,
            if active { "\u{2212}" } else { "+" },
            FontId::proportional(18.0),
            self.palette.accent,
        );

        if response.clicked() {
            self.controller.toggle(index);
        }
    }

    fn show_panel(&mut self, ui: &mut Ui, index: usize, entry: &FaqEntry) {
        let expanded = self.controller.is_expanded(index);
        let id = ui.make_persistent_id(("faq_panel", index));
        // 0..1 reveal factor driving the displayed panel height
        let openness = ui.ctx().animate_bool(id, expanded);
        if openness <= 0.0 {
            return;
        }

        let width = ui.available_width();
        let wrap_width = width - 2.0 * PANEL_PADDING;
        let alpha = (openness * 255.0) as u8;
        let color = Color32::from_rgba_unmultiplied(
            self.palette.text_secondary.r(),
            self.palette.text_secondary.g(),
            self.palette.text_secondary.b(),
            alpha,
        );
        let galley = ui.painter().layout(
            entry.answer.clone(),
            FontId::proportional(14.0),
            color,
            wrap_width.max(1.0),
        );

        let natural_height = galley.size().y + 2.0 * PANEL_PADDING;
        let shown_height = natural_height * openness;
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, shown_height), Sense::hover());

        // Clip to the partially revealed height while animating
        let painter = ui.painter_at(rect);
        painter.galley(
            Pos2::new(rect.left() + PANEL_PADDING, rect.top() + PANEL_PADDING),
            galley,
            color,
        );
    }
}
