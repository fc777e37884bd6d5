//! Main application state and egui integration.

use eframe::egui;

use std::time::Instant;

use vitrine::content::{self, ShowcaseContent};
use vitrine::storage::config::{self, AppConfig};
use vitrine::ui::screens::ShowcaseScreen;
use vitrine::ui::theme::Theme;

/// Main application state.
pub struct VitrineApp {
    /// Application configuration
    config: AppConfig,
    /// UI theme
    theme: Theme,
    /// The showcase page
    showcase: ShowcaseScreen,
}

impl VitrineApp {
    /// Create the application, loading config and content with logged
    /// fallbacks so startup never fails on a bad file.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            AppConfig {
                data_dir: config::get_data_dir(),
                ..Default::default()
            }
        });

        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        if (config.ui.font_scale - 1.0).abs() > f32::EPSILON {
            cc.egui_ctx.set_zoom_factor(config.ui.font_scale);
        }

        let content_path = config.content_path();
        let content = content::load_content(&content_path).unwrap_or_else(|e| {
            tracing::error!(
                "Failed to load content from {}: {}, using sample content",
                content_path.display(),
                e
            );
            ShowcaseContent::sample()
        });

        tracing::info!(
            faq_entries = content.faq.len(),
            testimonials = content.testimonials.len(),
            "Content loaded"
        );

        let showcase = ShowcaseScreen::new(content, Instant::now());

        Self {
            config,
            theme,
            showcase,
        }
    }

    /// Toggle between dark and light theme and persist the preference.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        ctx.set_visuals(self.theme.visuals());

        self.config.ui.theme = match self.theme {
            Theme::Dark => config::Theme::Dark,
            Theme::Light => config::Theme::Light,
        };
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Drive autoplay and transition completion
        self.showcase.tick(now);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Vitrine");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.theme {
                        Theme::Dark => "\u{1F319}",
                        Theme::Light => "\u{2600}",
                    };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        let palette = self.theme.palette();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                self.showcase.show(ui, now, palette);
            });
        });

        // Wake up for the next autoplay tick or transition completion
        if let Some(delay) = self.showcase.time_until_next_event(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
