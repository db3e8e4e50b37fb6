//! History tab: fetching and rendering past prompts

use super::App;
use crate::theme;
use crate::ui::components::{format_timestamp, score_color, truncate_preview};
use eframe::egui;
use tracing::debug;

/// Preview length used in the history list
const PREVIEW_CHARS: usize = 150;

/// Single-line truncating table cell
fn cell(ui: &mut egui::Ui, text: impl Into<String>, color: egui::Color32) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text.into())
                .size(theme::FONT_SECTION)
                .color(color),
        )
        .truncate()
        .selectable(false),
    );
}

impl App {
    pub(crate) fn request_history(&mut self, ctx: &egui::Context) {
        self.history_loading = true;
        self.history_error = None;
        self.api.fetch_history(&self.runtime, ctx);
    }

    pub(crate) fn load_history_item(&mut self, ctx: &egui::Context, id: i64) {
        debug!(id, "History item clicked");
        self.api.fetch_history_item(&self.runtime, ctx, id);
    }

    pub(crate) fn render_history(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        use egui_extras::{Column, TableBuilder};

        if self.history_loading {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.spinner();
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new("Loading history...")
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_MUTED),
                );
            });
            return;
        }

        if let Some(err) = self.history_error.clone() {
            let mut retry = false;
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                        .size(48.0)
                        .color(theme::STATUS_ERROR),
                );
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new("Failed to load history. Please try again.")
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(&err)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(theme::SPACING_XL);
                if ui
                    .add(theme::button(format!(
                        "{}  Retry",
                        egui_phosphor::regular::ARROW_CLOCKWISE
                    )))
                    .clicked()
                {
                    retry = true;
                }
            });
            if retry {
                self.request_history(ctx);
            }
            return;
        }

        if self.history.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE)
                        .size(48.0)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new("No prompts generated yet. Start by creating your first prompt!")
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_MUTED),
                );
            });
            return;
        }

        let row_height = theme::HISTORY_ROW_HEIGHT;
        let header_height = 30.0;
        let preview_width =
            (ui.available_width() - (110.0 + 110.0 + 110.0 + 80.0)).max(120.0);

        let mut clicked_item: Option<i64> = None;
        let mut copied_input: Option<String> = None;

        TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .sense(egui::Sense::click())
            .column(Column::exact(110.0))
            .column(Column::exact(110.0))
            .column(Column::exact(110.0))
            .column(Column::exact(80.0))
            .column(Column::exact(preview_width).clip(true))
            .header(header_height, |mut header| {
                for title in ["DATE", "AI TOOL", "CATEGORY", "SCORE", "INPUT"] {
                    header.col(|ui| cell(ui, title, theme::TEXT_DIM));
                }
            })
            .body(|body| {
                body.rows(row_height, self.history.len(), |mut row| {
                    let entry = &self.history[row.index()];

                    row.col(|ui| {
                        cell(ui, format_timestamp(entry.created_at.as_ref()), theme::TEXT_DIM);
                    });
                    row.col(|ui| {
                        let text =
                            format!("{}  {}", egui_phosphor::regular::ROBOT, entry.ai_tool);
                        cell(ui, text, theme::TEXT_SECONDARY);
                    });
                    row.col(|ui| {
                        let text =
                            format!("{}  {}", egui_phosphor::regular::TAG, entry.category);
                        cell(ui, text, theme::TEXT_MUTED);
                    });
                    row.col(|ui| {
                        cell(ui, format!("{}/100", entry.score), score_color(entry.score));
                    });
                    row.col(|ui| {
                        let preview = truncate_preview(&entry.original_input, PREVIEW_CHARS);
                        cell(ui, preview, theme::TEXT_MUTED);
                    });

                    let response = row.response();
                    if response.hovered() {
                        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if response.clicked() {
                        clicked_item = Some(entry.id);
                    }

                    let entry_id = entry.id;
                    let entry_input = entry.original_input.clone();
                    response.context_menu(|ui| {
                        theme::set_menu_width(ui, &["Load prompt", "Copy input"]);
                        if theme::menu_item(
                            ui,
                            egui_phosphor::regular::ARROW_SQUARE_OUT,
                            "Load prompt",
                        ) {
                            clicked_item = Some(entry_id);
                            ui.close_menu();
                        }
                        if theme::menu_item(ui, egui_phosphor::regular::COPY, "Copy input") {
                            copied_input = Some(entry_input.clone());
                            ui.close_menu();
                        }
                    });
                });
            });

        if let Some(id) = clicked_item {
            self.load_history_item(ctx, id);
        }
        if let Some(text) = copied_input {
            ctx.copy_text(text);
            self.toasts.success("Input copied to clipboard!");
        }
    }
}
