//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::app::session::score_label;
use crate::theme;
use chrono::{DateTime, Utc};
use eframe::egui;

/// Color tier matching the score label mapping
pub fn score_color(score: i64) -> egui::Color32 {
    match score_label(score) {
        "Excellent" => theme::SCORE_EXCELLENT,
        "Very Good" => theme::SCORE_VERY_GOOD,
        "Good" => theme::SCORE_GOOD,
        "Fair" => theme::SCORE_FAIR,
        _ => theme::SCORE_POOR,
    }
}

/// Format a timestamp for the history list, "N/A" when absent
pub fn format_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.with_timezone(&chrono::Local).format("%Y-%m-%d").to_string(),
        None => "N/A".to_string(),
    }
}

/// Truncate a preview string to `max_chars`, appending an ellipsis.
/// Char-based so multi-byte input never splits.
pub fn truncate_preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }
}

/// Custom-painted navigation tab. Returns the click response.
pub fn tab_button(ui: &mut egui::Ui, icon: &str, label: &str, active: bool) -> egui::Response {
    let text = format!("{}  {}", icon, label);
    let font = egui::FontId::proportional(theme::FONT_LABEL);
    let text_width = ui.fonts(|f| {
        f.layout_no_wrap(text.clone(), font.clone(), theme::TEXT_SECONDARY)
            .rect
            .width()
    });
    let size = egui::vec2(text_width + 28.0, theme::BUTTON_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        if active {
            painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::TAB_SELECTED);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            painter.rect_filled(
                rect,
                theme::RADIUS_DEFAULT,
                theme::lighten(theme::TAB_UNSELECTED, 0.06),
            );
        }
        let color = if active {
            theme::ACCENT_LIGHT
        } else {
            theme::TEXT_MUTED
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            font,
            color,
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncation_boundaries() {
        assert_eq!(truncate_preview("short", 150), "short");
        let exact: String = "x".repeat(150);
        assert_eq!(truncate_preview(&exact, 150), exact);
        let long: String = "x".repeat(151);
        let out = truncate_preview(&long, 150);
        assert_eq!(out.chars().count(), 153);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn preview_truncation_is_char_safe() {
        let s = "é".repeat(200);
        let out = truncate_preview(&s, 150);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 153);
    }

    #[test]
    fn missing_timestamp_renders_na() {
        assert_eq!(format_timestamp(None), "N/A");
    }
}
