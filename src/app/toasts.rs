//! Transient toast notifications
//!
//! Toasts stack bottom-right of the central panel, newest at the bottom.
//! Each lives 5 seconds (fading over the last half second), pauses while
//! hovered, and can be dismissed early by clicking it.

use crate::theme;
use eframe::egui;
use std::time::Instant;

const VISIBLE_SECS: f32 = 4.5;
const FADE_SECS: f32 = 0.5;
const TOTAL_SECS: f32 = VISIBLE_SECS + FADE_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn color(&self) -> egui::Color32 {
        match self {
            ToastKind::Success => theme::STATUS_SUCCESS,
            ToastKind::Error => theme::STATUS_ERROR,
            ToastKind::Info => theme::STATUS_INFO,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => egui_phosphor::regular::CHECK_CIRCLE,
            ToastKind::Error => egui_phosphor::regular::WARNING_CIRCLE,
            ToastKind::Info => egui_phosphor::regular::INFO,
        }
    }
}

struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
    shown: Instant,
}

/// Opacity over the toast lifetime: opaque, then a short fade-out tail.
fn alpha_at(elapsed_secs: f32) -> f32 {
    if elapsed_secs <= VISIBLE_SECS {
        1.0
    } else {
        ((TOTAL_SECS - elapsed_secs) / FADE_SECS).clamp(0.0, 1.0)
    }
}

fn expired_at(elapsed_secs: f32) -> bool {
    elapsed_secs >= TOTAL_SECS
}

#[derive(Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    /// Arrival order, no deduplication.
    pub fn push(&mut self, kind: ToastKind, message: String) {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message,
            shown: Instant::now(),
        });
    }

    pub fn render(&mut self, ctx: &egui::Context, panel_rect: egui::Rect) {
        if self.toasts.is_empty() {
            return;
        }

        let margin = 12.0;
        let mut anchor_y = panel_rect.bottom() - margin;
        let mut dismissed: Option<u64> = None;

        // Newest at the bottom, older toasts pushed upward
        for toast in self.toasts.iter_mut().rev() {
            let elapsed = toast.shown.elapsed().as_secs_f32();
            let alpha = alpha_at(elapsed);
            let accent = toast.kind.color();

            let response = egui::Area::new(egui::Id::new(("toast", toast.id)))
                .fixed_pos(egui::pos2(panel_rect.right() - margin, anchor_y))
                .pivot(egui::Align2::RIGHT_BOTTOM)
                .show(ctx, |ui| {
                    egui::Frame::new()
                        .fill(egui::Color32::from_rgba_unmultiplied(
                            0x1a,
                            0x1a,
                            0x1e,
                            (230.0 * alpha) as u8,
                        ))
                        .stroke(egui::Stroke::new(
                            1.0,
                            egui::Color32::from_rgba_unmultiplied(
                                accent.r(),
                                accent.g(),
                                accent.b(),
                                (100.0 * alpha) as u8,
                            ),
                        ))
                        .corner_radius(theme::RADIUS_MEDIUM)
                        .inner_margin(egui::Margin::symmetric(16, 10))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(toast.kind.icon()).color(
                                        egui::Color32::from_rgba_unmultiplied(
                                            accent.r(),
                                            accent.g(),
                                            accent.b(),
                                            (255.0 * alpha) as u8,
                                        ),
                                    ),
                                );
                                ui.label(egui::RichText::new(&toast.message).color(
                                    egui::Color32::from_rgba_unmultiplied(
                                        255,
                                        255,
                                        255,
                                        (255.0 * alpha) as u8,
                                    ),
                                ));
                            });
                        });
                });

            // Pause the timer while hovered, dismiss on click
            if response.response.hovered() {
                toast.shown = Instant::now();
            }
            if response.response.clicked() {
                dismissed = Some(toast.id);
            }

            anchor_y -= response.response.rect.height() + 8.0;
        }

        if let Some(id) = dismissed {
            self.toasts.retain(|t| t.id != id);
        }
        self.toasts
            .retain(|t| !expired_at(t.shown.elapsed().as_secs_f32()));

        if !self.toasts.is_empty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_opaque_then_fades() {
        assert_eq!(alpha_at(0.0), 1.0);
        assert_eq!(alpha_at(4.5), 1.0);
        let mid_fade = alpha_at(4.75);
        assert!(mid_fade > 0.0 && mid_fade < 1.0);
        assert_eq!(alpha_at(5.0), 0.0);
    }

    #[test]
    fn expiry_at_five_seconds() {
        assert!(!expired_at(4.9));
        assert!(expired_at(5.0));
        assert!(expired_at(6.0));
    }

    #[test]
    fn toasts_stack_in_arrival_order() {
        let mut queue = ToastQueue::default();
        queue.success("first");
        queue.error("second");
        queue.info("second"); // duplicates allowed
        assert_eq!(queue.toasts.len(), 3);
        assert_eq!(queue.toasts[0].message, "first");
        assert!(queue.toasts[0].id < queue.toasts[1].id);
    }
}
