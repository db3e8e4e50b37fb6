//! Centralized theme for Prompt Studio: colors, sizes, widget helpers.
//! UI code should pull every color and dimension from here.

use egui::Color32;

// =============================================================================
// COLORS - Surfaces
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0b, 0x0b, 0x0f); // near-black base
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x16, 0x16, 0x1d); // raised panels
pub const BG_INPUT: Color32 = Color32::from_rgb(0x12, 0x12, 0x18); // text inputs
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x24, 0x24, 0x2d); // widgets, menus
pub const BG_HOVER: Color32 = Color32::from_rgb(0x1a, 0x17, 0x26); // violet-tinted hover

// =============================================================================
// COLORS - Accent (Violet)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xa7, 0x8b, 0xfa); // violet-400
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0xc4, 0xb5, 0xfd); // violet-300
pub const ACCENT_DEEP: Color32 = Color32::from_rgb(0x5b, 0x21, 0xb6); // violet-800

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xd9, 0xd9, 0xe3);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9d, 0x9d, 0xa8);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x6d, 0x6d, 0x78);

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x23, 0x23, 0x2b);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3b, 0x3b, 0x45);

// =============================================================================
// COLORS - Status & toasts
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80); // green-400
pub const STATUS_INFO: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa); // blue-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400
pub const ERROR_BOX_BG: Color32 = Color32::from_rgb(0x2b, 0x0c, 0x0c);
pub const ERROR_BOX_BORDER: Color32 = Color32::from_rgb(0x7a, 0x1f, 0x1f);
pub const ERROR_BOX_TEXT: Color32 = Color32::from_rgb(0xfb, 0xa8, 0xa8);

// =============================================================================
// COLORS - Score tiers (match the label mapping)
// =============================================================================
pub const SCORE_EXCELLENT: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80); // green-400
pub const SCORE_VERY_GOOD: Color32 = Color32::from_rgb(0x22, 0xd3, 0xee); // cyan-400
pub const SCORE_GOOD: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15); // yellow-400
pub const SCORE_FAIR: Color32 = Color32::from_rgb(0xfb, 0x92, 0x3c); // orange-400
pub const SCORE_POOR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Tabs & buttons
// =============================================================================
pub const TAB_SELECTED: Color32 = ACCENT_DEEP;
pub const TAB_UNSELECTED: Color32 = Color32::from_rgb(0x24, 0x24, 0x2d);
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3b, 0x3b, 0x45);
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0xa7, 0x8b, 0xfa);
pub const BTN_ACCENT_TEXT: Color32 = Color32::from_rgb(0x21, 0x11, 0x4a);

// =============================================================================
// TYPOGRAPHY
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SECTION: f32 = 12.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// LAYOUT
// =============================================================================
pub const HEADER_HEIGHT: f32 = 56.0;
pub const FORM_MAX_WIDTH: f32 = 720.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const HISTORY_ROW_HEIGHT: f32 = 36.0;
pub const MODAL_WIDTH: f32 = 380.0;

// =============================================================================
// RADII / STROKES / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;
pub const SPACING_XS: f32 = 2.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

pub fn apply_visuals(ctx: &egui::Context) {
    let base_widget = |bg: Color32, fg: Color32, stroke: Color32, expansion: f32| {
        egui::style::WidgetVisuals {
            bg_fill: bg,
            weak_bg_fill: bg,
            bg_stroke: egui::Stroke::new(STROKE_DEFAULT, stroke),
            fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
            corner_radius: RADIUS_DEFAULT.into(),
            expansion,
        }
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x32, 0x55), // muted violet text selection
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: base_widget(BG_ELEVATED, TEXT_PRIMARY, BORDER_SUBTLE, 0.0),
            inactive: base_widget(Color32::TRANSPARENT, TEXT_SECONDARY, BORDER_SUBTLE, 0.0),
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: base_widget(BG_SURFACE, TEXT_PRIMARY, BORDER_SUBTLE, -1.0),
            open: base_widget(BG_SURFACE, TEXT_PRIMARY, BORDER_SUBTLE, 0.0),
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 3],
            blur: 10,
            spread: 0,
            color: Color32::from_black_alpha(90),
        },
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.menu_margin = egui::Margin::symmetric(6, 4);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Card frame for the results panel
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x16, 0x16, 0x1d, 160))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_LG)
}

/// Frame for modal dialogs
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(0x10, 0x10, 0x15))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

/// Inset section frame (prompt body, analysis body, inputs)
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(SPACING_LG)
}

/// Red-tinted frame for inline error boxes
pub fn error_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(ERROR_BOX_BG)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, ERROR_BOX_BORDER))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(SPACING_MD + 2.0)
}

// =============================================================================
// HELPER - Buttons & menus
// =============================================================================

/// Neutral gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Violet button for the primary action of a view
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(BTN_ACCENT_TEXT))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Hand-painted context menu row. Returns true on click.
pub fn menu_item(ui: &mut egui::Ui, icon: &str, label: &str) -> bool {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 24.0), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter()
            .rect_filled(rect, RADIUS_DEFAULT, lighten(BG_SURFACE, 0.12));
    }
    ui.painter().text(
        rect.left_center() + egui::vec2(8.0, 0.0),
        egui::Align2::LEFT_CENTER,
        format!("{}  {}", icon, label),
        egui::FontId::proportional(FONT_LABEL),
        TEXT_SECONDARY,
    );
    response.clicked()
}

/// Fix a context menu's width to comfortably fit its widest label.
pub fn set_menu_width(ui: &mut egui::Ui, labels: &[&str]) {
    let widest = labels
        .iter()
        .map(|label| {
            ui.fonts(|fonts| {
                fonts
                    .layout_no_wrap(
                        label.to_string(),
                        egui::FontId::proportional(FONT_LABEL),
                        TEXT_SECONDARY,
                    )
                    .rect
                    .width()
            })
        })
        .fold(0.0_f32, f32::max);
    let width = (widest + 16.0) * 1.5;
    ui.set_min_width(width);
    ui.set_max_width(width);
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let channel = |v: u8| (v as f32 + (255.0 - v as f32) * amount) as u8;
    Color32::from_rgb(channel(c.r()), channel(c.g()), channel(c.b()))
}
