#![windows_subsystem = "windows"]
//! Prompt Studio - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::forms::FormField;
use app::session::{score_label, Tab};
use app::App;
use constants::*;
use eframe::egui;
use tracing::info;
use types::ExportFormat;
use ui::components::{score_color, tab_button};

/// Initialize daily-rolling file logging. The returned guard must be held
/// for the app lifetime or buffered log lines are lost.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        &logs_dir,
        "prompt-studio.log",
    ));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,prompt_studio=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::app_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Prompt Studio starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1100.0, 760.0)))
        .with_min_inner_size([900.0, 640.0])
        .with_title("Prompt Studio");

    // Window/taskbar icon rasterized from the inline SVG
    {
        let (rgba, w, h) = utils::rasterize_logo_square(64);
        let icon = egui::IconData { rgba, width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Prompt Studio",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // First frame: load dropdown options and check for updates
        if !self.bootstrapped {
            self.bootstrapped = true;
            self.bootstrap(ctx);
            self.check_for_updates(ctx);
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Settle background work
        self.drain_api_events(ctx);
        self.poll_update_results(ctx);

        // Render modals
        self.render_update_dialogs(ctx);
        self.render_settings_modal(ctx);

        // Global keyboard shortcuts
        self.handle_shortcuts(ctx);

        // Header with logo, tab bar and status
        self.render_header(ctx);

        // Central panel - active tab content (added LAST after panels)
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                match self.session.current_tab() {
                    Tab::Generate | Tab::Improve | Tab::Analyze => {
                        egui::ScrollArea::vertical()
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                ui.set_max_width(theme::FORM_MAX_WIDTH);
                                match self.session.current_tab() {
                                    Tab::Generate => self.render_generate_form(ui, ctx),
                                    Tab::Improve => self.render_improve_form(ui, ctx),
                                    Tab::Analyze => self.render_analyze_form(ui, ctx),
                                    Tab::History => {}
                                }
                                ui.add_space(theme::SPACING_XL);
                                self.render_results(ui, ctx);
                            });
                    }
                    Tab::History => {
                        if self.session.results_visible() {
                            egui::ScrollArea::vertical()
                                .auto_shrink([false, false])
                                .show(ui, |ui| {
                                    ui.set_max_width(theme::FORM_MAX_WIDTH);
                                    self.render_results(ui, ctx);
                                });
                        } else {
                            self.render_history(ui, ctx);
                        }
                    }
                }
            });

        // Toast notifications over the central panel
        if let Some(panel_rect) = self.central_panel_rect {
            self.toasts.render(ctx, panel_rect);
        }

        // Keep repainting while the score count-up runs
        if self.session.results_visible() {
            if let Some(results) = self.session.results() {
                if !results.score_anim.finished() {
                    ctx.request_repaint();
                }
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// SHORTCUTS & HEADER
// ============================================================================

impl App {
    /// Ctrl/Cmd+1..4 switch tabs, Ctrl/Cmd+Enter submits the active form,
    /// Escape hides the results panel. Suppressed while a modal is open.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.show_settings || self.show_app_update_dialog {
            return;
        }

        let mut tab_switch: Option<Tab> = None;
        let mut submit = false;
        let mut escape = false;

        ctx.input(|i| {
            if i.modifiers.command {
                if i.key_pressed(egui::Key::Num1) {
                    tab_switch = Some(Tab::Generate);
                } else if i.key_pressed(egui::Key::Num2) {
                    tab_switch = Some(Tab::Improve);
                } else if i.key_pressed(egui::Key::Num3) {
                    tab_switch = Some(Tab::Analyze);
                } else if i.key_pressed(egui::Key::Num4) {
                    tab_switch = Some(Tab::History);
                }
                if i.key_pressed(egui::Key::Enter) {
                    submit = true;
                }
            }
            if i.key_pressed(egui::Key::Escape) {
                escape = true;
            }
        });

        if let Some(tab) = tab_switch {
            self.switch_tab(ctx, tab);
        }
        if submit {
            self.submit_active_form(ctx);
        }
        if escape && self.session.results_visible() {
            self.session.hide_results();
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(16, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    // Logo
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_logo(64);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(28.0, 28.0),
                    ));

                    ui.add_space(theme::SPACING_SM);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("PROMPT STUDIO")
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );

                    ui.add_space(theme::SPACING_XL);

                    // Tab bar
                    let mut clicked: Option<Tab> = None;
                    for (tab, icon) in [
                        (Tab::Generate, egui_phosphor::regular::SPARKLE),
                        (Tab::Improve, egui_phosphor::regular::MAGIC_WAND),
                        (Tab::Analyze, egui_phosphor::regular::CHART_BAR),
                        (Tab::History, egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE),
                    ] {
                        let active = self.session.current_tab() == tab;
                        if tab_button(ui, icon, tab.label(), active).clicked() {
                            clicked = Some(tab);
                        }
                    }
                    if let Some(tab) = clicked {
                        self.switch_tab(ctx, tab);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Settings gear
                        if ui
                            .add(egui::Button::new(egui_phosphor::regular::GEAR).frame(false))
                            .on_hover_text("Settings")
                            .clicked()
                        {
                            self.show_settings = !self.show_settings;
                        }

                        // Loading indicator while any request is pending
                        if self.pending_requests > 0 {
                            ui.spinner();
                        }
                    });
                });
            });
    }
}

// ============================================================================
// FORM RENDERING
// ============================================================================

/// Dropdown bound to a backend option set. Key is stored, label displayed.
fn option_combo(
    ui: &mut egui::Ui,
    id_salt: &str,
    selected: &mut String,
    options: &[(String, String)],
    placeholder: &str,
) -> egui::Response {
    let selected_label = options
        .iter()
        .find(|(key, _)| key.as_str() == selected.as_str())
        .map(|(_, label)| label.clone())
        .unwrap_or_else(|| placeholder.to_string());

    egui::ComboBox::from_id_salt(id_salt)
        .width(200.0)
        .selected_text(selected_label)
        .show_ui(ui, |ui| {
            for (key, label) in options {
                ui.selectable_value(selected, key.clone(), label);
            }
        })
        .response
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}

fn prompt_editor(ui: &mut egui::Ui, text: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::multiline(text)
            .desired_rows(5)
            .desired_width(f32::INFINITY)
            .hint_text(hint)
            .font(egui::FontId::proportional(theme::FONT_BODY)),
    )
}

impl App {
    fn take_focus(&mut self, tab: Tab) -> Option<FormField> {
        match self.focus_field {
            Some((focus_tab, field)) if focus_tab == tab => {
                self.focus_field = None;
                Some(field)
            }
            _ => None,
        }
    }

    fn render_generate_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let focus = self.take_focus(Tab::Generate);
        let mut submit = false;

        field_label(ui, "What do you want to create?");
        let input_resp = prompt_editor(
            ui,
            &mut self.generate_form.user_input,
            "Describe the content you need, e.g. \"write a blog post about remote work\"",
        );
        if focus == Some(FormField::UserInput) {
            input_resp.request_focus();
        }

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                field_label(ui, "AI Tool");
                let resp = option_combo(
                    ui,
                    "generate_ai_tool",
                    &mut self.generate_form.ai_tool,
                    &self.ai_tools,
                    "Select AI tool",
                );
                if focus == Some(FormField::AiTool) {
                    resp.request_focus();
                }
            });
            ui.vertical(|ui| {
                field_label(ui, "Output Style");
                let resp = option_combo(
                    ui,
                    "generate_output_style",
                    &mut self.generate_form.output_style,
                    &self.output_styles,
                    "Select style",
                );
                if focus == Some(FormField::OutputStyle) {
                    resp.request_focus();
                }
            });
            ui.vertical(|ui| {
                field_label(ui, "Category");
                let resp = option_combo(
                    ui,
                    "generate_category",
                    &mut self.generate_form.category,
                    &self.categories,
                    "Select category",
                );
                if focus == Some(FormField::Category) {
                    resp.request_focus();
                }
            });
        });

        ui.add_space(theme::SPACING_MD);
        field_label(ui, "SEO Keywords (optional)");
        ui.add(
            egui::TextEdit::singleline(&mut self.generate_form.seo_keywords)
                .desired_width(f32::INFINITY)
                .hint_text("comma, separated, keywords"),
        );

        ui.add_space(theme::SPACING_LG);
        if ui
            .add(theme::button_accent(format!(
                "{}  Generate Prompt",
                egui_phosphor::regular::SPARKLE
            )))
            .clicked()
        {
            submit = true;
        }

        if submit {
            self.submit_generate(ctx);
        }
    }

    fn render_improve_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let focus = self.take_focus(Tab::Improve);
        let mut submit = false;

        field_label(ui, "Existing prompt");
        let input_resp = prompt_editor(
            ui,
            &mut self.improve_form.existing_prompt,
            "Paste the prompt you want to improve",
        );
        if focus == Some(FormField::ExistingPrompt) {
            input_resp.request_focus();
        }

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                field_label(ui, "AI Tool");
                let resp = option_combo(
                    ui,
                    "improve_ai_tool",
                    &mut self.improve_form.ai_tool,
                    &self.ai_tools,
                    "Select AI tool",
                );
                if focus == Some(FormField::AiTool) {
                    resp.request_focus();
                }
            });
            ui.vertical(|ui| {
                field_label(ui, "Output Style");
                let resp = option_combo(
                    ui,
                    "improve_output_style",
                    &mut self.improve_form.output_style,
                    &self.output_styles,
                    "Select style",
                );
                if focus == Some(FormField::OutputStyle) {
                    resp.request_focus();
                }
            });
            ui.vertical(|ui| {
                field_label(ui, "Category");
                let resp = option_combo(
                    ui,
                    "improve_category",
                    &mut self.improve_form.category,
                    &self.categories,
                    "Select category",
                );
                if focus == Some(FormField::Category) {
                    resp.request_focus();
                }
            });
        });

        ui.add_space(theme::SPACING_LG);
        if ui
            .add(theme::button_accent(format!(
                "{}  Improve Prompt",
                egui_phosphor::regular::MAGIC_WAND
            )))
            .clicked()
        {
            submit = true;
        }

        if submit {
            self.submit_improve(ctx);
        }
    }

    fn render_analyze_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let focus = self.take_focus(Tab::Analyze);
        let mut submit = false;

        field_label(ui, "Prompt to analyze");
        let input_resp = prompt_editor(
            ui,
            &mut self.analyze_form.prompt,
            "Paste a prompt to get an analysis and quality score",
        );
        if focus == Some(FormField::AnalyzePrompt) {
            input_resp.request_focus();
        }

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                field_label(ui, "AI Tool");
                let resp = option_combo(
                    ui,
                    "analyze_ai_tool",
                    &mut self.analyze_form.ai_tool,
                    &self.ai_tools,
                    "Select AI tool",
                );
                if focus == Some(FormField::AiTool) {
                    resp.request_focus();
                }
            });
            ui.vertical(|ui| {
                field_label(ui, "Category");
                let resp = option_combo(
                    ui,
                    "analyze_category",
                    &mut self.analyze_form.category,
                    &self.categories,
                    "Select category",
                );
                if focus == Some(FormField::Category) {
                    resp.request_focus();
                }
            });
        });

        ui.add_space(theme::SPACING_LG);
        if ui
            .add(theme::button_accent(format!(
                "{}  Analyze Prompt",
                egui_phosphor::regular::CHART_BAR
            )))
            .clicked()
        {
            submit = true;
        }

        if submit {
            self.submit_analyze(ctx);
        }
    }
}

// ============================================================================
// RESULTS PANEL
// ============================================================================

enum ResultsAction {
    Copy,
    Export(ExportFormat),
    Close,
}

impl App {
    fn render_results(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if !self.session.results_visible() {
            return;
        }
        let Some(results) = self.session.results() else {
            return;
        };

        let prompt_text = results.prompt_text.clone();
        let analysis = results.analysis.clone();
        let display_score = if results.score_anim.finished() {
            results.score
        } else {
            results.score_anim.current()
        };
        let mut action: Option<ResultsAction> = None;

        let card = theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Results")
                            .size(theme::FONT_HEADING)
                            .strong(),
                    )
                    .selectable(false),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new(egui_phosphor::regular::X).frame(false))
                        .on_hover_text("Escape")
                        .clicked()
                    {
                        action = Some(ResultsAction::Close);
                    }
                });
            });

            ui.add_space(theme::SPACING_SM);

            // Score with count-up and tier label
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("{}", display_score))
                            .size(32.0)
                            .strong()
                            .color(score_color(display_score)),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("/100")
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_MD);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(score_label(display_score))
                            .size(theme::FONT_BODY)
                            .color(score_color(display_score)),
                    )
                    .selectable(false),
                );
            });

            ui.add_space(theme::SPACING_MD);
            field_label(ui, "Prompt");
            theme::section_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                let mut text: &str = &prompt_text;
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .desired_width(f32::INFINITY)
                        .frame(false)
                        .font(egui::TextStyle::Monospace),
                );
            });

            ui.add_space(theme::SPACING_MD);
            field_label(ui, "Analysis");
            theme::section_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.add(egui::Label::new(
                    egui::RichText::new(&analysis)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                ));
            });

            ui.add_space(theme::SPACING_LG);
            ui.horizontal(|ui| {
                if ui
                    .add(theme::button_accent(format!(
                        "{}  Copy",
                        egui_phosphor::regular::COPY
                    )))
                    .clicked()
                {
                    action = Some(ResultsAction::Copy);
                }
                if ui
                    .add(theme::button(format!(
                        "{}  Export TXT",
                        egui_phosphor::regular::FILE_TEXT
                    )))
                    .clicked()
                {
                    action = Some(ResultsAction::Export(ExportFormat::Txt));
                }
                if ui
                    .add(theme::button(format!(
                        "{}  Export JSON",
                        egui_phosphor::regular::BRACKETS_CURLY
                    )))
                    .clicked()
                {
                    action = Some(ResultsAction::Export(ExportFormat::Json));
                }
            });
        });

        if self.session.take_scroll_request() {
            card.response.scroll_to_me(Some(egui::Align::Min));
        }

        match action {
            Some(ResultsAction::Copy) => self.copy_prompt(ctx),
            Some(ResultsAction::Export(format)) => self.request_export(ctx, format),
            Some(ResultsAction::Close) => self.session.hide_results(),
            None => {}
        }
    }
}

// ============================================================================
// SETTINGS MODAL
// ============================================================================

/// Framed single-line input used by the settings modal
fn settings_input(ui: &mut egui::Ui, text: &mut String, width: f32) -> egui::Response {
    theme::section_frame()
        .inner_margin(egui::Margin::symmetric(6, 4))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(text)
                    .frame(false)
                    .desired_width(width)
                    .font(egui::FontId::proportional(theme::FONT_LABEL)),
            )
        })
        .inner
}

impl App {
    fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("settings_modal"))
            .area(
                egui::Modal::default_area(egui::Id::new("settings_modal"))
                    .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0),
            )
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            ui.add(
                egui::Label::new(
                    egui::RichText::new("Settings")
                        .size(theme::FONT_TITLE)
                        .strong(),
                )
                .selectable(false),
            );

            ui.add_space(theme::SPACING_MD);
            ui.separator();
            ui.add_space(theme::SPACING_SM);

            // — Server —
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Server")
                        .size(theme::FONT_LABEL)
                        .color(theme::ACCENT),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_XS);
            let server_resp = settings_input(ui, &mut self.server_url, f32::INFINITY);
            if server_resp.lost_focus() {
                let url = self.server_url.trim_end_matches('/').trim().to_string();
                self.server_url = if url.is_empty() {
                    DEFAULT_SERVER_URL.to_string()
                } else {
                    url
                };
                self.api.set_server_url(self.server_url.clone());
                self.save_settings();
            }

            ui.add_space(theme::SPACING_MD);
            ui.separator();
            ui.add_space(theme::SPACING_SM);

            // — Export Path —
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Export Path")
                        .size(theme::FONT_LABEL)
                        .color(theme::ACCENT),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_XS);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Leave empty to choose a location on every export.")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_XS);

            let path_resp = settings_input(ui, &mut self.export_dir_str, f32::INFINITY);
            if path_resp.lost_focus() {
                let trimmed = self.export_dir_str.trim();
                self.export_dir = if trimmed.is_empty() {
                    None
                } else {
                    Some(std::path::PathBuf::from(trimmed))
                };
                self.save_settings();
            }

            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                if ui
                    .add(theme::button(format!(
                        "{}  Browse",
                        egui_phosphor::regular::FOLDER_OPEN
                    )))
                    .clicked()
                {
                    let mut dialog = rfd::FileDialog::new();
                    if let Some(dir) = &self.export_dir {
                        dialog = dialog.set_directory(dir);
                    }
                    if let Some(path) = dialog.pick_folder() {
                        self.export_dir_str = path.to_string_lossy().to_string();
                        self.export_dir = Some(path);
                        self.save_settings();
                    }
                }
                if let Some(dir) = self.export_dir.clone() {
                    if ui
                        .add(theme::button(format!(
                            "{}  Open Folder",
                            egui_phosphor::regular::ARROW_SQUARE_OUT
                        )))
                        .clicked()
                    {
                        std::fs::create_dir_all(&dir).ok();
                        let _ = open::that(&dir);
                    }
                }
            });
        });

        if modal_response.should_close() {
            self.show_settings = false;
        }
    }
}

// ============================================================================
// UPDATE DIALOG
// ============================================================================

impl App {
    fn poll_update_results(&mut self, ctx: &egui::Context) {
        // Check for app update available
        if self.app_update_available.is_none() {
            if let Some(version) =
                ctx.memory(|mem| mem.data.get_temp::<String>("app_update".into()))
            {
                ctx.memory_mut(|mem| {
                    mem.data.remove::<String>("app_update".into());
                });
                self.app_update_available = Some(version);
                self.app_update_body =
                    ctx.memory(|mem| mem.data.get_temp::<String>("app_update_body".into()));
                ctx.memory_mut(|mem| {
                    mem.data.remove::<String>("app_update_body".into());
                });
                self.show_app_update_dialog = true;
            }
        }

        // Check for app update completion
        if let Some(version) =
            ctx.memory(|mem| mem.data.get_temp::<String>("app_update_done".into()))
        {
            self.update_in_progress = false;
            self.app_update_success = Some(version.clone());
            ctx.memory_mut(|mem| mem.data.remove::<String>("app_update_done".into()));
        }

        // Check for app update error
        if let Some(err) = ctx.memory(|mem| mem.data.get_temp::<String>("app_update_error".into()))
        {
            self.update_in_progress = false;
            self.app_update_error = Some(err);
            ctx.memory_mut(|mem| mem.data.remove::<String>("app_update_error".into()));
        }
    }

    fn render_update_dialogs(&mut self, ctx: &egui::Context) {
        if !self.show_app_update_dialog {
            return;
        }
        let Some(version) = self.app_update_available.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("app_update_modal"))
            .area(
                egui::Modal::default_area(egui::Id::new("app_update_modal"))
                    .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0),
            )
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            if let Some(new_ver) = self.app_update_success.clone() {
                self.update_success_contents(ui, &new_ver);
            } else {
                self.update_offer_contents(ui, ctx, &version);
            }
        });
        if modal_response.should_close() && !self.update_in_progress {
            self.show_app_update_dialog = false;
            self.app_update_error = None;
        }
    }

    /// Dialog body once the new binary has been swapped in
    fn update_success_contents(&mut self, ui: &mut egui::Ui, new_ver: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                    .size(36.0)
                    .color(theme::ACCENT),
            );
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new(format!("Updated to v{}!", new_ver))
                    .size(theme::FONT_HEADING)
                    .strong(),
            );
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new("Please restart the application to use the new version.")
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(theme::SPACING_XL);
            if ui
                .add(theme::button_accent(format!(
                    "{}  OK",
                    egui_phosphor::regular::CHECK
                )))
                .clicked()
            {
                self.show_app_update_dialog = false;
                self.app_update_success = None;
                self.app_update_available = None;
                self.app_update_body = None;
            }
        });
    }

    /// Dialog body offering the download, with notes and inline errors
    fn update_offer_contents(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, version: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new(format!("v{}", version))
                    .size(22.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.label(
                egui::RichText::new(format!("Current: v{}", APP_VERSION))
                    .size(theme::FONT_SECTION)
                    .color(theme::TEXT_DIM),
            );
        });

        if let Some(notes) = self.app_update_body.clone().filter(|n| !n.is_empty()) {
            ui.add_space(theme::SPACING_LG);
            ui.separator();
            ui.add_space(theme::SPACING_MD);
            egui::ScrollArea::vertical()
                .max_height(220.0)
                .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                .show(ui, |ui| release_notes(ui, &notes));
        }

        if let Some(err) = self.app_update_error.clone() {
            ui.add_space(theme::SPACING_MD);
            theme::error_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!(
                            "{}  {}",
                            egui_phosphor::regular::WARNING,
                            err
                        ))
                        .color(theme::ERROR_BOX_TEXT),
                    )
                    .wrap(),
                );
            });
        }

        ui.add_space(theme::SPACING_XL);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if self.update_in_progress {
                ui.spinner();
                ui.label("Downloading update...");
                return;
            }
            let label = if self.app_update_error.is_some() {
                "Retry"
            } else {
                "Update"
            };
            if ui
                .add(theme::button_accent(format!(
                    "{}  {}",
                    egui_phosphor::regular::DOWNLOAD_SIMPLE,
                    label
                )))
                .clicked()
            {
                self.perform_app_update(ctx);
                self.app_update_error = None;
            }
            ui.add_space(theme::SPACING_MD);
            if ui
                .add(theme::button(format!("{}  Skip", egui_phosphor::regular::X)))
                .clicked()
            {
                self.show_app_update_dialog = false;
                self.app_update_error = None;
            }
        });
    }
}

/// Markdown-lite renderer for GitHub release bodies
fn release_notes(ui: &mut egui::Ui, notes: &str) {
    for line in notes.lines() {
        if let Some(heading) = line.strip_prefix("## ").or_else(|| line.strip_prefix("# ")) {
            ui.add_space(theme::SPACING_SM);
            ui.label(egui::RichText::new(heading).strong().size(theme::FONT_BODY));
        } else if let Some(item) = line.strip_prefix("- ") {
            ui.label(format!("  \u{2022}  {}", item));
        } else if line.is_empty() {
            ui.add_space(theme::SPACING_XS);
        } else {
            ui.label(line);
        }
    }
}
