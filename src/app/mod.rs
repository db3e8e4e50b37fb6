//! App module - contains the main application state and logic

pub(crate) mod api;
mod export;
pub(crate) mod forms;
mod history;
pub mod session;
pub(crate) mod toasts;
mod updates;

use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use api::ApiClient;
use eframe::egui;
use forms::{AnalyzeForm, FormField, GenerateForm, ImproveForm};
use session::{SessionState, Tab};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use toasts::ToastQueue;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Backend access
    pub(crate) api: ApiClient,
    pub(crate) events: Receiver<ApiEvent>,
    pub(crate) runtime: tokio::runtime::Runtime,

    // Dropdown options, fetched once at startup
    pub(crate) ai_tools: Vec<(String, String)>,
    pub(crate) output_styles: Vec<(String, String)>,
    pub(crate) categories: Vec<(String, String)>,
    pub(crate) options_pending: u8,
    pub(crate) options_failed: bool,
    pub(crate) bootstrapped: bool,

    // Forms
    pub(crate) generate_form: GenerateForm,
    pub(crate) improve_form: ImproveForm,
    pub(crate) analyze_form: AnalyzeForm,
    pub(crate) focus_field: Option<(Tab, FormField)>,

    // Session / view state
    pub(crate) session: SessionState,
    pub(crate) history: Vec<PromptSummary>,
    pub(crate) history_loading: bool,
    pub(crate) history_error: Option<String>,

    // Feedback
    pub(crate) toasts: ToastQueue,
    pub(crate) pending_requests: usize,
    pub(crate) central_panel_rect: Option<egui::Rect>,

    // Export
    pub(crate) export_dir: Option<PathBuf>,
    pub(crate) export_dir_str: String,

    // Settings
    pub(crate) server_url: String,
    pub(crate) show_settings: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) logo_texture: Option<egui::TextureHandle>,

    // Auto-update state
    pub(crate) update_check_done: bool,
    pub(crate) app_update_available: Option<String>,
    pub(crate) app_update_body: Option<String>,
    pub(crate) show_app_update_dialog: bool,
    pub(crate) update_in_progress: bool,
    pub(crate) app_update_error: Option<String>,
    pub(crate) app_update_success: Option<String>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let server_url = settings.server_url_or_default();
        let export_dir = settings.export_dir();
        let export_dir_str = export_dir
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        let (tx, events) = mpsc::channel();

        Self {
            api: ApiClient::new(server_url.clone(), tx),
            events,
            runtime: tokio::runtime::Runtime::new().expect("failed to start tokio runtime"),
            ai_tools: Vec::new(),
            output_styles: Vec::new(),
            categories: Vec::new(),
            options_pending: 0,
            options_failed: false,
            bootstrapped: false,
            generate_form: GenerateForm::default(),
            improve_form: ImproveForm::default(),
            analyze_form: AnalyzeForm::default(),
            focus_field: None,
            session: SessionState::new(),
            history: Vec::new(),
            history_loading: false,
            history_error: None,
            toasts: ToastQueue::default(),
            pending_requests: 0,
            central_panel_rect: None,
            export_dir,
            export_dir_str,
            server_url,
            show_settings: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            logo_texture: None,
            update_check_done: false,
            app_update_available: None,
            app_update_body: None,
            show_app_update_dialog: false,
            update_in_progress: false,
            app_update_error: None,
            app_update_success: None,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            server_url: Some(self.server_url.clone()),
            export_path: self
                .export_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        };
        settings.save(&self.data_dir);
    }

    /// Startup fetches: one request per dropdown dimension.
    pub(crate) fn bootstrap(&mut self, ctx: &egui::Context) {
        self.options_pending = 3;
        for dim in [OptionDim::AiTools, OptionDim::OutputStyles, OptionDim::Categories] {
            self.api.fetch_options(&self.runtime, ctx, dim);
        }
    }

    /// Tab switch through the controller; a switch into History kicks off
    /// the queued fetch right away.
    pub(crate) fn switch_tab(&mut self, ctx: &egui::Context, tab: Tab) {
        self.session.switch_tab(tab);
        if self.session.take_history_fetch() {
            self.request_history(ctx);
        }
    }

    pub(crate) fn submit_active_form(&mut self, ctx: &egui::Context) {
        match self.session.current_tab() {
            Tab::Generate => self.submit_generate(ctx),
            Tab::Improve => self.submit_improve(ctx),
            Tab::Analyze => self.submit_analyze(ctx),
            Tab::History => {}
        }
    }

    pub(crate) fn submit_generate(&mut self, ctx: &egui::Context) {
        match self.generate_form.validate() {
            Ok(req) => {
                self.pending_requests += 1;
                self.api.generate(&self.runtime, ctx, req);
            }
            Err(field) => {
                self.toasts.error(field.message());
                self.focus_field = Some((Tab::Generate, field));
            }
        }
    }

    pub(crate) fn submit_improve(&mut self, ctx: &egui::Context) {
        match self.improve_form.validate() {
            Ok(req) => {
                self.pending_requests += 1;
                self.api.improve(&self.runtime, ctx, req);
            }
            Err(field) => {
                self.toasts.error(field.message());
                self.focus_field = Some((Tab::Improve, field));
            }
        }
    }

    pub(crate) fn submit_analyze(&mut self, ctx: &egui::Context) {
        match self.analyze_form.validate() {
            Ok(req) => {
                self.pending_requests += 1;
                self.api.analyze(&self.runtime, ctx, req);
            }
            Err(field) => {
                self.toasts.error(field.message());
                self.focus_field = Some((Tab::Analyze, field));
            }
        }
    }

    /// Drains settled API requests. Runs every frame on the UI thread;
    /// this is the only place session state reacts to the network.
    pub(crate) fn drain_api_events(&mut self, _ctx: &egui::Context) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                ApiEvent::Options(dim, result) => {
                    self.options_pending = self.options_pending.saturating_sub(1);
                    match result {
                        Ok(options) => match dim {
                            OptionDim::AiTools => self.ai_tools = options,
                            OptionDim::OutputStyles => self.output_styles = options,
                            OptionDim::Categories => self.categories = options,
                        },
                        Err(_) => self.options_failed = true,
                    }
                    if self.options_pending == 0 {
                        if self.options_failed {
                            self.toasts.error(
                                "Failed to load application data. Check the server URL in Settings.",
                            );
                        } else {
                            info!(
                                ai_tools = self.ai_tools.len(),
                                output_styles = self.output_styles.len(),
                                categories = self.categories.len(),
                                "Dropdown options loaded"
                            );
                            self.toasts.success("Application loaded successfully!");
                        }
                    }
                }
                ApiEvent::Generated(result) => {
                    self.pending_requests = self.pending_requests.saturating_sub(1);
                    match result {
                        Ok(prompt) => {
                            info!(id = prompt.id, score = prompt.score, "Prompt generated");
                            self.session.show_generated(&prompt);
                            self.toasts.success("Prompt generated successfully!");
                        }
                        Err(e) => self.toasts.error(e),
                    }
                }
                ApiEvent::Improved(result) => {
                    self.pending_requests = self.pending_requests.saturating_sub(1);
                    match result {
                        Ok(prompt) => {
                            info!(id = prompt.id, score = prompt.score, "Prompt improved");
                            self.session.show_generated(&prompt);
                            self.toasts.success("Prompt improved successfully!");
                        }
                        Err(e) => self.toasts.error(e),
                    }
                }
                ApiEvent::Analyzed(result) => {
                    self.pending_requests = self.pending_requests.saturating_sub(1);
                    match result {
                        Ok(report) => {
                            info!(score = report.score, "Prompt analyzed");
                            let analyzed_text = self.analyze_form.prompt.trim().to_string();
                            self.session.show_analysis(analyzed_text, &report);
                            self.toasts.success("Prompt analyzed successfully!");
                        }
                        Err(e) => self.toasts.error(e),
                    }
                }
                ApiEvent::Exported(format, id, result) => match result {
                    Ok(payload) => self.finish_export(format, id, payload),
                    Err(e) => self.toasts.error(e),
                },
                ApiEvent::History(result) => {
                    self.history_loading = false;
                    match result {
                        Ok(prompts) => {
                            info!(count = prompts.len(), "History loaded");
                            self.history = prompts;
                        }
                        Err(e) => self.history_error = Some(e),
                    }
                }
                ApiEvent::HistoryItem(result) => match result {
                    Ok(prompt) => {
                        self.session.show_history_item(&prompt);
                        self.toasts.success("Historical prompt loaded!");
                    }
                    Err(e) => self.toasts.error(e),
                },
            }
        }
    }
}
