//! Export and clipboard actions
//!
//! The file itself is assembled client-side from the already-fetched
//! content; the only network step is the export fetch.

use super::App;
use crate::types::{ExportFormat, ExportPayload};
use eframe::egui;
use tracing::{info, warn};

/// Filename for an exported prompt artifact
pub fn export_filename(id: i64, format: ExportFormat) -> String {
    format!("prompt_{}.{}", id, format.as_str())
}

/// Export requires a persisted prompt id. Analyze-only results never set
/// one, so they cannot be exported.
pub fn export_target(current_id: Option<i64>) -> Result<i64, &'static str> {
    current_id.ok_or("No prompt to export.")
}

/// Renders the artifact body for a settled export payload
pub fn render_artifact(payload: &ExportPayload) -> Result<String, String> {
    match payload {
        ExportPayload::Text(text) => Ok(text.clone()),
        ExportPayload::Json(result) => {
            serde_json::to_string_pretty(result.as_ref()).map_err(|e| e.to_string())
        }
    }
}

impl App {
    /// Kicks off an export fetch, or reports immediately when there is
    /// nothing to export. No request is issued in the error case.
    pub(crate) fn request_export(&mut self, ctx: &egui::Context, format: ExportFormat) {
        match export_target(self.session.current_prompt_id()) {
            Ok(id) => self.api.export(&self.runtime, ctx, id, format),
            Err(msg) => self.toasts.error(msg),
        }
    }

    /// Writes the fetched export content to disk. Uses the configured
    /// export directory, falling back to a save dialog.
    pub(crate) fn finish_export(&mut self, format: ExportFormat, id: i64, payload: ExportPayload) {
        let content = match render_artifact(&payload) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "Failed to render export artifact");
                self.toasts.error("Failed to export prompt.");
                return;
            }
        };

        let filename = export_filename(id, format);
        let dest = match &self.export_dir {
            Some(dir) => {
                if let Err(e) = std::fs::create_dir_all(dir) {
                    warn!(error = %e, path = %dir.display(), "Cannot create export directory");
                    self.toasts.error("Failed to export prompt.");
                    return;
                }
                dir.join(&filename)
            }
            None => match rfd::FileDialog::new()
                .set_file_name(filename.as_str())
                .save_file()
            {
                Some(path) => path,
                None => {
                    self.toasts.info("Export cancelled.");
                    return;
                }
            },
        };

        match std::fs::write(&dest, content) {
            Ok(()) => {
                info!(path = %dest.display(), "Prompt exported");
                self.toasts.success(format!(
                    "Prompt exported as {}!",
                    format.as_str().to_uppercase()
                ));
            }
            Err(e) => {
                warn!(error = %e, path = %dest.display(), "Export write failed");
                self.toasts.error("Failed to export prompt.");
            }
        }
    }

    /// Copies the displayed prompt text to the clipboard.
    pub(crate) fn copy_prompt(&mut self, ctx: &egui::Context) {
        match self.session.results() {
            Some(results) => {
                ctx.copy_text(results.prompt_text.clone());
                self.toasts.success("Prompt copied to clipboard!");
            }
            None => {
                self.toasts
                    .error("Failed to copy prompt. Please select and copy manually.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PromptResult;

    #[test]
    fn export_without_id_fails_fast() {
        assert_eq!(export_target(None), Err("No prompt to export."));
        assert_eq!(export_target(Some(42)), Ok(42));
    }

    #[test]
    fn filenames_carry_id_and_extension() {
        assert_eq!(export_filename(42, ExportFormat::Txt), "prompt_42.txt");
        assert_eq!(export_filename(7, ExportFormat::Json), "prompt_7.json");
    }

    #[test]
    fn artifact_text_passes_through() {
        let payload = ExportPayload::Text("Act as an expert".into());
        assert_eq!(render_artifact(&payload).unwrap(), "Act as an expert");
    }

    #[test]
    fn artifact_json_is_pretty_printed() {
        let payload = ExportPayload::Json(Box::new(PromptResult {
            id: 42,
            generated_prompt: "Act as an expert".into(),
            analysis: "good".into(),
            score: 85,
            original_input: "write".into(),
            ai_tool: "chatgpt".into(),
            category: "marketing".into(),
            created_at: None,
        }));
        let body = render_artifact(&payload).unwrap();
        assert!(body.contains("\n"), "expected pretty-printed JSON");
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["id"], 42);
        assert_eq!(parsed["score"], 85);
    }
}
