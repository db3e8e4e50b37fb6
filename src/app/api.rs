//! Backend API client
//!
//! Every operation spawns a reqwest task on the app's runtime and settles by
//! sending exactly one [`ApiEvent`] over the channel, success or failure.
//! The update loop drains the channel; no request is retried or cancelled.

use crate::constants::{API_BASE_PATH, HISTORY_PAGE_SIZE};
use crate::types::*;
use eframe::egui;
use serde::de::DeserializeOwned;
use std::sync::mpsc::Sender;
use tokio::runtime::Runtime;
use tracing::{debug, warn};

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    tx: Sender<ApiEvent>,
}

impl ApiClient {
    pub fn new(server_url: impl Into<String>, tx: Sender<ApiEvent>) -> Self {
        Self {
            base_url: server_url.into(),
            http: reqwest::Client::new(),
            tx,
        }
    }

    pub fn set_server_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url.trim_end_matches('/'),
            API_BASE_PATH,
            path
        )
    }

    pub fn fetch_options(&self, runtime: &Runtime, ctx: &egui::Context, dim: OptionDim) {
        let url = self.endpoint(dim.endpoint());
        let http = self.http.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        debug!(url = %url, "Fetching dropdown options");
        runtime.spawn(async move {
            let result = fetch_json::<serde_json::Map<String, serde_json::Value>>(&http, &url)
                .await
                .map(|map| {
                    map.into_iter()
                        .map(|(key, label)| {
                            let label = label.as_str().unwrap_or(&key).to_string();
                            (key, label)
                        })
                        .collect()
                });
            if let Err(e) = &result {
                warn!(url = %url, error = %e, "Option fetch failed");
            }
            tx.send(ApiEvent::Options(dim, result)).ok();
            ctx.request_repaint();
        });
    }

    pub fn generate(&self, runtime: &Runtime, ctx: &egui::Context, req: GenerateRequest) {
        let url = self.endpoint("/generate");
        let builder = self.http.post(&url).json(&req);
        debug!(url = %url, ai_tool = %req.ai_tool, "Dispatching generate");
        spawn_request(runtime, ctx, self.tx.clone(), builder, |r| {
            ApiEvent::Generated(r.map(Box::new))
        });
    }

    pub fn improve(&self, runtime: &Runtime, ctx: &egui::Context, req: ImproveRequest) {
        let url = self.endpoint("/improve");
        let builder = self.http.post(&url).json(&req);
        debug!(url = %url, ai_tool = %req.ai_tool, "Dispatching improve");
        spawn_request(runtime, ctx, self.tx.clone(), builder, |r| {
            ApiEvent::Improved(r.map(Box::new))
        });
    }

    pub fn analyze(&self, runtime: &Runtime, ctx: &egui::Context, req: AnalyzeRequest) {
        let url = self.endpoint("/analyze");
        let builder = self.http.post(&url).json(&req);
        debug!(url = %url, ai_tool = %req.ai_tool, "Dispatching analyze");
        spawn_request(runtime, ctx, self.tx.clone(), builder, ApiEvent::Analyzed);
    }

    pub fn export(&self, runtime: &Runtime, ctx: &egui::Context, id: i64, format: ExportFormat) {
        let url = format!("{}/{}?format={}", self.endpoint("/export"), id, format.as_str());
        let http = self.http.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        debug!(url = %url, "Dispatching export");
        runtime.spawn(async move {
            let result = match format {
                ExportFormat::Txt => fetch_text(&http, &url).await.map(ExportPayload::Text),
                ExportFormat::Json => fetch_json::<PromptResult>(&http, &url)
                    .await
                    .map(|r| ExportPayload::Json(Box::new(r))),
            };
            if let Err(e) = &result {
                warn!(url = %url, error = %e, "Export fetch failed");
            }
            tx.send(ApiEvent::Exported(format, id, result)).ok();
            ctx.request_repaint();
        });
    }

    pub fn fetch_history(&self, runtime: &Runtime, ctx: &egui::Context) {
        let url = format!("{}?per_page={}", self.endpoint("/history"), HISTORY_PAGE_SIZE);
        let http = self.http.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        debug!(url = %url, "Fetching history");
        runtime.spawn(async move {
            let result = fetch_json::<HistoryPage>(&http, &url)
                .await
                .map(|page| page.prompts);
            if let Err(e) = &result {
                warn!(url = %url, error = %e, "History fetch failed");
            }
            tx.send(ApiEvent::History(result)).ok();
            ctx.request_repaint();
        });
    }

    /// Loads the full record of a history entry via the JSON export endpoint.
    pub fn fetch_history_item(&self, runtime: &Runtime, ctx: &egui::Context, id: i64) {
        let url = format!("{}/{}?format=json", self.endpoint("/export"), id);
        let http = self.http.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        debug!(url = %url, "Loading history item");
        runtime.spawn(async move {
            let result = fetch_json::<PromptResult>(&http, &url).await.map(Box::new);
            if let Err(e) = &result {
                warn!(url = %url, error = %e, "History item load failed");
            }
            tx.send(ApiEvent::HistoryItem(result)).ok();
            ctx.request_repaint();
        });
    }
}

fn spawn_request<T, F>(
    runtime: &Runtime,
    ctx: &egui::Context,
    tx: Sender<ApiEvent>,
    builder: reqwest::RequestBuilder,
    wrap: F,
) where
    T: DeserializeOwned + Send + 'static,
    F: FnOnce(Result<T, String>) -> ApiEvent + Send + 'static,
{
    let ctx = ctx.clone();
    runtime.spawn(async move {
        let result = execute::<T>(builder).await;
        if let Err(e) = &result {
            warn!(error = %e, "API request failed");
        }
        tx.send(wrap(result)).ok();
        ctx.request_repaint();
    });
}

async fn fetch_json<T: DeserializeOwned>(http: &reqwest::Client, url: &str) -> Result<T, String> {
    execute(http.get(url)).await
}

async fn fetch_text(http: &reqwest::Client, url: &str) -> Result<String, String> {
    let response = http.get(url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.text().await.map_err(|e| e.to_string())
}

/// Sends the request and unwraps the `{success, data, error}` envelope.
async fn execute<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> Result<T, String> {
    let response = builder.send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }
    let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| e.to_string())?;
    if envelope.success {
        envelope
            .data
            .ok_or_else(|| "Malformed response from server".to_string())
    } else {
        Err(envelope
            .error
            .unwrap_or_else(|| "Request failed".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn client(base: &str) -> ApiClient {
        let (tx, _rx) = mpsc::channel();
        ApiClient::new(base, tx)
    }

    #[test]
    fn endpoints_are_rooted_at_api_base() {
        let api = client("http://localhost:5000");
        assert_eq!(
            api.endpoint("/generate"),
            "http://localhost:5000/api/prompts/generate"
        );
        assert_eq!(
            api.endpoint(OptionDim::AiTools.endpoint()),
            "http://localhost:5000/api/prompts/ai-tools"
        );
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        let api = client("http://10.0.0.2:8080/");
        assert_eq!(
            api.endpoint("/history"),
            "http://10.0.0.2:8080/api/prompts/history"
        );
    }
}
