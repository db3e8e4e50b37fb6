//! Common types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope wrapping every JSON response from the backend
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A generated or improved prompt as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResult {
    pub id: i64,
    pub generated_prompt: String,
    pub analysis: String,
    pub score: i64,
    #[serde(default)]
    pub original_input: String,
    #[serde(default)]
    pub ai_tool: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Analysis of an existing prompt. Carries no id - analyzed prompts are
/// not persisted by the backend in this flow.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisReport {
    pub analysis: String,
    pub score: i64,
}

/// Compact prompt entry in the history listing
#[derive(Debug, Clone, Deserialize)]
pub struct PromptSummary {
    pub id: i64,
    #[serde(default)]
    pub ai_tool: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub original_input: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryPage {
    pub prompts: Vec<PromptSummary>,
}

// ============================================================================
// REQUEST PAYLOADS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub user_input: String,
    pub ai_tool: String,
    pub output_style: String,
    pub category: String,
    pub seo_keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImproveRequest {
    pub existing_prompt: String,
    pub ai_tool: String,
    pub output_style: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub prompt: String,
    pub ai_tool: String,
    pub category: String,
}

// ============================================================================
// CLIENT-SIDE ENUMS & EVENTS
// ============================================================================

/// Dropdown dimension served by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDim {
    AiTools,
    OutputStyles,
    Categories,
}

impl OptionDim {
    pub fn endpoint(&self) -> &'static str {
        match self {
            OptionDim::AiTools => "/ai-tools",
            OptionDim::OutputStyles => "/output-styles",
            OptionDim::Categories => "/categories",
        }
    }
}

/// Export artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// Body of a settled export request
#[derive(Debug)]
pub enum ExportPayload {
    Text(String),
    Json(Box<PromptResult>),
}

/// One event per settled API request, drained on the UI thread.
/// Every spawned request sends exactly one of these, success or failure.
#[derive(Debug)]
pub enum ApiEvent {
    Options(OptionDim, Result<Vec<(String, String)>, String>),
    Generated(Result<Box<PromptResult>, String>),
    Improved(Result<Box<PromptResult>, String>),
    Analyzed(Result<AnalysisReport, String>),
    Exported(ExportFormat, i64, Result<ExportPayload, String>),
    History(Result<Vec<PromptSummary>, String>),
    HistoryItem(Result<Box<PromptResult>, String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_serializes_documented_keys() {
        let req = GenerateRequest {
            user_input: "write a blog post".into(),
            ai_tool: "chatgpt".into(),
            output_style: "formal".into(),
            category: "marketing".into(),
            seo_keywords: "".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            ["user_input", "ai_tool", "output_style", "category", "seo_keywords"]
        );
        assert_eq!(obj["user_input"], "write a blog post");
        assert_eq!(obj["ai_tool"], "chatgpt");
    }

    #[test]
    fn analyze_request_has_no_output_style() {
        let req = AnalyzeRequest {
            prompt: "p".into(),
            ai_tool: "claude".into(),
            category: "writing".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("output_style").is_none());
        assert_eq!(value["prompt"], "p");
    }

    #[test]
    fn envelope_success_carries_data() {
        let json = r#"{"success":true,"data":{"id":42,"generated_prompt":"act as","analysis":"solid","score":85}}"#;
        let env: ApiEnvelope<PromptResult> = serde_json::from_str(json).unwrap();
        assert!(env.success);
        let result = env.data.unwrap();
        assert_eq!(result.id, 42);
        assert_eq!(result.score, 85);
        assert!(result.original_input.is_empty());
    }

    #[test]
    fn envelope_failure_carries_message() {
        let json = r#"{"success":false,"error":"rate limited"}"#;
        let env: ApiEnvelope<PromptResult> = serde_json::from_str(json).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.error.as_deref(), Some("rate limited"));
    }

    #[test]
    fn history_page_parses_summaries() {
        let json = r#"{"prompts":[{"id":7,"ai_tool":"chatgpt","category":"seo","score":91,"original_input":"x"}]}"#;
        let page: HistoryPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.prompts.len(), 1);
        assert_eq!(page.prompts[0].id, 7);
        assert!(page.prompts[0].created_at.is_none());
    }
}
