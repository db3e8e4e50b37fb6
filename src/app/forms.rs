//! Form state and required-field validation

use crate::types::{AnalyzeRequest, GenerateRequest, ImproveRequest};

/// A form field that failed validation. Used for the toast message and
/// to steer focus to the offending widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    UserInput,
    ExistingPrompt,
    AnalyzePrompt,
    AiTool,
    OutputStyle,
    Category,
}

impl FormField {
    pub fn message(&self) -> &'static str {
        match self {
            FormField::UserInput => "Please describe what you want to create.",
            FormField::ExistingPrompt => "Please enter your existing prompt.",
            FormField::AnalyzePrompt => "Please enter a prompt to analyze.",
            FormField::AiTool => "Please select an AI tool.",
            FormField::OutputStyle => "Please select an output style.",
            FormField::Category => "Please select a category.",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct GenerateForm {
    pub user_input: String,
    pub ai_tool: String,
    pub output_style: String,
    pub category: String,
    pub seo_keywords: String,
}

impl GenerateForm {
    /// Required fields in fixed priority order; the first missing one wins.
    pub fn validate(&self) -> Result<GenerateRequest, FormField> {
        let user_input = self.user_input.trim();
        if user_input.is_empty() {
            return Err(FormField::UserInput);
        }
        if self.ai_tool.is_empty() {
            return Err(FormField::AiTool);
        }
        if self.output_style.is_empty() {
            return Err(FormField::OutputStyle);
        }
        if self.category.is_empty() {
            return Err(FormField::Category);
        }
        Ok(GenerateRequest {
            user_input: user_input.to_string(),
            ai_tool: self.ai_tool.clone(),
            output_style: self.output_style.clone(),
            category: self.category.clone(),
            seo_keywords: self.seo_keywords.trim().to_string(),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct ImproveForm {
    pub existing_prompt: String,
    pub ai_tool: String,
    pub output_style: String,
    pub category: String,
}

impl ImproveForm {
    pub fn validate(&self) -> Result<ImproveRequest, FormField> {
        let existing_prompt = self.existing_prompt.trim();
        if existing_prompt.is_empty() {
            return Err(FormField::ExistingPrompt);
        }
        if self.ai_tool.is_empty() {
            return Err(FormField::AiTool);
        }
        if self.output_style.is_empty() {
            return Err(FormField::OutputStyle);
        }
        if self.category.is_empty() {
            return Err(FormField::Category);
        }
        Ok(ImproveRequest {
            existing_prompt: existing_prompt.to_string(),
            ai_tool: self.ai_tool.clone(),
            output_style: self.output_style.clone(),
            category: self.category.clone(),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct AnalyzeForm {
    pub prompt: String,
    pub ai_tool: String,
    pub category: String,
}

impl AnalyzeForm {
    pub fn validate(&self) -> Result<AnalyzeRequest, FormField> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(FormField::AnalyzePrompt);
        }
        if self.ai_tool.is_empty() {
            return Err(FormField::AiTool);
        }
        if self.category.is_empty() {
            return Err(FormField::Category);
        }
        Ok(AnalyzeRequest {
            prompt: prompt.to_string(),
            ai_tool: self.ai_tool.clone(),
            category: self.category.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_generate() -> GenerateForm {
        GenerateForm {
            user_input: "write a blog post".into(),
            ai_tool: "chatgpt".into(),
            output_style: "formal".into(),
            category: "marketing".into(),
            seo_keywords: "".into(),
        }
    }

    #[test]
    fn generate_priority_order() {
        let mut form = GenerateForm::default();
        assert_eq!(form.validate(), Err(FormField::UserInput));

        form.user_input = "write a blog post".into();
        assert_eq!(form.validate(), Err(FormField::AiTool));

        form.ai_tool = "chatgpt".into();
        assert_eq!(form.validate(), Err(FormField::OutputStyle));

        form.output_style = "formal".into();
        assert_eq!(form.validate(), Err(FormField::Category));

        form.category = "marketing".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn generate_whitespace_input_is_missing() {
        let mut form = filled_generate();
        form.user_input = "   \n".into();
        assert_eq!(form.validate(), Err(FormField::UserInput));
    }

    #[test]
    fn generate_payload_is_trimmed_and_seo_optional() {
        let mut form = filled_generate();
        form.user_input = "  write a blog post  ".into();
        form.seo_keywords = " rust, egui ".into();
        let req = form.validate().unwrap();
        assert_eq!(req.user_input, "write a blog post");
        assert_eq!(req.seo_keywords, "rust, egui");

        form.seo_keywords.clear();
        assert!(form.validate().is_ok(), "seo keywords are optional");
    }

    #[test]
    fn improve_priority_order() {
        let mut form = ImproveForm::default();
        assert_eq!(form.validate(), Err(FormField::ExistingPrompt));

        form.existing_prompt = "old prompt".into();
        assert_eq!(form.validate(), Err(FormField::AiTool));

        form.ai_tool = "claude".into();
        assert_eq!(form.validate(), Err(FormField::OutputStyle));

        form.output_style = "casual".into();
        assert_eq!(form.validate(), Err(FormField::Category));

        form.category = "writing".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn analyze_priority_order_skips_output_style() {
        let mut form = AnalyzeForm::default();
        assert_eq!(form.validate(), Err(FormField::AnalyzePrompt));

        form.prompt = "rate this".into();
        assert_eq!(form.validate(), Err(FormField::AiTool));

        form.ai_tool = "gemini".into();
        assert_eq!(form.validate(), Err(FormField::Category));

        form.category = "seo".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn analyze_empty_prompt_blocks_submission() {
        let form = AnalyzeForm {
            prompt: "".into(),
            ai_tool: "chatgpt".into(),
            category: "seo".into(),
        };
        assert_eq!(form.validate(), Err(FormField::AnalyzePrompt));
    }
}
