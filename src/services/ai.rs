//! AI service — prompt in, generated text out.
//!
//! DESIGN
//! ======
//! Generation sits behind the `ContentGenerator` trait so routes never know
//! which backend is answering. The only backend shipped is `StubGenerator`,
//! which returns fixed or templated placeholder text and never fails. A real
//! provider plugs in by implementing the trait and handing it to `AppState`.
//!
//! The helpers below shape each UI request into a `Prompt`; they are what the
//! routes call.

use serde::Serialize;
use tracing::debug;

use crate::workspace::grid::Table;

// =============================================================================
// TYPES
// =============================================================================

/// Errors a generator backend may report.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The backend could not produce output.
    #[error("generation failed: {0}")]
    Backend(String),
}

/// Which UI feature a prompt came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// "Generate Insights" on the spreadsheet tab.
    DataInsights,
    /// "Generate Content" on the document tab.
    DocumentContent,
    /// "Create Slide with AI" on the presentation tab.
    SlideContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub kind: PromptKind,
    pub text: String,
}

/// Provider-neutral async trait for text generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Produce text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot generate output.
    async fn generate(&self, prompt: &Prompt) -> Result<String, AiError>;
}

// =============================================================================
// STUB BACKEND
// =============================================================================

pub const STUB_INSIGHTS: &str = "AI Insights:\n- Trend detected in column B\n- 15% increase from Q1 to Q2";

/// Placeholder backend returning canned text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubGenerator;

#[async_trait::async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate(&self, prompt: &Prompt) -> Result<String, AiError> {
        Ok(match prompt.kind {
            PromptKind::DataInsights => STUB_INSIGHTS.to_owned(),
            PromptKind::DocumentContent => format!("AI Generated Content based on: '{}'", prompt.text),
            PromptKind::SlideContent => {
                format!("## {}\n\n- Key point 1\n- Key point 2\n- Key point 3", prompt.text)
            }
        })
    }
}

// =============================================================================
// REQUEST HELPERS
// =============================================================================

/// Ask for insights about `table`, optionally steered by a user question.
///
/// # Errors
///
/// Propagates the backend's error.
pub async fn data_insights(generator: &dyn ContentGenerator, table: &Table, question: &str) -> Result<String, AiError> {
    let prompt = Prompt { kind: PromptKind::DataInsights, text: build_insights_prompt(table, question) };
    debug!(rows = table.row_count(), columns = table.columns().len(), "requesting data insights");
    generator.generate(&prompt).await
}

/// Generate text to append to the document.
///
/// # Errors
///
/// Propagates the backend's error.
pub async fn document_content(generator: &dyn ContentGenerator, prompt: &str) -> Result<String, AiError> {
    let prompt = Prompt { kind: PromptKind::DocumentContent, text: prompt.to_owned() };
    generator.generate(&prompt).await
}

/// Generate the body of a slide about `topic`.
///
/// # Errors
///
/// Propagates the backend's error.
pub async fn slide_content(generator: &dyn ContentGenerator, topic: &str) -> Result<String, AiError> {
    let prompt = Prompt { kind: PromptKind::SlideContent, text: topic.to_owned() };
    generator.generate(&prompt).await
}

fn build_insights_prompt(table: &Table, question: &str) -> String {
    let question = question.trim();
    let mut out = String::new();
    if question.is_empty() {
        out.push_str("Summarize notable trends in this table.\n\n");
    } else {
        out.push_str(question);
        out.push_str("\n\n");
    }
    out.push_str(&table.to_csv());
    out
}

#[cfg(test)]
#[path = "ai_test.rs"]
mod tests;
