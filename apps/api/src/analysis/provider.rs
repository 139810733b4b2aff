//! Analysis provider: the seam between orchestration and the model call.
//!
//! Handlers and tests depend on the trait, never on the network. `AppState`
//! carries it as `Arc<dyn AnalysisProvider>`, so tests inject a stub that
//! returns fixed markdown.

use async_trait::async_trait;

use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Produces the raw markdown analysis for a resume/job pair.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn generate_analysis(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> Result<String, AppError>;
}

/// Default provider: one Gemini call with the analysis prompt.
pub struct GeminiAnalysisProvider {
    llm: LlmClient,
}

impl GeminiAnalysisProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AnalysisProvider for GeminiAnalysisProvider {
    async fn generate_analysis(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> Result<String, AppError> {
        let prompt = build_analysis_prompt(resume_text, job_text);
        self.llm
            .call_text(&prompt, ANALYSIS_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("analysis generation failed: {e}")))
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Stub provider returning a fixed markdown response.
    pub struct FixedResponseProvider(pub String);

    #[async_trait]
    impl AnalysisProvider for FixedResponseProvider {
        async fn generate_analysis(
            &self,
            _resume_text: &str,
            _job_text: &str,
        ) -> Result<String, AppError> {
            Ok(self.0.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FixedResponseProvider;
    use super::*;
    use crate::analysis::result_parser::parse_analysis_markdown;

    #[tokio::test]
    async fn stub_provider_feeds_the_parser_deterministically() {
        let provider = FixedResponseProvider(
            "**Score: 73/100**\n**Match Summary:**\nworkable\n**Suggestions:**\n- quantify impact"
                .to_string(),
        );
        let markdown = provider.generate_analysis("resume", "job").await.unwrap();
        let report = parse_analysis_markdown(&markdown);
        assert_eq!(report.score, Some(73));
        assert_eq!(report.summary, "workable");
        assert_eq!(report.suggestions, "- quantify impact");
        assert_eq!(report.top_requirements, "");
    }
}
