//! Single-word answers from a generative-text provider.
//!
//! [`AnswerResolver`] runs in one of two modes, fixed at construction:
//! - degraded (no provider configured): only questions in the known-answer
//!   table are answered, everything else fails with `ProviderNotConfigured`
//! - live: one `generateContent` call per question, bounded by the
//!   provider timeout (10 s unless configured), no retries
//!
//! In live mode the known-answer table is consulted again when the provider
//! text contains no word.

use bfhl_core::text::{first_word, known_answer};
use bfhl_core::CoreError;
use serde::Deserialize;
use serde_json::json;

use crate::config::{ProviderConfig, PROVIDER_TIMEOUT};
use crate::error::ApiError;

const ONE_WORD_PROMPT: &str = "Answer in exactly one word. Question: ";

#[derive(Debug, Clone)]
pub struct AnswerResolver {
    provider: Option<ProviderConfig>,
    client: reqwest::Client,
}

impl AnswerResolver {
    pub fn new(provider: Option<ProviderConfig>) -> Result<Self, ApiError> {
        let timeout = provider.as_ref().map_or(PROVIDER_TIMEOUT, |p| p.timeout);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Internal(format!("http client init failed: {}", err)))?;
        Ok(AnswerResolver { provider, client })
    }

    pub fn is_live(&self) -> bool {
        self.provider.is_some()
    }

    /// Answers `question` with a single word.
    pub async fn ask_single_word(&self, question: &str) -> Result<String, CoreError> {
        let Some(provider) = &self.provider else {
            return known_answer(question)
                .map(str::to_string)
                .ok_or(CoreError::ProviderNotConfigured);
        };

        let text = self.generate(provider, question).await?;
        let word = first_word(&text);
        if !word.is_empty() {
            return Ok(word.to_string());
        }

        if let Some(answer) = known_answer(question) {
            tracing::debug!("provider text had no word, using known answer");
            return Ok(answer.to_string());
        }
        Err(CoreError::EmptyAnswer)
    }

    async fn generate(&self, provider: &ProviderConfig, question: &str) -> Result<String, CoreError> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": format!("{}{}", ONE_WORD_PROMPT, question) }]
            }]
        });

        let response = self
            .client
            .post(provider.endpoint())
            .query(&[("key", provider.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                // without_url: the URL carries the API key.
                let reason = err.without_url().to_string();
                tracing::warn!("provider request failed: {}", reason);
                CoreError::ProviderUnreachable { reason }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "provider returned error status");
            return Err(CoreError::ProviderError {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|err| {
            let reason = err.without_url().to_string();
            tracing::warn!("provider response read failed: {}", reason);
            CoreError::ProviderUnreachable { reason }
        })?;

        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!("provider response parse failed: {}", err);
            CoreError::ResponseParseFailed {
                reason: err.to_string(),
            }
        })?;

        parsed.into_text().ok_or_else(|| {
            tracing::warn!("provider response missing candidates[0].content.parts[0].text");
            CoreError::ResponseParseFailed {
                reason: "missing candidate text".to_string(),
            }
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}
