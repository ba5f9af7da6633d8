/// LLM client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: no other module may call the generative API directly.
/// All enhancement traffic goes through `GeminiClient`.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::recipe::Recipe;

pub mod prompts;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-09-2025:generateContent";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Schema-constrained enhancement output.
#[derive(Debug, Deserialize)]
struct EnhancedInstructions {
    enhanced_instructions: Vec<String>,
}

/// Client for the Gemini generateContent endpoint with retry logic and a
/// schema-constrained JSON response.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(25))
                .build()
                .expect("failed to build HTTP client"),
            api_key,
            api_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Returns the recipe with instructions rewritten by the LLM. Title,
    /// ingredient lines, and thumbnail are always preserved from source; on
    /// terminal failure the original instructions are kept — enhancement
    /// never propagates an error.
    pub async fn enhance_recipe(&self, recipe: &Recipe) -> Recipe {
        let query = prompts::enhancement_query(recipe);
        match self.call_enhancement(&query).await {
            Ok(steps) if !steps.is_empty() => Recipe {
                instructions: steps,
                ..recipe.clone()
            },
            Ok(_) => {
                warn!(
                    "enhancement returned no steps for '{}', keeping original instructions",
                    recipe.title
                );
                recipe.clone()
            }
            Err(e) => {
                warn!(
                    "enhancement failed for '{}', keeping original instructions: {e}",
                    recipe.title
                );
                recipe.clone()
            }
        }
    }

    /// One enhancement call with the retry loop. Every failure mode
    /// (transport, status, malformed JSON) is retried until the attempt
    /// budget runs out; backoff is 1s, 2s.
    async fn call_enhancement(&self, query: &str) -> Result<Vec<String>, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: query }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: prompts::response_schema(),
            },
            system_instruction: Content {
                parts: vec![Part {
                    text: prompts::ENHANCE_SYSTEM,
                }],
            },
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_secs(1u64 << (attempt - 1));
                warn!(
                    "LLM call attempt {attempt} failed, retrying after {}s",
                    delay.as_secs()
                );
                tokio::time::sleep(delay).await;
            }

            match self.try_call(&request_body).await {
                Ok(steps) => {
                    debug!("LLM enhancement succeeded with {} steps", steps.len());
                    return Ok(steps);
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or(LlmError::EmptyContent))
    }

    async fn try_call(&self, request_body: &GenerateRequest<'_>) -> Result<Vec<String>, LlmError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: GenerateResponse = response.json().await?;
        let text = first_text(&body).ok_or(LlmError::EmptyContent)?;
        let parsed: EnhancedInstructions = serde_json::from_str(text)?;
        Ok(parsed.enhanced_instructions)
    }
}

/// The first text part of the first candidate, if any.
fn first_text(response: &GenerateResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .parts
        .iter()
        .find_map(|p| p.text.as_deref())
}
