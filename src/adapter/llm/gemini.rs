//! Google Gemini LLM client.
//!
//! Implements the [`Llm`] trait against the `generateContent` endpoint.
//! The response text is the concatenation of the first candidate's content
//! parts; empty or missing candidates yield an empty string, which the
//! matchup extractor then rejects.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{LlmError, Result};
use crate::port::Llm;

/// Generation API base; the model name and action complete the path.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication, sent as a query parameter.
    api_key: String,
    /// Model identifier (e.g. "gemini-1.5-flash").
    model: String,
    /// Sampling temperature (0.0 to 2.0).
    temperature: f64,
    /// Maximum tokens to generate in the response.
    max_output_tokens: u32,
}

impl Gemini {
    /// Create a new Gemini client with explicit configuration.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f64,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
            max_output_tokens,
        }
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.model)
    }
}

#[derive(Serialize)]
struct Request {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl Response {
    /// Concatenated text fragments of the first candidate.
    fn first_candidate_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl Llm for Gemini {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = Request {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::CallFailed {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.json::<Response>().await?;
        Ok(body.first_candidate_text())
    }
}
