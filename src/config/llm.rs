//! LLM provider configuration.

use serde::Deserialize;

/// Environment variable holding the generation endpoint credential.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Generation endpoint configuration.
///
/// The credential is deliberately not a file setting; it is read from
/// [`GEMINI_API_KEY_ENV`] at load time. Its absence is not a startup
/// failure: the LLM tier reports it when asked to generate.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature. Kept low so repeated prompts for the same
    /// subject stay close to deterministic.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens in the response.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// API credential, from the environment only.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            api_key: None,
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".into()
}

fn default_temperature() -> f64 {
    0.2
}

const fn default_max_output_tokens() -> u32 {
    1024
}
