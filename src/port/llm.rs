//! LLM completion port.

use async_trait::async_trait;

use crate::error::Result;

/// Client for large language model text completion.
///
/// Implementations wrap a specific provider and handle authentication and
/// response decoding. Implementations must be `Send + Sync` so concurrent
/// matchup requests can share one client.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the endpoint responds with
    /// a non-success status.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
