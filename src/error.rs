use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures talking to the upstream Pokémon catalog.
///
/// Every catalog call makes exactly one attempt; recovery (degrading to an
/// empty type list, falling through to the next tier) is the caller's job.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{resource} returned HTTP {status}")]
    Status { resource: String, status: u16 },

    #[error("request for {resource} failed: {source}")]
    Transport {
        resource: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failures of the LLM matchup tier.
///
/// All variants are recoverable: the resolver treats each of them as a
/// fallthrough to the computed-fallback tier.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("no LLM credential configured (set GEMINI_API_KEY)")]
    MissingCredential,

    #[error("generation endpoint returned HTTP {status}")]
    CallFailed { status: u16 },

    #[error("response text contains no usable JSON object: {reason}")]
    MalformedOutput { reason: String },

    #[error("model produced no matchup names")]
    EmptyResult,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Both the LLM tier and the computed fallback tier failed.
    ///
    /// Keeps both causes so callers can tell a missing credential from an
    /// unreachable upstream. Never written to the cache.
    #[error("matchups unavailable: llm tier failed ({llm}); fallback tier failed ({fallback})")]
    Exhausted { llm: Box<Error>, fallback: Box<Error> },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
