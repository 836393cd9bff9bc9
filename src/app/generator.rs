//! LLM matchup generation tier.

use std::sync::Arc;

use tracing::debug;

use crate::app::extract::extract_matchup_json;
use crate::domain::{Matchup, MatchupSource, PokemonName, TypeName};
use crate::error::{LlmError, Result};
use crate::port::Llm;

/// Generates matchup suggestions by prompting a language model.
///
/// Holds `None` when no credential was configured at startup; asking it to
/// generate then fails before any network activity. Never writes the cache
/// (the resolver owns caching).
pub struct MatchupGenerator {
    llm: Option<Arc<dyn Llm>>,
}

impl MatchupGenerator {
    /// Create a generator over an optional LLM client.
    #[must_use]
    pub fn new(llm: Option<Arc<dyn Llm>>) -> Self {
        Self { llm }
    }

    /// Ask the model for a matchup suggestion.
    ///
    /// # Errors
    ///
    /// - [`LlmError::MissingCredential`] when no client is configured.
    /// - [`LlmError::CallFailed`] / transport errors from the endpoint.
    /// - [`LlmError::MalformedOutput`] when no JSON object can be extracted.
    /// - [`LlmError::EmptyResult`] when both lists come back empty; a
    ///   syntactically fine but worthless answer, left to the fallback tier.
    pub async fn generate(&self, subject: &PokemonName, types: &[TypeName]) -> Result<Matchup> {
        let Some(llm) = &self.llm else {
            return Err(LlmError::MissingCredential.into());
        };

        let prompt = build_prompt(subject, types);
        let text = llm.complete(&prompt).await?;
        debug!(provider = llm.name(), subject = %subject, "llm completion received");

        let mut matchup = extract_matchup_json(&text)?;
        matchup.exclude(subject);
        if matchup.is_empty() {
            return Err(LlmError::EmptyResult.into());
        }

        matchup.source = Some(MatchupSource::Llm);
        Ok(matchup)
    }
}

/// Deterministic prompt: same subject and types produce the same text.
fn build_prompt(subject: &PokemonName, types: &[TypeName]) -> String {
    let typed = if types.is_empty() {
        String::new()
    } else {
        format!(
            " (types: {})",
            types
                .iter()
                .map(TypeName::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    format!(
        r#"You are a Pokemon matchup assistant.
Given the Pokemon "{subject}"{typed}, produce two short lists:
- wins: 5 to 10 Pokemon it has the advantage against.
- losses: 5 to 10 Pokemon it is at a disadvantage against.

Rules:
- Reply with valid JSON only, no comments and no extra text.
- Format: {{"wins": ["name1", ...], "losses": ["name1", ...]}}.
- Use names exactly as the PokeAPI catalog spells them (lowercase, hyphenated).
- Avoid regional forms and megas when possible.
- Do not repeat names and do not include "{subject}" in either list.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::port::MockLlm;

    fn subject() -> PokemonName {
        PokemonName::new("pikachu")
    }

    fn electric() -> Vec<TypeName> {
        vec![TypeName::new("electric")]
    }

    #[test]
    fn prompt_is_deterministic_and_mentions_subject_and_types() {
        let a = build_prompt(&subject(), &electric());
        let b = build_prompt(&subject(), &electric());
        assert_eq!(a, b);
        assert!(a.contains(r#""pikachu""#));
        assert!(a.contains("types: electric"));
        assert!(a.contains("valid JSON only"));
    }

    #[test]
    fn prompt_omits_type_clause_when_types_unknown() {
        let prompt = build_prompt(&subject(), &[]);
        assert!(!prompt.contains("types:"));
    }

    #[tokio::test]
    async fn generate_without_credential_fails_before_any_call() {
        let generator = MatchupGenerator::new(None);
        let err = generator.generate(&subject(), &[]).await.unwrap_err();
        assert!(matches!(err, Error::Llm(LlmError::MissingCredential)));
    }

    #[tokio::test]
    async fn generate_parses_and_tags_model_output() {
        let llm = Arc::new(MockLlm::new(
            r#"Sure! {"wins": ["gyarados", "pidgeot"], "losses": ["golem"]}"#,
        ));
        let generator = MatchupGenerator::new(Some(llm));

        let matchup = generator.generate(&subject(), &electric()).await.unwrap();

        assert_eq!(matchup.wins, vec!["gyarados", "pidgeot"]);
        assert_eq!(matchup.losses, vec!["golem"]);
        assert_eq!(matchup.source, Some(MatchupSource::Llm));
    }

    #[tokio::test]
    async fn generate_drops_subject_from_model_output() {
        let llm = Arc::new(MockLlm::new(
            r#"{"wins": ["pikachu", "gyarados"], "losses": ["Pikachu", "golem"]}"#,
        ));
        let generator = MatchupGenerator::new(Some(llm));

        let matchup = generator.generate(&subject(), &electric()).await.unwrap();

        assert_eq!(matchup.wins, vec!["gyarados"]);
        assert_eq!(matchup.losses, vec!["golem"]);
    }

    #[tokio::test]
    async fn generate_treats_empty_lists_as_failure() {
        let llm = Arc::new(MockLlm::new(r#"{"wins": [], "losses": []}"#));
        let generator = MatchupGenerator::new(Some(llm));

        let err = generator.generate(&subject(), &[]).await.unwrap_err();
        assert!(matches!(err, Error::Llm(LlmError::EmptyResult)));
    }

    #[tokio::test]
    async fn generate_surfaces_malformed_output() {
        let llm = Arc::new(MockLlm::new("the model refuses to answer in JSON"));
        let generator = MatchupGenerator::new(Some(llm));

        let err = generator.generate(&subject(), &[]).await.unwrap_err();
        assert!(matches!(err, Error::Llm(LlmError::MalformedOutput { .. })));
    }
}
