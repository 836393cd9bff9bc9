//! The matchup result entity.

use serde::{Deserialize, Serialize};

use super::name::PokemonName;

/// Maximum entries in each of the `wins` / `losses` lists.
pub const MAX_MATCHUP_NAMES: usize = 10;

/// Which resolver tier produced a matchup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchupSource {
    /// Generated by the language model.
    Llm,
    /// Computed from type damage relations.
    Fallback,
}

impl MatchupSource {
    /// Stable string form, used for the provenance response header.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Llm => "llm",
            Self::Fallback => "fallback",
        }
    }
}

/// Win/loss suggestions for a subject Pokémon.
///
/// Both lists hold at most [`MAX_MATCHUP_NAMES`] normalized, distinct names
/// and never contain the subject itself. `message` is only set on degraded
/// placeholder results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub wins: Vec<String>,
    pub losses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<MatchupSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Matchup {
    /// A result with no entries and no provenance.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            wins: Vec::new(),
            losses: Vec::new(),
            source: None,
            message: None,
        }
    }

    /// The degraded placeholder returned when the LLM tier fails and the
    /// computed fallback is disabled.
    #[must_use]
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self {
            wins: Vec::new(),
            losses: Vec::new(),
            source: Some(MatchupSource::Fallback),
            message: Some(message.into()),
        }
    }

    /// Whether both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty() && self.losses.is_empty()
    }

    /// Drop the subject's own name from both lists.
    pub fn exclude(&mut self, subject: &PokemonName) {
        self.wins.retain(|name| name != subject.as_str());
        self.losses.retain(|name| name != subject.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_drops_subject_from_both_lists() {
        let mut matchup = Matchup {
            wins: vec!["pikachu".into(), "gyarados".into()],
            losses: vec!["golem".into(), "pikachu".into()],
            source: None,
            message: None,
        };

        matchup.exclude(&PokemonName::new("Pikachu"));

        assert_eq!(matchup.wins, vec!["gyarados"]);
        assert_eq!(matchup.losses, vec!["golem"]);
    }

    #[test]
    fn empty_and_placeholder() {
        assert!(Matchup::empty().is_empty());

        let placeholder = Matchup::placeholder("configure the model credential");
        assert!(placeholder.is_empty());
        assert_eq!(placeholder.source, Some(MatchupSource::Fallback));
        assert!(placeholder.message.is_some());
    }

    #[test]
    fn source_is_serialized_lowercase_and_omitted_when_absent() {
        let mut matchup = Matchup::empty();
        let json = serde_json::to_value(&matchup).unwrap();
        assert!(json.get("source").is_none());
        assert!(json.get("message").is_none());

        matchup.source = Some(MatchupSource::Llm);
        let json = serde_json::to_value(&matchup).unwrap();
        assert_eq!(json["source"], "llm");
    }
}
