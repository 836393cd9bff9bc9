//! Computed matchup fallback tier.
//!
//! Aggregates damage-relation data across the subject's types and samples
//! example Pokémon per resulting type set. Unlike the LLM tier, a sparse or
//! even empty result is a valid answer here.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::warn;

use crate::domain::{
    Matchup, MatchupSource, PokemonName, TypeDamageRelation, TypeName, MAX_MATCHUP_NAMES,
};
use crate::error::Result;
use crate::port::Catalog;

/// Derives matchups from type damage relations when the LLM tier fails.
pub struct FallbackComputer {
    catalog: Arc<dyn Catalog>,
}

impl FallbackComputer {
    /// Create a computer over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Compute a matchup for `subject` from its type list.
    ///
    /// Relation lookups for the subject's types run concurrently. A type
    /// whose lookup fails contributes no relations; only when every lookup
    /// fails does the error propagate, so a fully unreachable upstream
    /// still surfaces as a tier failure.
    ///
    /// # Errors
    ///
    /// Propagates the last [`crate::error::UpstreamError`] when no relation
    /// lookup succeeded for a non-empty type list.
    pub async fn compute(&self, subject: &PokemonName, types: &[TypeName]) -> Result<Matchup> {
        if types.is_empty() {
            return Ok(empty_result());
        }

        let lookups = types.iter().map(|t| self.catalog.type_relations(t));
        let mut relations: Vec<TypeDamageRelation> = Vec::with_capacity(types.len());
        let mut last_error = None;

        for (type_name, outcome) in types.iter().zip(join_all(lookups).await) {
            match outcome {
                Ok(relation) => relations.push(relation),
                Err(e) => {
                    warn!(type_name = %type_name, error = %e, "type relation lookup failed");
                    last_error = Some(e);
                }
            }
        }

        if relations.is_empty() {
            return match last_error {
                Some(e) => Err(e),
                None => Ok(empty_result()),
            };
        }

        let win_types = ordered_union(&relations, |r| &r.strong_against);
        let loss_types = ordered_union(&relations, |r| &r.weak_against);

        let wins = self.sample_roster(&win_types, subject).await;
        let losses = self.sample_roster(&loss_types, subject).await;

        Ok(Matchup {
            wins,
            losses,
            source: Some(MatchupSource::Fallback),
            message: None,
        })
    }

    /// Collect up to [`MAX_MATCHUP_NAMES`] unique member names across the
    /// candidate types.
    ///
    /// Candidate types are visited in order, each roster in catalog order;
    /// first seen wins, the subject is skipped, and iteration stops at the
    /// cap so no roster is fetched past it. A candidate type whose lookup
    /// fails is skipped.
    async fn sample_roster(&self, candidates: &[TypeName], subject: &PokemonName) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();

        for type_name in candidates {
            if names.len() >= MAX_MATCHUP_NAMES {
                break;
            }

            let relation = match self.catalog.type_relations(type_name).await {
                Ok(relation) => relation,
                Err(e) => {
                    warn!(type_name = %type_name, error = %e, "roster lookup failed, skipping type");
                    continue;
                }
            };

            for member in relation.roster {
                if member == *subject {
                    continue;
                }
                let name = member.as_str().to_string();
                if names.contains(&name) {
                    continue;
                }
                names.push(name);
                if names.len() >= MAX_MATCHUP_NAMES {
                    break;
                }
            }
        }

        names
    }
}

fn empty_result() -> Matchup {
    Matchup {
        wins: Vec::new(),
        losses: Vec::new(),
        source: Some(MatchupSource::Fallback),
        message: None,
    }
}

/// Union of per-relation type sets, first occurrence first.
fn ordered_union<F>(relations: &[TypeDamageRelation], pick: F) -> Vec<TypeName>
where
    F: Fn(&TypeDamageRelation) -> &Vec<TypeName>,
{
    let mut union: Vec<TypeName> = Vec::new();
    for relation in relations {
        for type_name in pick(relation) {
            if !union.contains(type_name) {
                union.push(type_name.clone());
            }
        }
    }
    union
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation(strong: &[&str], weak: &[&str]) -> TypeDamageRelation {
        TypeDamageRelation {
            strong_against: strong.iter().map(|s| TypeName::new(s)).collect(),
            weak_against: weak.iter().map(|s| TypeName::new(s)).collect(),
            roster: Vec::new(),
        }
    }

    #[test]
    fn ordered_union_dedups_across_relations() {
        let relations = vec![
            relation(&["water", "flying"], &["ground"]),
            relation(&["flying", "grass"], &["ground", "ice"]),
        ];

        let strong = ordered_union(&relations, |r| &r.strong_against);
        assert_eq!(
            strong,
            vec![
                TypeName::new("water"),
                TypeName::new("flying"),
                TypeName::new("grass")
            ]
        );

        let weak = ordered_union(&relations, |r| &r.weak_against);
        assert_eq!(weak, vec![TypeName::new("ground"), TypeName::new("ice")]);
    }

    #[test]
    fn ordered_union_of_nothing_is_empty() {
        assert!(ordered_union(&[], |r: &TypeDamageRelation| &r.strong_against).is_empty());
    }
}
