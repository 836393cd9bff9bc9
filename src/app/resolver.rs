//! Matchup resolution orchestrator.
//!
//! Per request: cache check, LLM attempt, computed fallback, hard failure.
//! Each tier makes exactly one attempt; the "retry" behavior of the system
//! is the tier-to-tier fallthrough, never repetition within a tier.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::app::cache::MatchupCache;
use crate::app::fallback::FallbackComputer;
use crate::app::generator::MatchupGenerator;
use crate::domain::{Matchup, PokemonName, TypeName};
use crate::error::{Error, Result};
use crate::port::Catalog;

/// Guidance returned on the degraded placeholder when the computed
/// fallback tier is disabled.
const CREDENTIAL_GUIDANCE: &str = "Matchup suggestions could not be generated by the model. \
     Check the GEMINI_API_KEY value in your environment and restart the server.";

/// Resolves matchups for a subject through the tiered strategy chain.
///
/// Results are cached only after a tier fully completes, so a request
/// cancelled mid-flight (the caller dropping the future at any await
/// point) never leaves a partial entry behind. Hard failures are never
/// cached either.
pub struct MatchupResolver {
    catalog: Arc<dyn Catalog>,
    generator: MatchupGenerator,
    fallback: FallbackComputer,
    cache: Arc<MatchupCache>,
    fallback_enabled: bool,
}

impl MatchupResolver {
    /// Create a resolver over the given collaborators.
    ///
    /// `fallback_enabled` selects between the computed type-relation tier
    /// (the default) and the degraded placeholder-with-guidance behavior.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn Catalog>,
        generator: MatchupGenerator,
        cache: Arc<MatchupCache>,
        fallback_enabled: bool,
    ) -> Self {
        let fallback = FallbackComputer::new(Arc::clone(&catalog));
        Self {
            catalog,
            generator,
            fallback,
            cache,
            fallback_enabled,
        }
    }

    /// Resolve matchups for a raw subject name.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] when the name is empty after trimming.
    /// - [`Error::Exhausted`] when both the LLM tier and the computed
    ///   fallback tier failed.
    pub async fn resolve(&self, raw_name: &str) -> Result<Matchup> {
        let subject = PokemonName::parse(raw_name)?;

        if let Some(hit) = self.cache.get(&subject) {
            debug!(subject = %subject, "matchup cache hit");
            return Ok(hit);
        }

        // Type lookup failure is non-fatal: the model can still be asked
        // type-blind.
        let mut types: Option<Vec<TypeName>> = match self.catalog.pokemon_types(&subject).await {
            Ok(types) => Some(types),
            Err(e) => {
                warn!(subject = %subject, error = %e, "type lookup failed, continuing without types");
                None
            }
        };

        let llm_error = match self
            .generator
            .generate(&subject, types.as_deref().unwrap_or_default())
            .await
        {
            Ok(matchup) => {
                info!(subject = %subject, source = "llm", "matchups resolved");
                self.cache.put(subject, matchup.clone());
                return Ok(matchup);
            }
            Err(e) => e,
        };
        debug!(subject = %subject, error = %llm_error, "llm tier failed");

        if !self.fallback_enabled {
            let placeholder = Matchup::placeholder(CREDENTIAL_GUIDANCE);
            info!(subject = %subject, "llm tier failed and fallback disabled, caching placeholder");
            self.cache.put(subject, placeholder.clone());
            return Ok(placeholder);
        }

        // Re-attempt the type lookup if the earlier one failed; without
        // types the computed tier has nothing to work from.
        let types = match types.take() {
            Some(types) => types,
            None => match self.catalog.pokemon_types(&subject).await {
                Ok(types) => types,
                Err(e) => {
                    return Err(Error::Exhausted {
                        llm: Box::new(llm_error),
                        fallback: Box::new(e),
                    })
                }
            },
        };

        match self.fallback.compute(&subject, &types).await {
            Ok(matchup) => {
                info!(subject = %subject, source = "fallback", "matchups resolved");
                self.cache.put(subject, matchup.clone());
                Ok(matchup)
            }
            Err(e) => Err(Error::Exhausted {
                llm: Box::new(llm_error),
                fallback: Box::new(e),
            }),
        }
    }
}
