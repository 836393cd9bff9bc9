//! Catalog browsing: paged listing, search, detail passthrough.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::domain::{normalize, PokemonName, PokemonPage};
use crate::error::Result;
use crate::port::Catalog;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// How far into the name index substring search looks.
const SEARCH_INDEX_LIMIT: u32 = 2000;

/// Read-side service over the upstream catalog.
pub struct CatalogBrowser {
    catalog: Arc<dyn Catalog>,
}

impl CatalogBrowser {
    /// Create a browser over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Return one page of the catalog, optionally filtered by `query`.
    ///
    /// Without a query the upstream page is passed through, including its
    /// pagination links. With a query, an exact-name hit wins; otherwise
    /// the name index is scanned for substring matches and paged locally
    /// (no pagination links in that case).
    pub async fn page(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        query: Option<&str>,
    ) -> Result<PokemonPage> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
        let offset = offset.unwrap_or(0);

        let query = query.map(normalize).filter(|q| !q.is_empty());
        let Some(query) = query else {
            return self.catalog.pokemon_page(limit, offset).await;
        };

        if let Ok(name) = PokemonName::parse(&query) {
            match self.catalog.find_pokemon(&name).await {
                Ok(Some(found)) => return Ok(PokemonPage::single(found)),
                Ok(None) => {}
                // Exact lookup is an optimization; fall back to scanning.
                Err(e) => warn!(query = %query, error = %e, "exact lookup failed"),
            }
        }

        // TODO: memoize the name index; every substring miss re-reads up to
        // SEARCH_INDEX_LIMIT upstream entries.
        let index = self.catalog.pokemon_index(SEARCH_INDEX_LIMIT).await?;
        let matched: Vec<_> = index
            .into_iter()
            .filter(|entry| entry.name.contains(&query))
            .collect();

        let count = matched.len() as u32;
        let results = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok(PokemonPage {
            count,
            next: None,
            previous: None,
            results,
        })
    }

    /// The raw catalog record for one Pokémon, untouched.
    ///
    /// # Errors
    ///
    /// [`crate::error::Error::InvalidInput`] for blank names; upstream 404s
    /// propagate as [`crate::error::UpstreamError::Status`].
    pub async fn detail(&self, raw_name: &str) -> Result<Value> {
        let name = PokemonName::parse(raw_name)?;
        self.catalog.pokemon_detail(&name).await
    }
}
