//! Upstream Pokémon catalog port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{PokemonName, PokemonPage, PokemonRef, TypeDamageRelation, TypeName};
use crate::error::Result;

/// Read-only access to the upstream Pokémon catalog.
///
/// Each method makes exactly one attempt: no retries, no backoff. Callers
/// own the recovery policy (degrading, falling through, skipping).
#[async_trait]
pub trait Catalog: Send + Sync {
    /// A Pokémon's type names, in catalog (slot) order.
    async fn pokemon_types(&self, name: &PokemonName) -> Result<Vec<TypeName>>;

    /// A type's damage relations and member roster.
    async fn type_relations(&self, type_name: &TypeName) -> Result<TypeDamageRelation>;

    /// The raw catalog record for a Pokémon, passed through untouched.
    async fn pokemon_detail(&self, name: &PokemonName) -> Result<Value>;

    /// One page of the catalog listing.
    async fn pokemon_page(&self, limit: u32, offset: u32) -> Result<PokemonPage>;

    /// The first `max` entries of the name index, for substring search.
    async fn pokemon_index(&self, max: u32) -> Result<Vec<PokemonRef>>;

    /// Exact-name lookup. `Ok(None)` when the catalog has no such Pokémon;
    /// errors are reserved for transport and server failures.
    async fn find_pokemon(&self, name: &PokemonName) -> Result<Option<PokemonRef>>;
}
