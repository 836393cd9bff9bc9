//! Per-type damage relation data fetched on demand from the catalog.

use super::name::{PokemonName, TypeName};

/// Damage relations and member roster for a single Pokémon type.
///
/// Ephemeral: fetched per request and discarded once a matchup result has
/// been computed from it.
#[derive(Debug, Clone, Default)]
pub struct TypeDamageRelation {
    /// Types this type deals double damage to.
    pub strong_against: Vec<TypeName>,
    /// Types this type takes double damage from.
    pub weak_against: Vec<TypeName>,
    /// Pokémon belonging to this type, in catalog order.
    pub roster: Vec<PokemonName>,
}
