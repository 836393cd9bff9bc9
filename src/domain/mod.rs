//! Catalog-agnostic domain types and normalization.

mod matchup;
mod name;
mod page;
mod relation;

pub use matchup::{Matchup, MatchupSource, MAX_MATCHUP_NAMES};
pub use name::{extract_name_set, is_string_sequence, normalize, PokemonName, TypeName};
pub use page::{PokemonPage, PokemonRef};
pub use relation::TypeDamageRelation;
