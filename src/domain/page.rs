//! Catalog browsing page types.

use serde::{Deserialize, Serialize};

/// A named catalog entry with its canonical resource URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

/// One page of the Pokémon catalog, mirroring the upstream list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PokemonRef>,
}

impl PokemonPage {
    /// A page holding exactly one entry, used for exact-name search hits.
    #[must_use]
    pub fn single(entry: PokemonRef) -> Self {
        Self {
            count: 1,
            next: None,
            previous: None,
            results: vec![entry],
        }
    }
}
