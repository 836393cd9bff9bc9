//! Wire types for the upstream catalog responses.
//!
//! Only the fields the application reads are modeled; everything else in
//! the upstream payloads is ignored by serde. The one exception is the
//! Pokémon detail record, which is passed through as raw JSON.

use serde::Deserialize;

use crate::domain::{PokemonName, PokemonPage, PokemonRef, TypeDamageRelation, TypeName};

/// A `{ "name": ... }` reference nested in catalog payloads.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// The slice of a Pokémon record needed for type lookups.
#[derive(Debug, Deserialize)]
pub struct PokemonTypesDto {
    #[serde(default)]
    pub types: Vec<TypeSlotDto>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlotDto {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl PokemonTypesDto {
    /// Type names in catalog (slot) order.
    pub fn into_type_names(self) -> Vec<TypeName> {
        self.types
            .into_iter()
            .map(|slot| TypeName::new(slot.kind.name))
            .collect()
    }
}

/// The slice of a Pokémon record needed for exact-name search hits.
#[derive(Debug, Deserialize)]
pub struct PokemonSummaryDto {
    pub id: u32,
    pub name: String,
}

/// A type record: damage relations plus member roster.
#[derive(Debug, Deserialize)]
pub struct TypeDto {
    pub damage_relations: DamageRelationsDto,
    #[serde(default)]
    pub pokemon: Vec<TypeMemberDto>,
}

#[derive(Debug, Deserialize)]
pub struct DamageRelationsDto {
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub struct TypeMemberDto {
    pub pokemon: NamedResource,
}

impl From<TypeDto> for TypeDamageRelation {
    fn from(dto: TypeDto) -> Self {
        Self {
            strong_against: dto
                .damage_relations
                .double_damage_to
                .into_iter()
                .map(|r| TypeName::new(r.name))
                .collect(),
            weak_against: dto
                .damage_relations
                .double_damage_from
                .into_iter()
                .map(|r| TypeName::new(r.name))
                .collect(),
            roster: dto
                .pokemon
                .into_iter()
                .map(|m| PokemonName::new(m.pokemon.name))
                .collect(),
        }
    }
}

/// The catalog list envelope.
#[derive(Debug, Deserialize)]
pub struct PageDto {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<PageEntryDto>,
}

#[derive(Debug, Deserialize)]
pub struct PageEntryDto {
    pub name: String,
    pub url: String,
}

impl From<PageDto> for PokemonPage {
    fn from(dto: PageDto) -> Self {
        Self {
            count: dto.count,
            next: dto.next,
            previous: dto.previous,
            results: dto
                .results
                .into_iter()
                .map(|e| PokemonRef {
                    name: e.name,
                    url: e.url,
                })
                .collect(),
        }
    }
}
