//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use matchdex::domain::{PokemonName, PokemonPage, PokemonRef, TypeDamageRelation, TypeName};
use matchdex::error::{LlmError, Result, UpstreamError};
use matchdex::port::{Catalog, Llm};

/// In-memory catalog built from fixture data.
///
/// Lookups for names or types not present in the fixtures behave like
/// upstream 404s; the `fail_*` switches simulate an unreachable upstream
/// with 503s.
#[derive(Default)]
pub struct FixtureCatalog {
    types: HashMap<PokemonName, Vec<TypeName>>,
    relations: HashMap<TypeName, TypeDamageRelation>,
    details: HashMap<PokemonName, Value>,
    page: Option<PokemonPage>,
    index: Vec<PokemonRef>,
    fail_pokemon: bool,
    fail_relations: bool,
    type_relation_calls: AtomicUsize,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pokemon(mut self, name: &str, types: &[&str]) -> Self {
        self.types.insert(
            PokemonName::new(name),
            types.iter().map(TypeName::new).collect(),
        );
        self
    }

    pub fn with_type(mut self, name: &str, strong: &[&str], weak: &[&str], roster: &[&str]) -> Self {
        self.relations.insert(
            TypeName::new(name),
            TypeDamageRelation {
                strong_against: strong.iter().map(TypeName::new).collect(),
                weak_against: weak.iter().map(TypeName::new).collect(),
                roster: roster.iter().map(PokemonName::new).collect(),
            },
        );
        self
    }

    pub fn with_detail(mut self, name: &str, detail: Value) -> Self {
        self.details.insert(PokemonName::new(name), detail);
        self
    }

    pub fn with_page(mut self, page: PokemonPage) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_index(mut self, entries: &[&str]) -> Self {
        self.index = entries
            .iter()
            .map(|name| PokemonRef {
                name: (*name).to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon/{name}/"),
            })
            .collect();
        self
    }

    /// Make every Pokémon lookup fail with a 503.
    pub fn failing_pokemon(mut self) -> Self {
        self.fail_pokemon = true;
        self
    }

    /// Make every type-relation lookup fail with a 503.
    pub fn failing_relations(mut self) -> Self {
        self.fail_relations = true;
        self
    }

    pub fn type_relation_calls(&self) -> usize {
        self.type_relation_calls.load(Ordering::SeqCst)
    }
}

fn unavailable(resource: String) -> matchdex::error::Error {
    UpstreamError::Status {
        resource,
        status: 503,
    }
    .into()
}

fn not_found(resource: String) -> matchdex::error::Error {
    UpstreamError::Status {
        resource,
        status: 404,
    }
    .into()
}

#[async_trait]
impl Catalog for FixtureCatalog {
    async fn pokemon_types(&self, name: &PokemonName) -> Result<Vec<TypeName>> {
        if self.fail_pokemon {
            return Err(unavailable(format!("pokemon/{name}")));
        }
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(format!("pokemon/{name}")))
    }

    async fn type_relations(&self, type_name: &TypeName) -> Result<TypeDamageRelation> {
        self.type_relation_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_relations {
            return Err(unavailable(format!("type/{type_name}")));
        }
        self.relations
            .get(type_name)
            .cloned()
            .ok_or_else(|| not_found(format!("type/{type_name}")))
    }

    async fn pokemon_detail(&self, name: &PokemonName) -> Result<Value> {
        if self.fail_pokemon {
            return Err(unavailable(format!("pokemon/{name}")));
        }
        self.details
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(format!("pokemon/{name}")))
    }

    async fn pokemon_page(&self, _limit: u32, _offset: u32) -> Result<PokemonPage> {
        if self.fail_pokemon {
            return Err(unavailable("pokemon list".into()));
        }
        Ok(self.page.clone().unwrap_or(PokemonPage {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }))
    }

    async fn pokemon_index(&self, _max: u32) -> Result<Vec<PokemonRef>> {
        if self.fail_pokemon {
            return Err(unavailable("pokemon list".into()));
        }
        Ok(self.index.clone())
    }

    async fn find_pokemon(&self, name: &PokemonName) -> Result<Option<PokemonRef>> {
        if self.fail_pokemon {
            return Err(unavailable(format!("pokemon/{name}")));
        }
        Ok(self
            .index
            .iter()
            .find(|entry| entry.name == name.as_str())
            .cloned())
    }
}

/// LLM returning a fixed response, counting calls.
pub struct StaticLlm {
    response: String,
    calls: AtomicUsize,
}

impl StaticLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Llm for StaticLlm {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// LLM whose endpoint always reports an HTTP failure.
pub struct FailingLlm {
    pub status: u16,
}

#[async_trait]
impl Llm for FailingLlm {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(LlmError::CallFailed {
            status: self.status,
        }
        .into())
    }
}

/// Standard fixture: pikachu with electric typing and the relations the
/// electric/ground/water/flying types carry in the real catalog.
pub fn pikachu_catalog() -> FixtureCatalog {
    FixtureCatalog::new()
        .with_pokemon("pikachu", &["electric"])
        .with_type(
            "electric",
            &["water", "flying"],
            &["ground"],
            &["pikachu", "raichu", "magnemite"],
        )
        .with_type(
            "water",
            &["fire", "ground"],
            &["electric", "grass"],
            &["squirtle", "psyduck", "gyarados"],
        )
        .with_type(
            "flying",
            &["grass", "fighting"],
            &["electric", "rock"],
            &["pidgey", "zubat", "gyarados"],
        )
        .with_type(
            "ground",
            &["electric", "fire"],
            &["water", "grass"],
            &["sandshrew", "diglett", "golem"],
        )
}
