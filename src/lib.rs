//! Matchdex - Pokédex backend with tiered matchup resolution.
//!
//! This crate serves a Pokémon catalog and suggests type matchups ("which
//! Pokémon does X tend to beat or lose to"). Suggestions come from a
//! three-tier strategy: a process-local cache, a language-model prompt
//! whose free-form output is parsed defensively, and a deterministic
//! computation over type damage relations fetched from the upstream
//! catalog.
//!
//! # Architecture
//!
//! Hexagonal: the application core speaks to the outside world only
//! through ports.
//!
//! - [`domain`] - normalized names, the matchup entity, damage relations
//! - [`port`] - the `Catalog` and `Llm` trait seams
//! - [`adapter`] - PokeAPI client, Gemini client, and the HTTP surface
//! - [`app`] - cache, generation tier, computed fallback tier, resolver,
//!   catalog browsing
//! - [`config`] - TOML configuration with environment credential override
//! - [`error`] - error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use matchdex::adapter::pokeapi::PokeApi;
//! use matchdex::app::{MatchupCache, MatchupGenerator, MatchupResolver};
//! use matchdex::config::Config;
//! use matchdex::port::Catalog;
//!
//! # fn main() -> matchdex::error::Result<()> {
//! let config = Config::default();
//! let catalog: Arc<dyn Catalog> = Arc::new(PokeApi::new(&config.upstream)?);
//! let cache = Arc::new(MatchupCache::with_ttl_seconds(86_400));
//! let resolver = MatchupResolver::new(catalog, MatchupGenerator::new(None), cache, true);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
