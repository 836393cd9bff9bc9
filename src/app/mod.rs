//! Application layer: caching, the matchup tiers, and catalog browsing.

mod browse;
mod cache;
mod extract;
mod fallback;
mod generator;
mod resolver;

pub use browse::{CatalogBrowser, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use cache::MatchupCache;
pub use extract::extract_matchup_json;
pub use fallback::FallbackComputer;
pub use generator::MatchupGenerator;
pub use resolver::MatchupResolver;
