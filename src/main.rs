use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};

use matchdex::adapter::http::{router, AppState};
use matchdex::adapter::llm::Gemini;
use matchdex::adapter::pokeapi::PokeApi;
use matchdex::app::{CatalogBrowser, MatchupCache, MatchupGenerator, MatchupResolver};
use matchdex::config::Config;
use matchdex::error::Result;
use matchdex::port::{Catalog, Llm};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::load_or_default("config.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("matchdex starting");

    let state = match build_state(&config) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %addr, "failed to bind");
            std::process::exit(1);
        }
    };
    info!(addr = %addr, "listening");

    let app = router(state, &config.server);
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        std::process::exit(1);
    }

    info!("matchdex stopped");
}

fn build_state(config: &Config) -> Result<AppState> {
    let catalog: Arc<dyn Catalog> = Arc::new(PokeApi::new(&config.upstream)?);

    let llm: Option<Arc<dyn Llm>> = match &config.llm.api_key {
        Some(key) => Some(Arc::new(Gemini::new(
            key.clone(),
            config.llm.model.clone(),
            config.llm.temperature,
            config.llm.max_output_tokens,
        ))),
        None => {
            info!("GEMINI_API_KEY not set, llm tier disabled");
            None
        }
    };

    let cache = Arc::new(MatchupCache::with_ttl_seconds(
        config.matchups.cache_ttl_seconds,
    ));
    let generator = MatchupGenerator::new(llm);
    let resolver = Arc::new(MatchupResolver::new(
        Arc::clone(&catalog),
        generator,
        cache,
        config.matchups.fallback_enabled,
    ));
    let browser = Arc::new(CatalogBrowser::new(catalog));

    Ok(AppState { resolver, browser })
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("shutdown signal received");
}
