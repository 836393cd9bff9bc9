//! Upstream catalog client (PokeAPI).
//!
//! Fail-fast adapter: one attempt per call, explicit request timeout, no
//! retries. Tier fallthrough decisions belong to the resolver.

mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::domain::{PokemonName, PokemonPage, PokemonRef, TypeDamageRelation, TypeName};
use crate::error::{ConfigError, Result, UpstreamError};
use crate::port::Catalog;

/// HTTP client for the upstream Pokémon catalog.
pub struct PokeApi {
    client: Client,
    base: Url,
}

impl PokeApi {
    /// Create a client from upstream configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        let base = Url::parse(&config.base_url)?;

        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| ConfigError::InvalidValue {
                field: "upstream.base_url",
                reason: "must be a hierarchical URL".into(),
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, resource: &str) -> Result<T> {
        debug!(url = %url, "fetching from catalog");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                resource: resource.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| {
                UpstreamError::Transport {
                    resource: resource.to_string(),
                    source: e,
                }
                .into()
            })
    }
}

#[async_trait]
impl Catalog for PokeApi {
    async fn pokemon_types(&self, name: &PokemonName) -> Result<Vec<TypeName>> {
        let url = self.endpoint(&["pokemon", name.as_str()])?;
        let dto: dto::PokemonTypesDto = self.get_json(url, &format!("pokemon/{name}")).await?;
        Ok(dto.into_type_names())
    }

    async fn type_relations(&self, type_name: &TypeName) -> Result<TypeDamageRelation> {
        let url = self.endpoint(&["type", type_name.as_str()])?;
        let dto: dto::TypeDto = self.get_json(url, &format!("type/{type_name}")).await?;
        Ok(dto.into())
    }

    async fn pokemon_detail(&self, name: &PokemonName) -> Result<Value> {
        let url = self.endpoint(&["pokemon", name.as_str()])?;
        self.get_json(url, &format!("pokemon/{name}")).await
    }

    async fn pokemon_page(&self, limit: u32, offset: u32) -> Result<PokemonPage> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());

        let dto: dto::PageDto = self.get_json(url, "pokemon list").await?;
        Ok(dto.into())
    }

    async fn pokemon_index(&self, max: u32) -> Result<Vec<PokemonRef>> {
        let page = self.pokemon_page(max, 0).await?;
        Ok(page.results)
    }

    async fn find_pokemon(&self, name: &PokemonName) -> Result<Option<PokemonRef>> {
        let url = self.endpoint(&["pokemon", name.as_str()])?;
        let resource = format!("pokemon/{name}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                resource: resource.clone(),
                source: e,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(UpstreamError::Status {
                status: response.status().as_u16(),
                resource,
            }
            .into());
        }

        let dto: dto::PokemonSummaryDto =
            response.json().await.map_err(|e| UpstreamError::Transport {
                resource,
                source: e,
            })?;

        let mut url = self.endpoint(&["pokemon", &dto.id.to_string()])?.to_string();
        url.push('/');
        Ok(Some(PokemonRef {
            name: dto.name,
            url,
        }))
    }
}
