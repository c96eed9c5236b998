use std::{num::NonZeroU32, sync::Arc};

use async_trait::async_trait;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::StatusCode;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    config::Config,
    models::{Candidate, MovieDetails},
};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("metadata provider returned {0}")]
    Status(StatusCode),

    #[error("metadata provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("metadata provider response is missing `{0}`")]
    MalformedResponse(&'static str),
}

/// Movie metadata lookups needed to import a movie.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Candidates matching `title`, in provider order.
    async fn search(&self, title: &str) -> Result<Vec<Candidate>, ProviderError>;

    async fn fetch_details(&self, provider_id: i64) -> Result<MovieDetails, ProviderError>;
}

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
    language: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        if config.tmdb_api_key.trim().is_empty() {
            tracing::warn!("TMDB_API_KEY is not set, movie searches will fail");
        }

        let rps = NonZeroU32::new(config.tmdb_rps).unwrap_or(NonZeroU32::MIN);
        Self {
            client,
            api_key: config.tmdb_api_key.clone(),
            base_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
            image_base_url: config.tmdb_image_base_url.clone(),
            language: config.tmdb_language.clone(),
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(rps))),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        self.limiter.until_ready().await;

        let resp = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "tmdb request failed");
            return Err(ProviderError::Status(status));
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn search(&self, title: &str) -> Result<Vec<Candidate>, ProviderError> {
        let url = format!("{}/search/movie", self.base_url);
        let resp: SearchResponse = self.get_json(url, &[("query", title)]).await?;

        let candidates: Vec<Candidate> = resp.results.into_iter().map(Candidate::from).collect();
        tracing::debug!(title, count = candidates.len(), "tmdb search");
        Ok(candidates)
    }

    async fn fetch_details(&self, provider_id: i64) -> Result<MovieDetails, ProviderError> {
        let url = format!("{}/movie/{}", self.base_url, provider_id);
        let resp: DetailsResponse =
            self.get_json(url, &[("language", self.language.as_str())]).await?;

        let details = resp.into_details(&self.image_base_url)?;
        tracing::debug!(provider_id, title = %details.title, year = details.year, "tmdb details");
        Ok(details)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchMovie>,
}

#[derive(Debug, Deserialize)]
struct SearchMovie {
    id: i64,
    #[serde(default)]
    title: String,
    release_date: Option<String>,
}

impl From<SearchMovie> for Candidate {
    fn from(m: SearchMovie) -> Self {
        Candidate {
            provider_id: m.id,
            title: m.title,
            release_date: m.release_date.filter(|d| !d.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    title: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
}

impl DetailsResponse {
    fn into_details(self, image_base_url: &str) -> Result<MovieDetails, ProviderError> {
        let title = non_empty(self.title).ok_or(ProviderError::MalformedResponse("title"))?;
        let release_date = non_empty(self.release_date)
            .ok_or(ProviderError::MalformedResponse("release_date"))?;
        let year =
            release_year(&release_date).ok_or(ProviderError::MalformedResponse("release_date"))?;
        let description = self.overview.ok_or(ProviderError::MalformedResponse("overview"))?;
        let poster_path =
            non_empty(self.poster_path).ok_or(ProviderError::MalformedResponse("poster_path"))?;

        Ok(MovieDetails {
            title,
            year,
            description,
            img_url: format!("{image_base_url}{poster_path}"),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// The four-digit year prefix of a `YYYY-MM-DD` release date.
fn release_year(release_date: &str) -> Option<i32> {
    let year = release_date.split('-').next()?;
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}
