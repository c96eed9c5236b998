use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub tmdb_image_base_url: String,
    pub tmdb_language: String,
    pub tmdb_rps: u32,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movies.db?mode=rwc".to_string());

        let tmdb_api_key = std::env::var("TMDB_API_KEY").unwrap_or_default();
        let tmdb_base_url = std::env::var("TMDB_BASE_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string());
        let tmdb_image_base_url = std::env::var("TMDB_IMAGE_BASE_URL")
            .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".to_string());
        let tmdb_language =
            std::env::var("TMDB_LANGUAGE").unwrap_or_else(|_| "en-US".to_string());

        let tmdb_rps: u32 = parse_or("TMDB_RPS", 4);
        let http_timeout_secs: u64 = parse_or("HTTP_TIMEOUT_SECS", 30);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            tmdb_api_key,
            tmdb_base_url,
            tmdb_image_base_url,
            tmdb_language,
            tmdb_rps,
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}
