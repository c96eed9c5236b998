#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use reelrank::{
    AppState, build_router, db,
    models::{Candidate, MovieDetails},
    store::MovieStore,
    tmdb::{MetadataProvider, ProviderError},
};
use reqwest::StatusCode;
use tempfile::TempDir;

pub struct TestDb {
    pub store: MovieStore,
    _dir: TempDir,
}

pub async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
    let conn = db::connect_and_migrate(&url).await.expect("connect and migrate");
    TestDb { store: MovieStore::new(conn), _dir: dir }
}

pub fn details(title: &str, year: i32) -> MovieDetails {
    MovieDetails {
        title: title.to_string(),
        year,
        description: format!("{title} synopsis"),
        img_url: format!("https://image.tmdb.org/t/p/w500/{}.jpg", title.to_lowercase()),
    }
}

#[derive(Default)]
pub struct FakeProvider {
    pub candidates: Vec<Candidate>,
    pub details: HashMap<i64, MovieDetails>,
    pub fail_with: Option<StatusCode>,
    pub searches: Mutex<Vec<String>>,
    pub fetches: Mutex<Vec<i64>>,
}

impl FakeProvider {
    pub fn dune() -> Self {
        let mut by_id = HashMap::new();
        by_id.insert(438631, details("Dune", 2021));
        Self {
            candidates: vec![
                Candidate {
                    provider_id: 438631,
                    title: "Dune".to_string(),
                    release_date: Some("2021-10-21".to_string()),
                },
                Candidate {
                    provider_id: 841,
                    title: "Dune".to_string(),
                    release_date: Some("1984-12-14".to_string()),
                },
            ],
            details: by_id,
            ..Default::default()
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self { fail_with: Some(status), ..Default::default() }
    }
}

#[async_trait]
impl MetadataProvider for FakeProvider {
    async fn search(&self, title: &str) -> Result<Vec<Candidate>, ProviderError> {
        self.searches.lock().unwrap().push(title.to_string());
        if let Some(status) = self.fail_with {
            return Err(ProviderError::Status(status));
        }
        Ok(self.candidates.clone())
    }

    async fn fetch_details(&self, provider_id: i64) -> Result<MovieDetails, ProviderError> {
        self.fetches.lock().unwrap().push(provider_id);
        if let Some(status) = self.fail_with {
            return Err(ProviderError::Status(status));
        }
        self.details
            .get(&provider_id)
            .cloned()
            .ok_or(ProviderError::Status(StatusCode::NOT_FOUND))
    }
}

pub async fn test_app(provider: Arc<FakeProvider>) -> (axum::Router, TestDb) {
    let db = test_db().await;
    let state = Arc::new(AppState { store: db.store.clone(), provider });
    (build_router(state), db)
}
