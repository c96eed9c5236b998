pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod store;
pub mod templates;
pub mod tmdb;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{store::MovieStore, tmdb::MetadataProvider};

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
    pub provider: Arc<dyn MetadataProvider>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/add", get(routes::add_form).post(routes::add))
        .route("/find", get(routes::find))
        .route("/edit", get(routes::edit_form).post(routes::edit))
        .route("/delete", get(routes::delete))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
