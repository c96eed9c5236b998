use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{AddMovieForm, EditErrors, EditMovieForm},
    ranking, templates,
};

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    id: Option<String>,
}

impl IdQuery {
    /// The trimmed `id` parameter, treating an empty value as absent.
    fn raw(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn movie_id(&self) -> AppResult<i32> {
        let raw = self.raw().ok_or_else(|| AppError::Validation("missing movie id".to_string()))?;
        raw.parse().map_err(|_| AppError::Validation(format!("invalid movie id \"{raw}\"")))
    }
}

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let mut movies = state.store.list_by_rating().await?;
    let changed = ranking::assign_ranks(&mut movies);
    state.store.save_rankings(&changed).await?;

    tracing::debug!(movies = movies.len(), reranked = changed.len(), "listed movies");
    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page("", None))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddMovieForm>,
) -> AppResult<Response> {
    let title = match form.validate() {
        Ok(title) => title,
        Err(msg) => {
            let body = templates::add_page(&form.title, Some(msg));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response());
        }
    };

    let candidates = state.provider.search(title).await?;
    Ok(Html(templates::select_page(title, &candidates)).into_response())
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Redirect> {
    let Some(raw) = q.raw() else {
        return Ok(Redirect::to("/"));
    };
    let provider_id: i64 = raw
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid provider id \"{raw}\"")))?;

    let details = state.provider.fetch_details(provider_id).await?;
    let movie = state.store.insert(details).await?;

    tracing::info!(id = movie.id, provider_id, title = %movie.title, "imported movie");
    Ok(Redirect::to(&format!("/edit?id={}", movie.id)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Html<String>> {
    let id = q.movie_id()?;
    let movie = state.store.get(id).await?.ok_or(AppError::NotFound(id))?;

    let rating = movie.rating.map(|r| r.to_string()).unwrap_or_default();
    let review = movie.review.as_deref().unwrap_or_default();
    Ok(Html(templates::edit_page(&movie, &rating, review, &EditErrors::default())))
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
    Form(form): Form<EditMovieForm>,
) -> AppResult<Response> {
    let id = q.movie_id()?;

    match form.validate() {
        Ok(review) => {
            let updated = state.store.update(id, review).await?;
            tracing::info!(id, rating = ?updated.rating, "reviewed movie");
            Ok(Redirect::to("/").into_response())
        }
        Err(errors) => {
            let movie = state.store.get(id).await?.ok_or(AppError::NotFound(id))?;
            tracing::debug!(id, ?errors, "edit form rejected");
            let body = templates::edit_page(&movie, &form.rating, &form.review, &errors);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response())
        }
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Redirect> {
    let Some(id) = q.raw().and_then(|raw| raw.parse::<i32>().ok()) else {
        tracing::debug!(id = ?q.id, "delete without a usable movie id");
        return Ok(Redirect::to("/"));
    };
    if state.store.delete(id).await? {
        tracing::info!(id, "deleted movie");
    } else {
        tracing::debug!(id, "delete of unknown movie ignored");
    }
    Ok(Redirect::to("/"))
}
