use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::tmdb::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("\"{0}\" is already in your list")]
    ConstraintViolation(String),

    #[error("movie {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Provider(_) => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::warn!(%status, error = %self, "request rejected");
        }

        let body = crate::templates::error_page(status, &self.to_string());
        (status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
