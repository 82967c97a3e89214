//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the catalog service. Decoding and
//! the error-to-status mapping happen here and nowhere else.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;

use crate::application::ports::BookServicePort;
use crate::domain::shared::BookId;
use crate::infrastructure::metrics::{self, Operation, Outcome};

use super::error::ApiError;
use super::request::CreateBookRequest;
use super::response::{BookResponse, HealthResponse, MessageResponse};

/// Application state shared across handlers.
pub struct AppState<S>
where
    S: BookServicePort,
{
    /// Catalog service.
    pub books: Arc<S>,
    /// Application version.
    pub version: String,
    /// Process start time, for uptime reporting.
    pub started_at: Instant,
}

impl<S> AppState<S>
where
    S: BookServicePort,
{
    /// Create state around a service.
    pub fn new(books: Arc<S>, version: impl Into<String>) -> Self {
        Self {
            books,
            version: version.into(),
            started_at: Instant::now(),
        }
    }
}

impl<S> Clone for AppState<S>
where
    S: BookServicePort,
{
    fn clone(&self) -> Self {
        Self {
            books: Arc::clone(&self.books),
            version: self.version.clone(),
            started_at: self.started_at,
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: BookServicePort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(render_metrics))
        .route("/books", get(list_books).post(create_book))
        .route("/books/{id}", get(get_book).delete(delete_book))
        .with_state(state)
}

fn observe<T>(operation: Operation, started: Instant, result: &Result<T, ApiError>) {
    let outcome = result
        .as_ref()
        .map_or_else(ApiError::outcome, |_| Outcome::Success);
    metrics::record_operation(operation, outcome, started.elapsed());
}

/// Health check endpoint.
async fn health_check<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: BookServicePort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        current_time: Utc::now(),
    })
}

/// Prometheus metrics endpoint.
async fn render_metrics() -> Response {
    match metrics::get_metrics_handle() {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Create book endpoint.
async fn create_book<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError>
where
    S: BookServicePort,
{
    let started = Instant::now();
    let result = match payload {
        Ok(Json(request)) => state
            .books
            .create_book(request.into())
            .await
            .map(|book| {
                tracing::info!(book_id = %book.id, "Book created");
                (StatusCode::CREATED, Json(BookResponse::from(book)))
            })
            .map_err(ApiError::from),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Create book rejected");
            Err(ApiError::from(rejection))
        }
    };

    observe(Operation::Create, started, &result);
    result
}

/// List books endpoint.
async fn list_books<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<BookResponse>>, ApiError>
where
    S: BookServicePort,
{
    let started = Instant::now();
    let result = state
        .books
        .list_books()
        .await
        .map(|books| Json(books.into_iter().map(BookResponse::from).collect()))
        .map_err(ApiError::from);

    observe(Operation::List, started, &result);
    result
}

/// Get book endpoint.
async fn get_book<S>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<BookResponse>, ApiError>
where
    S: BookServicePort,
{
    let started = Instant::now();
    let result = match path {
        Ok(Path(id)) => state
            .books
            .get_book(&BookId::new(id))
            .await
            .map(|book| Json(BookResponse::from(book)))
            .map_err(ApiError::from),
        Err(rejection) => Err(ApiError::from(rejection)),
    };

    observe(Operation::Get, started, &result);
    result
}

/// Delete book endpoint.
async fn delete_book<S>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError>
where
    S: BookServicePort,
{
    let started = Instant::now();
    let result = match path {
        Ok(Path(id)) => {
            let id = BookId::new(id);
            state
                .books
                .delete_book(&id)
                .await
                .map(|()| {
                    tracing::info!(book_id = %id, "Book deleted");
                    Json(MessageResponse {
                        message: "Book deleted successfully".to_string(),
                    })
                })
                .map_err(ApiError::from)
        }
        Err(rejection) => Err(ApiError::from(rejection)),
    };

    observe(Operation::Delete, started, &result);
    result
}
