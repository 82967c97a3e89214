//! Dependency Injection Container
//!
//! Builds the dependency graph bottom-up: adapter, then service, then
//! controller state and router.

use std::sync::Arc;

use axum::Router;

use crate::application::services::CatalogService;
use crate::domain::catalog::BookRepository;
use crate::infrastructure::http::{AppState, create_router};
use crate::infrastructure::persistence::{BookStore, InMemoryBookRepository};

/// Container wired with the in-memory persistence adapter.
pub type InMemoryContainer = Container<InMemoryBookRepository>;

/// Dependency injection container.
///
/// Holds the persistence adapter; everything above it is created on demand
/// so alternate adapters can be swapped in without touching service or
/// controller code.
pub struct Container<R>
where
    R: BookRepository + 'static,
{
    book_repo: Arc<R>,
}

impl<R> Container<R>
where
    R: BookRepository + 'static,
{
    /// Create a new container around a persistence adapter.
    pub const fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    /// Get the book repository.
    pub fn book_repo(&self) -> Arc<R> {
        Arc::clone(&self.book_repo)
    }

    /// Create a `CatalogService`.
    pub fn catalog_service(&self) -> CatalogService<R> {
        CatalogService::new(Arc::clone(&self.book_repo))
    }

    /// Create the HTTP state for the controller.
    pub fn app_state(&self, version: impl Into<String>) -> AppState<CatalogService<R>> {
        AppState::new(Arc::new(self.catalog_service()), version)
    }

    /// Create the HTTP router with every route bound.
    pub fn router(&self, version: impl Into<String>) -> Router {
        create_router(self.app_state(version))
    }
}

impl Container<InMemoryBookRepository> {
    /// Wire the in-memory adapter over a fresh store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(BookStore::new()))
    }

    /// Wire the in-memory adapter over an existing store.
    #[must_use]
    pub fn with_store(store: Arc<BookStore>) -> Self {
        Self::new(Arc::new(InMemoryBookRepository::new(store)))
    }
}
