//! Book Service Port
//!
//! The capability the HTTP controller depends on. Any implementation can be
//! substituted without touching transport or storage code.

use async_trait::async_trait;

use crate::application::dto::{BookDto, CreateBookDto};
use crate::domain::catalog::BookError;
use crate::domain::shared::BookId;

/// Catalog operations exposed to driver adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookServicePort: Send + Sync {
    /// Create a book and return it with its assigned identifier.
    async fn create_book(&self, request: CreateBookDto) -> Result<BookDto, BookError>;

    /// Get a book by identifier.
    async fn get_book(&self, id: &BookId) -> Result<BookDto, BookError>;

    /// Delete a book by identifier.
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;

    /// List all books in creation order.
    async fn list_books(&self) -> Result<Vec<BookDto>, BookError>;
}
