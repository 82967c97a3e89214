//! Book Repository Trait
//!
//! Defines the persistence abstraction for books.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::{Book, NewBook};
use super::errors::BookError;
use crate::domain::shared::BookId;

/// Repository trait for Book persistence.
///
/// This is a domain interface (port) that is implemented by
/// infrastructure adapters (in-memory, relational, remote).
///
/// Every identifier passed to [`get`](Self::get) or [`delete`](Self::delete)
/// must have been returned by [`create`](Self::create) and not yet deleted;
/// anything else yields [`BookError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Store a new book under a freshly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if persistence fails.
    async fn create(&self, book: NewBook) -> Result<Book, BookError>;

    /// Find a book by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no book has this identifier.
    async fn get(&self, id: &BookId) -> Result<Book, BookError>;

    /// Remove a book by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no book has this identifier.
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;

    /// List every stored book in creation order.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the query fails.
    async fn list(&self) -> Result<Vec<Book>, BookError>;
}
