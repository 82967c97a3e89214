//! Catalog Service

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{BookDto, CreateBookDto};
use crate::application::ports::BookServicePort;
use crate::domain::catalog::{BookError, BookRepository};
use crate::domain::shared::BookId;

/// Service for the book catalog.
///
/// Depends only on the [`BookRepository`] port. Every operation forwards to
/// the repository unchanged and passes its errors through untouched.
pub struct CatalogService<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> CatalogService<R>
where
    R: BookRepository,
{
    /// Create a new `CatalogService`.
    pub const fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }
}

#[async_trait]
impl<R> BookServicePort for CatalogService<R>
where
    R: BookRepository,
{
    #[tracing::instrument(skip(self, request), fields(title = %request.title))]
    async fn create_book(&self, request: CreateBookDto) -> Result<BookDto, BookError> {
        let book = self.book_repo.create(request.to_domain()).await?;
        tracing::debug!(book_id = %book.id(), "Book created");
        Ok(BookDto::from(book))
    }

    #[tracing::instrument(skip(self), fields(book_id = %id))]
    async fn get_book(&self, id: &BookId) -> Result<BookDto, BookError> {
        let book = self.book_repo.get(id).await?;
        Ok(BookDto::from(book))
    }

    #[tracing::instrument(skip(self), fields(book_id = %id))]
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError> {
        self.book_repo.delete(id).await?;
        tracing::debug!("Book deleted");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_books(&self) -> Result<Vec<BookDto>, BookError> {
        let books = self.book_repo.list().await?;
        Ok(books.iter().map(BookDto::from_book).collect())
    }
}
