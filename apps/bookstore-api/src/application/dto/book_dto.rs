//! Book DTOs

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Book, NewBook};

/// DTO for creating a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookDto {
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
}

impl CreateBookDto {
    /// Convert to the domain's unsaved book.
    #[must_use]
    pub fn to_domain(&self) -> NewBook {
        NewBook::new(&self.title, &self.author)
    }
}

/// DTO representing a stored book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDto {
    /// Book ID.
    pub id: String,
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
}

impl BookDto {
    /// Create from a domain book.
    #[must_use]
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
        }
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self::from_book(&book)
    }
}
