//! Book entity.

use serde::{Deserialize, Serialize};

use crate::domain::shared::BookId;

/// A book before it has been stored.
///
/// Carries every entity field except the identifier, which only a
/// persistence adapter may assign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
}

impl NewBook {
    /// Create a new unsaved book.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

/// A stored book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
}

impl Book {
    /// Attach an adapter-assigned identifier to an unsaved book.
    #[must_use]
    pub fn with_id(id: BookId, new_book: NewBook) -> Self {
        Self {
            id,
            title: new_book.title,
            author: new_book.author,
        }
    }

    /// Get the book ID.
    #[must_use]
    pub const fn id(&self) -> &BookId {
        &self.id
    }

    /// Get the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether this book carries the same fields as `new_book`, ignoring the id.
    #[must_use]
    pub fn matches(&self, new_book: &NewBook) -> bool {
        self.title == new_book.title && self.author == new_book.author
    }
}
