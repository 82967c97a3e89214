//! In-memory book repository.
//!
//! `BookStore` owns the keyed collection and the identifier sequence behind a
//! single lock. It is created once by the composition root and handed to the
//! adapter; nothing reaches it through global state.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::catalog::{Book, BookError, BookRepository, NewBook};
use crate::domain::shared::BookId;
use crate::infrastructure::metrics;

#[derive(Debug)]
struct StoreState {
    books: BTreeMap<u64, Book>,
    next_sequence: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            books: BTreeMap::new(),
            next_sequence: 1,
        }
    }
}

/// Process-wide book storage.
///
/// Writers (`insert`, `remove`) are serialized; readers may run concurrently
/// with each other. Sequence numbers are never reused, so an identifier
/// freed by a delete cannot be handed to a later book.
#[derive(Debug, Default)]
pub struct BookStore {
    state: RwLock<StoreState>,
}

impl BookStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a book under the next sequence number.
    ///
    /// Returns the stored book and the number of books held afterwards. The
    /// `bookstore_books_stored` gauge is updated before the lock is released.
    ///
    /// # Errors
    ///
    /// Returns `Internal` once the sequence space is exhausted.
    pub fn insert(&self, new_book: NewBook) -> Result<(Book, usize), BookError> {
        let mut state = self.state.write();
        let sequence = state.next_sequence;
        state.next_sequence = sequence
            .checked_add(1)
            .ok_or_else(|| BookError::internal("book identifier space exhausted"))?;

        let book = Book::with_id(BookId::from_sequence(sequence), new_book);
        state.books.insert(sequence, book.clone());

        let stored = state.books.len();
        metrics::set_books_stored(stored);
        Ok((book, stored))
    }

    /// Get a copy of the book stored under `sequence`.
    #[must_use]
    pub fn get(&self, sequence: u64) -> Option<Book> {
        self.state.read().books.get(&sequence).cloned()
    }

    /// Remove the book stored under `sequence`.
    ///
    /// Returns the removed book and the number of books left, or `None` if
    /// nothing was stored there.
    pub fn remove(&self, sequence: u64) -> Option<(Book, usize)> {
        let mut state = self.state.write();
        let book = state.books.remove(&sequence)?;

        let stored = state.books.len();
        metrics::set_books_stored(stored);
        Some((book, stored))
    }

    /// Copies of all stored books in sequence order.
    #[must_use]
    pub fn books(&self) -> Vec<Book> {
        self.state.read().books.values().cloned().collect()
    }

    /// Number of stored books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().books.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().books.is_empty()
    }

    #[cfg(test)]
    fn with_next_sequence(next_sequence: u64) -> Self {
        Self {
            state: RwLock::new(StoreState {
                books: BTreeMap::new(),
                next_sequence,
            }),
        }
    }
}

/// In-memory implementation of `BookRepository`.
///
/// Contents do not survive a process restart.
#[derive(Debug, Clone)]
pub struct InMemoryBookRepository {
    store: Arc<BookStore>,
}

impl InMemoryBookRepository {
    /// Create a repository backed by `store`.
    #[must_use]
    pub const fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    /// The store this repository writes to.
    #[must_use]
    pub const fn store(&self) -> &Arc<BookStore> {
        &self.store
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, BookError> {
        let (book, _) = self.store.insert(book)?;
        Ok(book)
    }

    async fn get(&self, id: &BookId) -> Result<Book, BookError> {
        id.sequence()
            .and_then(|seq| self.store.get(seq))
            .ok_or_else(|| BookError::not_found(id))
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        id.sequence()
            .and_then(|seq| self.store.remove(seq))
            .map(|_| ())
            .ok_or_else(|| BookError::not_found(id))
    }

    async fn list(&self) -> Result<Vec<Book>, BookError> {
        Ok(self.store.books())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> InMemoryBookRepository {
        InMemoryBookRepository::new(Arc::new(BookStore::new()))
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_from_one() {
        let repo = repo();

        let first = repo.create(NewBook::new("A", "B")).await.unwrap();
        let second = repo.create(NewBook::new("C", "D")).await.unwrap();

        assert_eq!(first.id().as_str(), "1");
        assert_eq!(second.id().as_str(), "2");
    }

    #[tokio::test]
    async fn create_then_get() {
        let repo = repo();
        let draft = NewBook::new("Dune", "Frank Herbert");

        let created = repo.create(draft.clone()).await.unwrap();
        let found = repo.get(created.id()).await.unwrap();

        assert_eq!(found, created);
        assert!(found.matches(&draft));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let repo = repo();

        let err = repo.get(&BookId::new("1")).await.unwrap_err();
        assert!(err.is_not_found());

        let err = repo.get(&BookId::new("not-a-number")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_twice_fails_the_second_time() {
        let repo = repo();
        let created = repo.create(NewBook::new("A", "B")).await.unwrap();

        repo.delete(created.id()).await.unwrap();
        let err = repo.delete(created.id()).await.unwrap_err();

        assert_eq!(err, BookError::not_found(created.id()));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = repo();
        let first = repo.create(NewBook::new("A", "B")).await.unwrap();
        let second = repo.create(NewBook::new("C", "D")).await.unwrap();

        repo.delete(first.id()).await.unwrap();
        let third = repo.create(NewBook::new("E", "F")).await.unwrap();

        assert_eq!(third.id().as_str(), "3");
        assert_ne!(third.id(), second.id());
        assert_eq!(repo.get(second.id()).await.unwrap().title(), "C");
    }

    #[tokio::test]
    async fn list_returns_books_in_creation_order() {
        let repo = repo();
        for title in ["one", "two", "three"] {
            repo.create(NewBook::new(title, "anon")).await.unwrap();
        }
        repo.delete(&BookId::new("2")).await.unwrap();

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|b| b.title().to_string())
            .collect();

        assert_eq!(titles, vec!["one", "three"]);
    }

    #[tokio::test]
    async fn repositories_sharing_a_store_see_each_other() {
        let store = Arc::new(BookStore::new());
        let writer = InMemoryBookRepository::new(Arc::clone(&store));
        let reader = InMemoryBookRepository::new(Arc::clone(&store));

        let created = writer.create(NewBook::new("A", "B")).await.unwrap();

        assert_eq!(reader.get(created.id()).await.unwrap(), created);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn exhausted_sequence_is_internal_error() {
        let repo = InMemoryBookRepository::new(Arc::new(BookStore::with_next_sequence(u64::MAX)));

        let err = repo.create(NewBook::new("A", "B")).await.unwrap_err();

        assert!(matches!(err, BookError::Internal { .. }));
        assert!(repo.store().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let repo = Arc::new(repo());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create(NewBook::new(format!("title-{i}"), "author"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id().clone());
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(repo.store().len(), 64);
    }

    #[test]
    fn store_reports_size_after_each_write() {
        let store = BookStore::new();
        assert!(store.is_empty());

        let (first, stored) = store.insert(NewBook::new("A", "B")).unwrap();
        assert_eq!(stored, 1);
        let (_, stored) = store.insert(NewBook::new("C", "D")).unwrap();
        assert_eq!(stored, 2);

        let (removed, stored) = store.remove(1).unwrap();
        assert_eq!(removed, first);
        assert_eq!(stored, 1);
        assert!(store.remove(1).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_writes_observe_every_size_once() {
        let store = Arc::new(BookStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store
                        .insert(NewBook::new(format!("title-{i}"), "author"))
                        .unwrap()
                        .1
                })
            })
            .collect();

        let mut sizes: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        sizes.sort_unstable();

        assert_eq!(sizes, (1..=32).collect::<Vec<_>>());
    }
}
