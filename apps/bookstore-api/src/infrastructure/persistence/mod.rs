//! Persistence Adapters
//!
//! Storage implementations of the `BookRepository` port.

pub mod in_memory;

pub use in_memory::{BookStore, InMemoryBookRepository};
