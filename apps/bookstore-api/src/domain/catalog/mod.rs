//! Catalog Bounded Context
//!
//! Books and the persistence port they are stored through.

pub mod aggregate;
pub mod errors;
pub mod repository;

pub use aggregate::{Book, NewBook};
pub use errors::BookError;
pub use repository::BookRepository;
