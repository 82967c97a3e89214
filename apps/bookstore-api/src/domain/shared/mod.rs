//! Shared domain types used across bounded contexts.

pub mod value_objects;

pub use value_objects::BookId;
