//! Value objects shared across the domain.

mod identifiers;

pub use identifiers::BookId;
