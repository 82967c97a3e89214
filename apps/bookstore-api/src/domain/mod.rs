//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Entities**: Records with identity (`Book`)
//! - **Value Objects**: Immutable domain types with equality by value (`BookId`)
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`catalog`]: Book catalog (create, read, delete)

pub mod catalog;
pub mod shared;
