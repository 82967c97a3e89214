//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and service inputs/outputs.

mod book_dto;

pub use book_dto::{BookDto, CreateBookDto};
