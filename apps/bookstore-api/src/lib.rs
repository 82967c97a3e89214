// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Bookstore API - Layered Catalog Service
//!
//! A REST service for creating, reading and deleting books, organised so
//! each layer only talks to the one directly below it.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: `Book`, `NewBook`, `BookId` and the `BookRepository` port
//!
//! - **Application**: Orchestration
//!   - `ports`: `BookServicePort`, the interface the controller depends on
//!   - `services`: `CatalogService`, the business-rule seam
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters
//!   - `http`: Axum controller, error-to-status mapping
//!   - `persistence`: In-memory book repository
//!   - `config`: Environment settings and dependency injection container
//!   - `telemetry` / `metrics`: Logging, tracing and Prometheus
//!
//! # Endpoints
//!
//! | Method | Path          | Success           |
//! |--------|---------------|-------------------|
//! | POST   | `/books`      | 201 + book        |
//! | GET    | `/books`      | 200 + books       |
//! | GET    | `/books/{id}` | 200 + book        |
//! | DELETE | `/books/{id}` | 200 + message     |
//! | GET    | `/health`     | 200 + status      |
//! | GET    | `/metrics`    | 200 + Prometheus  |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business types with no external dependencies.
pub mod domain;

/// Application layer - Services and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::dto::{BookDto, CreateBookDto};
pub use application::ports::BookServicePort;
pub use application::services::CatalogService;
pub use domain::catalog::{Book, BookError, BookRepository, NewBook};
pub use domain::shared::BookId;
pub use infrastructure::config::{AppConfig, Container, InMemoryContainer};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{BookStore, InMemoryBookRepository};
