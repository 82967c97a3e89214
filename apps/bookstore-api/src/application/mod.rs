//! Application Layer
//!
//! The application layer orchestrates domain logic through services.
//! It defines:
//!
//! - **Ports**: Interfaces the driver adapters (HTTP) call into
//! - **Services**: Application-specific business rules
//! - **DTOs**: Data transfer objects for API boundaries

pub mod dto;
pub mod ports;
pub mod services;

pub use dto::*;
pub use ports::*;
pub use services::*;
