//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing REST endpoints that delegate to the catalog service.

mod controller;
mod error;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use error::ApiError;
pub use request::*;
pub use response::*;
