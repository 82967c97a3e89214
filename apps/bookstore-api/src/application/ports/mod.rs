//! Application Ports (Driver)
//!
//! Driver ports define how the outside world uses the application.
//! Driven ports (persistence) live with the domain as repository traits.

mod book_service_port;

#[cfg(test)]
pub use book_service_port::MockBookServicePort;
pub use book_service_port::BookServicePort;
