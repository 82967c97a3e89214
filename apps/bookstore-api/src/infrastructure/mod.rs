//! Infrastructure Layer
//!
//! This module contains all adapters (implementations) for the ports defined
//! in the domain and application layers. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**: Implement ports for external systems
//!   - `persistence/`: Book repository adapters (in-memory)
//!
//! - **Driver Adapters (Inbound)**: Expose application to external world
//!   - `http/`: REST API controller
//!
//! - **Cross-cutting**
//!   - `config/`: Environment configuration and dependency injection
//!   - `telemetry/`: Logging and OpenTelemetry tracing
//!   - `metrics/`: Prometheus instrumentation

pub mod config;
pub mod http;
pub mod metrics;
pub mod persistence;
pub mod telemetry;
