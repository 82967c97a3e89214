//! Prometheus Metrics Module
//!
//! Exposes catalog metrics in Prometheus format.
//!
//! # Metrics
//!
//! - `bookstore_operations_total{operation, outcome}`: Routed catalog operations
//! - `bookstore_operation_duration_seconds{operation}`: Handler latency
//! - `bookstore_books_stored`: Books currently held by the in-memory adapter
//!
//! Recording is a no-op until [`init_metrics`] installs the recorder, so
//! tests and metric-less deployments pay nothing.

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

// =============================================================================
// Global Metrics Handle
// =============================================================================

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to install the Prometheus recorder.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

/// Initialize the Prometheus metrics recorder.
///
/// Calling this again returns the handle installed by the first call.
///
/// # Errors
///
/// Returns an error if another global recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, MetricsError> {
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    register_metrics();
    Ok(PROMETHEUS_HANDLE.get_or_init(|| handle).clone())
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

// =============================================================================
// Metric Registration
// =============================================================================

fn register_metrics() {
    describe_counter!(
        "bookstore_operations_total",
        "Total catalog operations handled, by operation and outcome"
    );
    describe_histogram!(
        "bookstore_operation_duration_seconds",
        "Time spent handling a catalog operation"
    );
    describe_gauge!(
        "bookstore_books_stored",
        "Number of books currently held in memory"
    );
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Catalog operation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create a book.
    Create,
    /// Get a book.
    Get,
    /// Delete a book.
    Delete,
    /// List books.
    List,
}

impl Operation {
    /// Get the label value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Get => "get",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }
}

/// Operation outcome label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Completed successfully.
    Success,
    /// Rejected before reaching the service.
    InvalidRequest,
    /// Referenced book does not exist.
    NotFound,
    /// Failed unexpectedly.
    Error,
}

impl Outcome {
    /// Get the label value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::Error => "error",
        }
    }
}

/// Record a handled catalog operation.
pub fn record_operation(operation: Operation, outcome: Outcome, elapsed: Duration) {
    counter!(
        "bookstore_operations_total",
        "operation" => operation.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);

    histogram!(
        "bookstore_operation_duration_seconds",
        "operation" => operation.as_str()
    )
    .record(elapsed.as_secs_f64());
}

/// Update the stored books gauge.
#[allow(clippy::cast_precision_loss)]
pub fn set_books_stored(count: usize) {
    gauge!("bookstore_books_stored").set(count as f64);
}
