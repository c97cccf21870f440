//! Error types for the dashboard shell.

use thiserror::Error;

use crate::store::StoreError;

/// Dashboard-level errors.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Settings store failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Invalid field schema at registration.
    #[error("schema error: {0}")]
    Schema(#[from] dashwidget_forms::SchemaError),

    /// A widget id was registered twice.
    #[error("widget already registered: {0}")]
    DuplicateWidget(String),

    /// No widget registered under the requested id.
    #[error("unknown widget: {0}")]
    UnknownWidget(String),
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, AdminError>;
