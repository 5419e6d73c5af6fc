//! sidra-rs: client for the IBGE SIDRA statistical data API.
//!
//! Two independent paths:
//! - [`values`]: build `/values` query URLs and fetch rows as JSON records.
//! - [`metadata`]: download a table's description page and parse it into
//!   [`TableMetadata`] (title, periods, variables, classifications, territorial levels).
//!
//! [`Table`] ties both together for a single table code.

pub mod core;
pub mod metadata;
pub mod table;
pub mod values;

pub use crate::core::{SidraClient, SidraClientBuilder, SidraError};
pub use metadata::{Category, Classification, TableMetadata, TerritorialLevels, Variable};
pub use table::{Metadata, Table, TableCode};
pub use values::{Record, ValuesBuilder, ValuesQuery, get_url, get_values};

/// Installs a `tracing` subscriber reading its filter from `RUST_LOG`.
///
/// Only for demos and ad-hoc debugging; libraries should leave this to the application.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
