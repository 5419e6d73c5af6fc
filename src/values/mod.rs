//! Tabular data retrieval through the `/values` endpoint.

mod params;

pub use params::{ValuesQuery, get_url};

use crate::core::net::get_checked;
use crate::{SidraClient, SidraError};

/// One row of a `/values` response: string keys (`NC`, `NN`, `V`, `D1C`, ...) to JSON values.
///
/// The schema is owned by the API and passed through untouched.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Fetches the records described by `query`.
///
/// # Errors
///
/// Returns `SidraError::Request` on a non-successful status (the body carries the
/// API's message), `SidraError::Http` on transport failures, and `SidraError::Json`
/// if the body is not an array of objects.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err, fields(table = %query.table)))]
pub async fn get_values(client: &SidraClient, query: &ValuesQuery) -> Result<Vec<Record>, SidraError> {
    let url = query.url(client.base_url())?;
    let body = get_checked(client, url, "values", &query.path(), "json").await?;
    let records: Vec<Record> = serde_json::from_str(&body)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = records.len(), "values decoded");

    Ok(records)
}

/// A builder for a single `/values` request.
///
/// ```no_run
/// # use sidra_rs::{SidraClient, ValuesBuilder};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SidraClient::default();
/// let rows = ValuesBuilder::new(&client, 1612, "1", "all")
///     .variable("109")
///     .period("last 3")
///     .fetch()
///     .await?;
/// println!("{} rows", rows.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ValuesBuilder {
    client: SidraClient,
    query: ValuesQuery,
}

impl ValuesBuilder {
    /// Creates a builder with the three mandatory segments.
    pub fn new(
        client: &SidraClient,
        table: impl ToString,
        territorial_level: impl Into<String>,
        territorial_units: impl Into<String>,
    ) -> Self {
        Self {
            client: client.clone(),
            query: ValuesQuery::new(table, territorial_level, territorial_units),
        }
    }

    #[must_use]
    pub fn variable(mut self, v: impl Into<String>) -> Self {
        self.query = self.query.variable(v);
        self
    }

    #[must_use]
    pub fn classification(mut self, c: impl Into<String>) -> Self {
        self.query = self.query.classification(c);
        self
    }

    #[must_use]
    pub fn categories(mut self, c: impl Into<String>) -> Self {
        self.query = self.query.categories(c);
        self
    }

    #[must_use]
    pub fn period(mut self, p: impl Into<String>) -> Self {
        self.query = self.query.period(p);
        self
    }

    #[must_use]
    pub fn header(mut self, h: impl Into<String>) -> Self {
        self.query = self.query.header(h);
        self
    }

    /// The query as built so far.
    pub fn query(&self) -> &ValuesQuery {
        &self.query
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// See [`get_values`].
    pub async fn fetch(self) -> Result<Vec<Record>, SidraError> {
        get_values(&self.client, &self.query).await
    }
}
