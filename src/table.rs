use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Serialize;
use tokio::sync::OnceCell;
use url::Url;

use crate::metadata::{
    TableMetadata, description_path, description_url, fetch_description, normalize_html,
    parse_metadata,
};
use crate::{SidraClient, SidraError, ValuesBuilder};

/// A validated SIDRA table code: a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TableCode(NonZeroU32);

impl TableCode {
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i64> for TableCode {
    type Error = SidraError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        if code <= 0 {
            return Err(SidraError::Validation(format!(
                "code must be greater than 0, got {code}"
            )));
        }
        u32::try_from(code)
            .ok()
            .and_then(NonZeroU32::new)
            .map(TableCode)
            .ok_or_else(|| SidraError::Validation(format!("code {code} is out of range")))
    }
}

impl FromStr for TableCode {
    type Err = SidraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: i64 = s
            .trim()
            .parse()
            .map_err(|_| SidraError::Validation(format!("code must be an integer, got {s:?}")))?;
        Self::try_from(code)
    }
}

impl fmt::Display for TableCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A SIDRA table.
///
/// The code is fixed at construction. The [`Metadata`] handle is created on first
/// access and lives as long as the table.
///
/// ```no_run
/// # use sidra_rs::{SidraClient, Table};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SidraClient::default();
/// let table = Table::new(&client, 1612)?;
/// let md = table.metadata().parse().await?;
/// println!("{} ({} variables)", md.title, md.vars.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Table {
    client: SidraClient,
    code: TableCode,
    metadata: OnceLock<Metadata>,
}

impl Table {
    /// Creates a table handle.
    ///
    /// # Errors
    ///
    /// Returns `SidraError::Validation` if `code` is not positive.
    pub fn new(client: &SidraClient, code: i64) -> Result<Self, SidraError> {
        Ok(Self::with_code(client, TableCode::try_from(code)?))
    }

    /// Creates a table handle from an already validated code.
    pub fn with_code(client: &SidraClient, code: TableCode) -> Self {
        Self {
            client: client.clone(),
            code,
            metadata: OnceLock::new(),
        }
    }

    pub fn code(&self) -> u32 {
        self.code.get()
    }

    /// The metadata handle of this table, created on first call.
    pub fn metadata(&self) -> &Metadata {
        self.metadata
            .get_or_init(|| Metadata::new(&self.client, self.code))
    }

    /// Starts a `/values` query against this table.
    pub fn values(
        &self,
        territorial_level: impl Into<String>,
        territorial_units: impl Into<String>,
    ) -> ValuesBuilder {
        ValuesBuilder::new(&self.client, self.code, territorial_level, territorial_units)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Table: {}>", self.code)
    }
}

/// Description of a single table.
///
/// The page is fetched and normalized at most once ([`raw`](Self::raw)) and parsed
/// at most once ([`parse`](Self::parse)). A failed attempt caches nothing.
#[derive(Debug)]
pub struct Metadata {
    client: SidraClient,
    code: TableCode,
    raw: OnceCell<String>,
    parsed: OnceCell<TableMetadata>,
}

impl Metadata {
    pub fn new(client: &SidraClient, code: TableCode) -> Self {
        Self {
            client: client.clone(),
            code,
            raw: OnceCell::new(),
            parsed: OnceCell::new(),
        }
    }

    pub fn code(&self) -> u32 {
        self.code.get()
    }

    /// Request path of the description page, e.g. `/desctabapi.aspx?c=1612`.
    pub fn path(&self) -> String {
        description_path(self.code.get())
    }

    /// Full URL of the description page.
    ///
    /// # Errors
    ///
    /// Returns `SidraError::Url` if the client base URL cannot be joined.
    pub fn url(&self) -> Result<Url, SidraError> {
        description_url(&self.client, self.code.get())
    }

    /// The normalized description text (see [`normalize_html`]).
    ///
    /// # Errors
    ///
    /// Returns the fetch error; nothing is cached in that case.
    pub async fn raw(&self) -> Result<&str, SidraError> {
        self.raw
            .get_or_try_init(|| async move {
                let html = fetch_description(&self.client, self.code.get()).await?;
                Ok::<_, SidraError>(normalize_html(&html))
            })
            .await
            .map(String::as_str)
    }

    /// The parsed metadata record.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or `SidraError::Parse` if the page does not match the
    /// expected layout. No partial record is kept.
    pub async fn parse(&self) -> Result<&TableMetadata, SidraError> {
        self.parsed
            .get_or_try_init(|| async move {
                let raw = self.raw().await?;
                parse_metadata(self.code.get(), raw)
            })
            .await
    }

    /// Whether the description page has already been fetched.
    pub fn is_fetched(&self) -> bool {
        self.raw.initialized()
    }

    /// The parsed record, if [`parse`](Self::parse) already succeeded.
    pub fn parsed(&self) -> Option<&TableMetadata> {
        self.parsed.get()
    }
}
