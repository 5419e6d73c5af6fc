//! Table metadata scraped from the `desctabapi.aspx` description page.
//!
//! Internals are split into:
//! - `fetch`:     download of the HTML page
//! - `normalize`: HTML to flattened text lines
//! - `fold`:      Portuguese accent folding
//! - `grammar`:   per-line grammars (variables, classification headers, ...)
//! - `parse`:     the state machine assembling [`TableMetadata`]

mod fetch;
mod fold;
mod grammar;
mod model;
mod normalize;
mod parse;

pub use fetch::fetch_description;
pub use fold::fold_accents;
pub use model::{Category, Classification, TableMetadata, TerritorialLevels, Variable};
pub use normalize::{normalize_html, normalize_text};
pub use parse::parse_metadata;

pub(crate) use fetch::{description_path, description_url};

use crate::{SidraClient, SidraError};

/// Downloads, normalizes and parses the description of table `code` in one go.
///
/// # Errors
///
/// Any fetch error, or `SidraError::Parse` if the page does not match the expected layout.
pub async fn load_metadata(client: &SidraClient, code: u32) -> Result<TableMetadata, SidraError> {
    let html = fetch_description(client, code).await?;
    parse_metadata(code, &normalize_html(&html))
}
