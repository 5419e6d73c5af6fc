//! Description page download.

use url::Url;

use crate::core::client::constants::DESCRIPTION_PATH;
use crate::core::net::get_checked;
use crate::{SidraClient, SidraError};

/// Request path of the description page for `code`.
pub(crate) fn description_path(code: u32) -> String {
    format!("{DESCRIPTION_PATH}{code}")
}

pub(crate) fn description_url(client: &SidraClient, code: u32) -> Result<Url, SidraError> {
    client.endpoint(&description_path(code))
}

/// Downloads the raw HTML description page of table `code`.
///
/// # Errors
///
/// Returns `SidraError::Request` on a non-successful status and `SidraError::Http`
/// on transport failures.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_description(client: &SidraClient, code: u32) -> Result<String, SidraError> {
    let url = description_url(client, code)?;
    get_checked(client, url, "desctabapi", &code.to_string(), "html").await
}
