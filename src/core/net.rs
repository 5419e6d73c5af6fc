#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

use crate::core::{SidraClient, SidraError};

/// Read the response body as text.
/// In `test-mode`, if `SIDRA_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("SIDRA_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("SIDRA_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}

/// Issues a single GET and returns the body of a successful response.
///
/// Any non-2xx status becomes [`SidraError::Request`] carrying the body unchanged.
pub(crate) async fn get_checked(
    client: &SidraClient,
    url: Url,
    endpoint: &str,
    key: &str,
    ext: &str,
) -> Result<String, SidraError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(%url, "GET");

    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SidraError::Request {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        });
    }

    Ok(get_text(resp, endpoint, key, ext).await?)
}
