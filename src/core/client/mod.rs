//! Public client surface + builder.
//! Default endpoints and UA live in `constants`.

pub(crate) mod constants;

use crate::core::SidraError;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and the API base URL.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct SidraClient {
    http: Client,
    base_url: Url,
}

impl Default for SidraClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl SidraClient {
    /// Create a new builder.
    pub fn builder() -> SidraClientBuilder {
        SidraClientBuilder::default()
    }

    /// The base URL every request path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Joins an absolute request path (which may carry a query string) onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, SidraError> {
        Ok(self.base_url.join(path)?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct SidraClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SidraClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API host (e.g., `https://apisidra.ibge.gov.br/`). Mostly useful for tests.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<SidraClient, SidraError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(SidraClient { http, base_url })
    }
}
