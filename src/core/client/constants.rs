//! Centralized constants for default endpoints and UA.

/// Identifies the crate to the API host.
pub(crate) const USER_AGENT: &str = concat!("sidra-rs/", env!("CARGO_PKG_VERSION"));

/// SIDRA API host. Both the values and the description endpoints live here.
pub(crate) const DEFAULT_BASE_URL: &str = "https://apisidra.ibge.gov.br/";

/// Path prefix of the table description page (the table code is appended).
pub(crate) const DESCRIPTION_PATH: &str = "/desctabapi.aspx?c=";
