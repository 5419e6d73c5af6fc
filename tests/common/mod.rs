#![allow(dead_code)]

use std::{fs, path::PathBuf};

use httpmock::MockServer;
use sidra_rs::SidraClient;
use url::Url;

pub fn fixtures_dir() -> PathBuf {
    std::env::var("SIDRA_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"))
}

pub fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// `{endpoint}_{key}.{ext}`, the layout written by `SIDRA_RECORD=1`.
pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    read_fixture(&format!("{endpoint}_{key}.{ext}"))
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("SIDRA_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("SIDRA_RECORD").ok().as_deref() == Some("1")
}

pub fn client_for(server: &MockServer) -> SidraClient {
    SidraClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}
