use std::{fs, io, path::PathBuf};

fn fixture_dir() -> PathBuf {
    std::env::var("SIDRA_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Writes `{endpoint}_{key}.{ext}` into the fixture directory.
pub(crate) fn record_fixture(endpoint: &str, key: &str, ext: &str, body: &str) -> io::Result<()> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let key = key.replace(['/', '?', '&', '='], "_");
    fs::write(dir.join(format!("{endpoint}_{key}.{ext}")), body)
}
