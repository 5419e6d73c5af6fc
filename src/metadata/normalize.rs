//! Flattens the description page into a newline-separated plain text block.

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Where the description block starts; everything before it is page chrome.
const BLOCK_MARKER: &str = "/T/";

/// Concatenates every text node of `html` in document order, dropping all markup.
pub(crate) fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    doc.root_element().text().collect()
}

/// Applies the normalization passes, in order, to already extracted text.
///
/// 1. strip `<!-- ... -->` comments (they may span lines)
/// 2. drop everything before the first `/T/`
/// 3. `\r` becomes `\n`
/// 4. NBSP and tab become a space
/// 5. runs of newlines collapse to one
/// 6. runs of two or more whitespace characters (newlines included) collapse to one space
pub fn normalize_text(text: &str) -> String {
    let text = COMMENT.replace_all(text, "");
    let text = match text.find(BLOCK_MARKER) {
        Some(start) => &text[start..],
        None => &text[..],
    };
    let text = text.replace('\r', "\n").replace(['\u{a0}', '\t'], " ");
    let text = NEWLINES.replace_all(&text, "\n");
    SPACES.replace_all(&text, " ").into_owned()
}

/// HTML in, normalized description text out.
pub fn normalize_html(html: &str) -> String {
    normalize_text(&extract_text(html))
}
