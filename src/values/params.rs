use url::Url;

use crate::core::SidraError;

/// Parameters of a `/values` query.
///
/// Every field is passed through verbatim; the API owns the syntax of each
/// segment (e.g. `all`, `last 5`, `2688,2689`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuesQuery {
    pub table: String,
    pub territorial_level: String,
    pub territorial_units: String,
    pub variable: Option<String>,
    pub classification: Option<String>,
    pub categories: Option<String>,
    pub period: Option<String>,
    pub header: Option<String>,
}

impl ValuesQuery {
    /// Creates a query with the three mandatory segments.
    pub fn new(
        table: impl ToString,
        territorial_level: impl Into<String>,
        territorial_units: impl Into<String>,
    ) -> Self {
        Self {
            table: table.to_string(),
            territorial_level: territorial_level.into(),
            territorial_units: territorial_units.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn variable(mut self, v: impl Into<String>) -> Self {
        self.variable = Some(v.into());
        self
    }

    /// Classification code without the leading `c` (e.g. `81`).
    #[must_use]
    pub fn classification(mut self, c: impl Into<String>) -> Self {
        self.classification = Some(c.into());
        self
    }

    #[must_use]
    pub fn categories(mut self, c: impl Into<String>) -> Self {
        self.categories = Some(c.into());
        self
    }

    #[must_use]
    pub fn period(mut self, p: impl Into<String>) -> Self {
        self.period = Some(p.into());
        self
    }

    /// Value of the `/h/` segment (`y` or `n`).
    #[must_use]
    pub fn header(mut self, h: impl Into<String>) -> Self {
        self.header = Some(h.into());
        self
    }

    /// Builds the request path.
    ///
    /// Layout: `/values/t/{table}/n{level}/{units}[/h/{header}][/p/{period}][/v/{variable}][/c{classification}][/{categories}]`.
    /// Empty or absent optionals leave no segment behind.
    pub fn path(&self) -> String {
        let mut path = format!(
            "/values/t/{}/n{}/{}",
            self.table, self.territorial_level, self.territorial_units
        );

        if let Some(h) = non_empty(&self.header) {
            path.push_str("/h/");
            path.push_str(h);
        }
        if let Some(p) = non_empty(&self.period) {
            path.push_str("/p/");
            path.push_str(p);
        }
        if let Some(v) = non_empty(&self.variable) {
            path.push_str("/v/");
            path.push_str(v);
        }
        if let Some(c) = non_empty(&self.classification) {
            path.push_str("/c");
            path.push_str(c);
        }
        if let Some(c) = non_empty(&self.categories) {
            path.push('/');
            path.push_str(c);
        }

        path
    }

    /// Joins [`path`](Self::path) onto `base`.
    ///
    /// # Errors
    ///
    /// Returns `SidraError::Url` if the joined URL is not valid.
    pub fn url(&self, base: &Url) -> Result<Url, SidraError> {
        Ok(base.join(&self.path())?)
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// Builds the full query URL for `query` against `base`.
///
/// # Errors
///
/// Returns `SidraError::Url` if the joined URL is not valid.
pub fn get_url(base: &Url, query: &ValuesQuery) -> Result<Url, SidraError> {
    query.url(base)
}
