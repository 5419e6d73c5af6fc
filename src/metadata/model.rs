use serde::{Serialize, Serializer};

/// A measured quantity published by a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub code: u64,
    /// Short name, without unit or qualifiers.
    pub name: String,
    /// Full description, including unit and validity range when present.
    pub desc: String,
    /// Decimal precision convention, verbatim (`casas decimais: padrao = 0, maximo = 0`).
    pub decimals: String,
}

/// One valid value of a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub code: u64,
    /// Name, with any validity range (`[2005 a 2018]`) appended.
    pub name: String,
}

/// A classificatory dimension (e.g. `C81`, product type) and its ordered values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub code: String,
    pub name: String,
    /// Number of values announced by the page; equals `values.len()` once parsed.
    pub count: usize,
    pub values: Vec<Category>,
}

impl Classification {
    /// Looks up a value by its code.
    pub fn category(&self, code: u64) -> Option<&Category> {
        self.values.iter().find(|c| c.code == code)
    }
}

/// Structured description of a table, parsed from its description page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableMetadata {
    /// `false` for discontinued series.
    pub active: bool,
    pub title: String,
    pub research: String,
    pub subject: String,
    /// Period labels in page order.
    pub dates: Vec<String>,
    pub vars: Vec<Variable>,
    pub options: Vec<Classification>,
    /// Territorial level code (`N1`, `N6`, ...) to its descriptive name.
    pub territory: TerritorialLevels,
}

impl TableMetadata {
    /// The most recent period available.
    pub fn last_date(&self) -> Option<&str> {
        self.dates.last().map(String::as_str)
    }

    pub fn variable(&self, code: u64) -> Option<&Variable> {
        self.vars.iter().find(|v| v.code == code)
    }

    pub fn classification(&self, code: &str) -> Option<&Classification> {
        self.options.iter().find(|o| o.code == code)
    }

    pub fn territorial_level(&self, code: &str) -> Option<&str> {
        self.territory.get(code)
    }
}

/// Territorial levels in page order, keyed by unique level code.
///
/// Serializes as a JSON object whose keys keep page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerritorialLevels(Vec<(String, String)>);

impl TerritorialLevels {
    /// Appends a level. Returns `false`, leaving the levels untouched, if `code` is
    /// already present.
    pub(crate) fn insert(&mut self, code: String, name: String) -> bool {
        if self.get(&code).is_some() {
            return false;
        }
        self.0.push((code, name));
        true
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Level codes in page order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }
}

impl<'a> IntoIterator for &'a TerritorialLevels {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for TerritorialLevels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
