//! State machine turning the normalized description text into [`TableMetadata`].
//!
//! Lines are classified by prefix, then [`transition`] maps `(state, kind)` to the
//! next state and the action to run. A missing entry is a fatal error: the page
//! format is undocumented, so an unknown line stops the parse instead of being skipped.

use std::collections::HashSet;

use super::fold::fold_accents;
use super::grammar;
use super::model::{Classification, TableMetadata, TerritorialLevels, Variable};
use crate::SidraError;

/// Marker the page adds to the title of discontinued series.
const DISCONTINUED: &str = "(serie encerrada)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Initial,
    Header,
    Vdims,
    Options,
    Territory,
    Done,
}

impl State {
    pub(crate) fn name(self) -> &'static str {
        match self {
            State::Initial => "initial",
            State::Header => "header",
            State::Vdims => "vdims",
            State::Options => "options",
            State::Territory => "territory",
            State::Done => "done",
        }
    }
}

/// Prefix class of a non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// `/T/ `
    Table,
    /// `/P/`
    Periods,
    /// `/V/`
    VarDims,
    /// any other `/`-led line
    Slash,
    Research,
    Subject,
    /// `Niveis`
    Levels,
    /// `Nota:`
    Note,
    Digit,
    /// `[`, a validity range continuing the previous category
    Bracket,
    Text,
}

impl LineKind {
    pub(crate) fn classify(line: &str) -> Self {
        if line.starts_with("/T/ ") {
            LineKind::Table
        } else if line.starts_with("/P/") {
            LineKind::Periods
        } else if line.starts_with("/V/") {
            LineKind::VarDims
        } else if line.starts_with('/') {
            LineKind::Slash
        } else if line.starts_with("Pesquisa") {
            LineKind::Research
        } else if line.starts_with("Assunto") {
            LineKind::Subject
        } else if line.starts_with("Niveis") {
            LineKind::Levels
        } else if line.starts_with("Nota:") {
            LineKind::Note
        } else if line.starts_with(|c: char| c.is_ascii_digit()) {
            LineKind::Digit
        } else if line.starts_with('[') {
            LineKind::Bracket
        } else {
            LineKind::Text
        }
    }

    fn is_slash(self) -> bool {
        matches!(
            self,
            LineKind::Table | LineKind::Periods | LineKind::VarDims | LineKind::Slash
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Title,
    Research,
    Subject,
    Dates,
    DeclareVars,
    AddVariable,
    AddOption,
    AddCategory,
    ExtendCategory,
    Noise,
    BeginTerritory,
    AddLevel,
    Stop,
}

/// The transition table. `None` means the line is illegal in `state`.
pub(crate) fn transition(state: State, kind: LineKind) -> Option<(State, Action)> {
    use LineKind as K;
    use State as S;

    let next = match (state, kind) {
        (S::Initial, K::Table) => (S::Header, Action::Title),

        (S::Header, K::Research) => (S::Header, Action::Research),
        (S::Header, K::Subject) => (S::Header, Action::Subject),
        (S::Header, K::Periods) => (S::Header, Action::Dates),
        (S::Header, K::VarDims) => (S::Vdims, Action::DeclareVars),

        (S::Vdims, k) if !k.is_slash() => (S::Vdims, Action::AddVariable),
        (S::Vdims | S::Options, k) if k.is_slash() => (S::Options, Action::AddOption),

        (S::Options, K::Levels) => (S::Territory, Action::BeginTerritory),
        (S::Options, K::Digit) => (S::Options, Action::AddCategory),
        (S::Options, K::Bracket) => (S::Options, Action::ExtendCategory),
        (S::Options, _) => (S::Options, Action::Noise),

        (S::Territory, k) if k.is_slash() => (S::Territory, Action::AddLevel),
        (S::Territory, K::Note) => (S::Done, Action::Stop),

        _ => return None,
    };
    Some(next)
}

/// Fields collected while walking the lines.
struct Collector<'a> {
    code: &'a str,
    title: Option<String>,
    research: String,
    subject: String,
    dates: Vec<String>,
    declared: Option<(usize, String)>,
    vars: Vec<Variable>,
    options: Vec<Classification>,
    territory: TerritorialLevels,
}

impl<'a> Collector<'a> {
    fn new(code: &'a str) -> Self {
        Self {
            code,
            title: None,
            research: String::new(),
            subject: String::new(),
            dates: Vec::new(),
            declared: None,
            vars: Vec::new(),
            options: Vec::new(),
            territory: TerritorialLevels::default(),
        }
    }

    /// Runs `action` for `line`. `next` is the line after it, consumed by `AddLevel`.
    ///
    /// Returns whether `next` was consumed.
    fn apply(
        &mut self,
        state: State,
        action: Action,
        line: &str,
        next: Option<&str>,
    ) -> Result<bool, SidraError> {
        let fail = |reason: &str| SidraError::parse(state.name(), line, reason);

        match action {
            Action::Title => {
                let (code, title) = grammar::table_line(line).map_err(fail)?;
                if code != self.code {
                    return Err(fail(&format!(
                        "page describes table {code}, expected {}",
                        self.code
                    )));
                }
                self.title = Some(title);
            }
            Action::Research => self.research = grammar::labelled_field(line, "Pesquisa").to_string(),
            Action::Subject => self.subject = grammar::labelled_field(line, "Assunto").to_string(),
            Action::Dates => self.dates = grammar::periods(line).map_err(fail)?,
            Action::DeclareVars => {
                let n = grammar::declared_count(line).map_err(fail)?;
                self.declared = Some((n, line.to_string()));
            }
            Action::AddVariable => self.vars.push(grammar::variable(line).map_err(fail)?),
            Action::AddOption => self.options.push(grammar::option_header(line).map_err(fail)?),
            Action::AddCategory => {
                let category = grammar::category(line).map_err(fail)?;
                self.options
                    .last_mut()
                    .ok_or_else(|| fail("category row outside of a classification"))?
                    .values
                    .push(category);
            }
            Action::ExtendCategory => {
                let last = self
                    .options
                    .last_mut()
                    .and_then(|o| o.values.last_mut())
                    .ok_or_else(|| fail("continuation line without a preceding category"))?;
                last.name.push(' ');
                last.name.push_str(line);
            }
            Action::Noise | Action::BeginTerritory | Action::Stop => {}
            Action::AddLevel => {
                let code = grammar::level_code(line).map_err(fail)?;
                let name = match next {
                    Some(n) if !n.starts_with('/') && !n.starts_with("Nota:") => n,
                    _ => return Err(fail("territorial level has no name line")),
                };
                if !self.territory.insert(code, grammar::level_name(name)) {
                    return Err(fail("duplicate territorial level code"));
                }
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn finish(self, state: State) -> Result<TableMetadata, SidraError> {
        let title = self
            .title
            .ok_or_else(|| SidraError::parse(state.name(), "", "no table line found"))?;
        let (declared, declared_line) = self.declared.ok_or_else(|| {
            SidraError::parse(state.name(), "", "no variable dimension line found")
        })?;

        if self.vars.len() != declared {
            return Err(SidraError::parse(
                state.name(),
                &declared_line,
                format!(
                    "declared {declared} variables but parsed {}",
                    self.vars.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.vars.iter().find(|v| !seen.insert(v.code)) {
            return Err(SidraError::parse(
                state.name(),
                &dup.code.to_string(),
                "duplicate variable code",
            ));
        }

        if let Some(o) = self.options.iter().find(|o| o.values.len() != o.count) {
            return Err(SidraError::parse(
                state.name(),
                &o.code,
                format!(
                    "classification declares {} values but lists {}",
                    o.count,
                    o.values.len()
                ),
            ));
        }

        Ok(TableMetadata {
            active: !title.contains(DISCONTINUED),
            title,
            research: self.research,
            subject: self.subject,
            dates: self.dates,
            vars: self.vars,
            options: self.options,
            territory: self.territory,
        })
    }
}

/// Parses normalized description text for table `code`.
///
/// Accent folding is applied here, before classification.
///
/// # Errors
///
/// Returns `SidraError::Parse` on the first line that has no transition from the
/// current state, on any grammar failure, and when the collected record breaks
/// one of its invariants (variable count, unique variable codes, category counts).
#[cfg_attr(feature = "tracing", tracing::instrument(skip(text), err))]
pub fn parse_metadata(code: u32, text: &str) -> Result<TableMetadata, SidraError> {
    let folded = fold_accents(text);
    let lines: Vec<&str> = folded.split('\n').collect();
    let code = code.to_string();
    let mut collector = Collector::new(&code);
    let mut state = State::Initial;

    let mut n = 0;
    while n < lines.len() {
        let line = lines[n];
        n += 1;
        if line.trim().is_empty() {
            continue;
        }

        let kind = LineKind::classify(line);
        let (next_state, action) = transition(state, kind).ok_or_else(|| {
            SidraError::parse(state.name(), line, format!("no transition for {kind:?} line"))
        })?;

        if collector.apply(state, action, line, lines.get(n).copied())? {
            n += 1;
        }

        #[cfg(feature = "tracing")]
        {
            if next_state != state {
                tracing::debug!(from = state.name(), to = next_state.name(), line, "metadata state change");
            }
        }

        state = next_state;
        if state == State::Done {
            break;
        }
    }

    collector.finish(state)
}
