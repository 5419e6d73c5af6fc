//! Line grammars of the description page.
//!
//! Each function takes one normalized line and either returns the typed record or
//! a short reason; the state machine attaches state and line to the reason.

use std::sync::LazyLock;

use regex::Regex;

use super::model::{Category, Classification, Variable};

type Reason = &'static str;

static COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d+)\)").unwrap());

/// Byte index of the earliest `needle` in `s` that does not start at the first character.
fn find_after_first_char(s: &str, needles: &[&str]) -> Option<usize> {
    let skip = s.chars().next()?.len_utf8();
    needles
        .iter()
        .filter_map(|n| s[skip..].find(n))
        .min()
        .map(|i| i + skip)
}

/// Splits a leading run of ASCII digits from the rest of the line.
fn split_code(line: &str) -> Option<(&str, &str)> {
    let end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if end == 0 {
        return None;
    }
    Some(line.split_at(end))
}

/// Table line: `/T/ Tabela <code> - <title>`.
///
/// Returns the code token and the title (tokens from the fifth on, single-spaced).
pub(crate) fn table_line(line: &str) -> Result<(&str, String), Reason> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 5 {
        return Err("table line is missing its code or title");
    }
    Ok((tokens[2], tokens[4..].join(" ")))
}

/// `Pesquisa: <text>` / `Assunto: <text>`: the text after the label and colon.
pub(crate) fn labelled_field<'a>(line: &'a str, label: &str) -> &'a str {
    line.strip_prefix(label)
        .unwrap_or(line)
        .trim_start_matches(':')
        .trim()
}

/// Period line: `/P/ <label>(<n>): <p1>, <p2>, ...`.
///
/// The list starts after the first colon; entries are separated by `", "`.
pub(crate) fn periods(line: &str) -> Result<Vec<String>, Reason> {
    let (_, list) = line.split_once(':').ok_or("period line has no colon")?;
    let list = list.strip_prefix(' ').unwrap_or(list);
    if list.is_empty() {
        return Ok(Vec::new());
    }
    Ok(list.split(", ").map(str::to_string).collect())
}

/// Variable dimension line: `/V/ <label>(<n>):`.
///
/// Exactly one parenthesized integer must be present; it is the declared variable count.
pub(crate) fn declared_count(line: &str) -> Result<usize, Reason> {
    let found: Vec<&str> = COUNT
        .captures_iter(line)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    match found.as_slice() {
        [n] => n.parse().map_err(|_| "declared variable count overflows"),
        [] => Err("no declared variable count"),
        _ => Err("more than one parenthesized count"),
    }
}

/// Variable line.
///
/// ```text
/// <code> <name> - casas decimais: ...
/// <code> <name> (<unit/date info>) - casas decimais: ...
/// <code> <name> - <qualifier> (<unit>) - casas decimais: ...
/// ```
///
/// * `code`: the leading integer
/// * `name`: after the code, up to the first `" - "` or `" ("`
/// * `desc`: after the code, up to `" - casas decimais"`
/// * `decimals`: from `casas decimais` to the end of the line
pub(crate) fn variable(line: &str) -> Result<Variable, Reason> {
    let (code, rest) = split_code(line).ok_or("variable line does not start with a code")?;
    let code = code.parse().map_err(|_| "variable code overflows")?;

    let mut chars = rest.chars();
    if !chars.next().is_some_and(char::is_whitespace) {
        return Err("variable code is not followed by a space");
    }
    let rest = chars.as_str();

    let name_end = find_after_first_char(rest, &[" - ", " ("]).ok_or("variable name has no terminator")?;
    let desc_end =
        find_after_first_char(rest, &[" - casas decimais"]).ok_or("variable line has no ' - casas decimais'")?;

    let decimals_start = line.find("casas decimais").ok_or("variable line has no decimals")?;
    let decimals = &line[decimals_start..];
    if decimals.len() == "casas decimais".len() {
        return Err("variable decimals are empty");
    }

    Ok(Variable {
        code,
        name: rest[..name_end].to_string(),
        desc: rest[..desc_end].to_string(),
        decimals: decimals.to_string(),
    })
}

/// Classification header: `/<code>/ <name>(<count>):`.
///
/// * `code`: between the first pair of slashes
/// * `name`: between the closing slash and the parenthesis holding the count, trimmed
/// * `count`: the integer in the parenthesis right before the trailing colon
pub(crate) fn option_header(line: &str) -> Result<Classification, Reason> {
    let body = line.strip_prefix('/').ok_or("option header does not start with '/'")?;
    let slash = body.find('/').ok_or("option header has no closing '/'")?;
    let code = &body[..slash];
    if code.is_empty() {
        return Err("option header has an empty code");
    }
    let after_code = &body[slash + 1..];

    let close = after_code.rfind("):").ok_or("option header has no '(<count>):'")?;
    let open = after_code[..close].rfind('(').ok_or("option header has no '(<count>):'")?;
    let count = after_code[open + 1..close]
        .parse()
        .map_err(|_| "option count is not an integer")?;

    let name = after_code[..open].trim();
    if name.is_empty() {
        return Err("option header has an empty name");
    }

    Ok(Classification {
        code: code.to_string(),
        name: name.to_string(),
        count,
        values: Vec::new(),
    })
}

/// Category row: `<code> <name>`; the name may be empty.
pub(crate) fn category(line: &str) -> Result<Category, Reason> {
    let (code, name) = line.split_once(' ').unwrap_or((line, ""));
    let code = code.parse().map_err(|_| "category code is not an integer")?;
    Ok(Category {
        code,
        name: name.to_string(),
    })
}

/// Territorial level code line: `/N6/` becomes `N6`.
pub(crate) fn level_code(line: &str) -> Result<String, Reason> {
    let code = line.replace('/', "");
    let code = code.trim();
    if code.is_empty() {
        return Err("territorial level code is empty");
    }
    Ok(code.to_string())
}

/// Territorial level name line; the trailing link caption is dropped.
pub(crate) fn level_name(line: &str) -> String {
    line.replace(" Listar unidades territoriais", "")
}
