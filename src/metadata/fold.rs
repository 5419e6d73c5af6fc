use std::borrow::Cow;

/// Maps a Portuguese diacritic variant to its base Latin letter.
fn fold_char(c: char) -> Option<char> {
    let base = match c {
        'á' | 'à' | 'ã' | 'â' => 'a',
        'é' | 'ê' => 'e',
        'í' | 'ï' => 'i',
        'ó' | 'õ' | 'ô' | 'ö' => 'o',
        'ú' => 'u',
        'ç' => 'c',
        'Á' | 'À' | 'Ã' | 'Â' => 'A',
        'É' | 'Ê' => 'E',
        'Í' | 'Ï' => 'I',
        'Ó' | 'Õ' | 'Ô' | 'Ö' => 'O',
        'Ú' => 'U',
        'Ç' => 'C',
        _ => return None,
    };
    Some(base)
}

/// Replaces every mapped diacritic with its base letter; everything else passes through.
///
/// Borrows when there is nothing to fold.
pub fn fold_accents(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| fold_char(c).is_some()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(|c| fold_char(c).unwrap_or(c)).collect())
}
