//! Spanish title collation.
//!
//! Titles compare at primary strength: case and accents are ignored, `ñ` sorts
//! as its own letter right after `n`. Strings equal at primary strength fall
//! back to plain string order so the comparison stays total.
//!
//! Search is stricter than ordering: it ignores case only, so an accented
//! title is found only by a query with the same accents.

use std::cmp::Ordering;

/// Collation weight of a single character.
///
/// The second component only distinguishes `ñ` from `n`.
fn weight(c: char) -> (char, u8) {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'Á' | 'À' | 'Â' | 'Ä' => ('a', 0),
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => ('e', 0),
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => ('i', 0),
        'ó' | 'ò' | 'ô' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Ö' => ('o', 0),
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => ('u', 0),
        'ñ' | 'Ñ' => ('n', 1),
        'ç' | 'Ç' => ('c', 0),
        other => (other.to_lowercase().next().unwrap_or(other), 0),
    }
}

/// Compares two strings with Spanish primary-strength collation.
///
/// # Examples
///
/// ```
/// use pau::listing::collation::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("Álgebra", "Bases de Datos"), Ordering::Less);
/// assert_eq!(compare("nube", "ñandú"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(weight)
        .cmp(b.chars().map(weight))
        .then_with(|| a.cmp(b))
}

/// Case- and accent-insensitive form used by the department picker.
#[must_use]
pub fn fold(text: &str) -> String {
    text.chars()
        .map(|c| match weight(c) {
            ('n', 1) => 'ñ',
            (base, _) => base,
        })
        .collect()
}

/// Lowercase form used for substring search. Accents are kept.
///
/// Each character maps to exactly one character, so character positions in the
/// result are positions in `text`.
///
/// # Examples
///
/// ```
/// use pau::listing::collation::lowercase;
///
/// assert_eq!(lowercase("Álgebra LINEAL"), "álgebra lineal");
/// ```
#[must_use]
pub fn lowercase(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Whether `haystack` contains `needle`, ignoring case but not accents.
#[must_use]
pub fn contains(haystack: &str, needle: &str) -> bool {
    lowercase(haystack).contains(&lowercase(needle))
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// `needle` in `haystack`.
#[must_use]
pub fn match_range(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let lowered = lowercase(haystack);
    let byte_start = lowered.find(&lowercase(needle))?;
    let start = lowered[..byte_start].chars().count();
    Some((start, start + needle.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_fold_to_base_letter() {
        let mut titles = vec!["Bases de Datos", "Álgebra", "Economía I", "análisis"];
        titles.sort_by(|a, b| compare(a, b));
        assert_eq!(titles, vec!["Álgebra", "análisis", "Bases de Datos", "Economía I"]);
    }

    #[test]
    fn equal_at_primary_strength_still_total() {
        assert_ne!(compare("Algebra", "Álgebra"), Ordering::Equal);
        assert_eq!(compare("Redes", "Redes"), Ordering::Equal);
    }

    #[test]
    fn fold_lowercases_and_strips_accents() {
        assert_eq!(fold("Informática"), "informatica");
        assert_eq!(fold("AÑO"), "año");
    }

    #[test]
    fn match_range_counts_characters() {
        assert_eq!(match_range("Física General I", "general"), Some((7, 14)));
        assert_eq!(match_range("Química", "mica"), Some((3, 7)));
        assert_eq!(match_range("Química", "xyz"), None);
        assert_eq!(match_range("Química", ""), None);
    }

    #[test]
    fn search_ignores_case_but_not_accents() {
        assert!(contains("Álgebra Lineal", "ÁLGEBRA"));
        assert!(!contains("Álgebra Lineal", "algebra"));
        assert!(!contains("Matemática", "matematica"));
        assert_eq!(match_range("Álgebra Lineal", "algebra"), None);
        assert_eq!(match_range("Álgebra Lineal", "lineal"), Some((8, 14)));
    }
}
