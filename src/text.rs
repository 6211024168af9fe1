//! Word-aware term matching shared by the classifier, gender inference and
//! the matching strategies.

/// Suffixes accepted after a term so that stems still match their plural
/// or possessive forms ("dress" -> "dresses", "women" -> "women's").
const TERM_SUFFIXES: &[&str] = &["'s", "’s", "es", "s"];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Returns true when `term` occurs in `text` starting on a word boundary and
/// ending on one, optionally followed by a plural/possessive suffix.
///
/// Both inputs are expected to be lowercased already.
pub fn contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    for (start, _) in text.match_indices(term) {
        let starts_on_boundary = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        if !starts_on_boundary {
            continue;
        }

        let rest = &text[start + term.len()..];
        if ends_on_boundary(rest) {
            return true;
        }
        if TERM_SUFFIXES
            .iter()
            .any(|suffix| rest.strip_prefix(suffix).is_some_and(ends_on_boundary))
        {
            return true;
        }
    }

    false
}

fn ends_on_boundary(rest: &str) -> bool {
    rest.chars().next().map_or(true, |c| !is_word_char(c))
}

/// True if any of `terms` matches `text` under [`contains_term`].
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| contains_term(text, term))
}

/// True if any of `terms` occurs anywhere in `text`, inside words included.
///
/// Used on item fields, where garment words are often compounded
/// ("bralette", "minidress", "sportswear").
pub fn contains_any_fragment(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| !term.is_empty() && text.contains(term))
}

/// How a table term is tested against item fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermMatch {
    /// Word-aware, as [`contains_term`].
    Word,
    /// Plain substring.
    Fragment,
}

impl TermMatch {
    pub fn any(self, text: &str, terms: &[&str]) -> bool {
        match self {
            TermMatch::Word => contains_any(text, terms),
            TermMatch::Fragment => contains_any_fragment(text, terms),
        }
    }
}
