//! Detection of answers that already tell the shopper an item is unavailable.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! negative_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// "we don't have", "do not carry", "doesn't stock"
negative_pattern!(
    RE_DONT_HAVE,
    r"(?i)\b(?:don['’]?t|do not|doesn['’]?t|does not)\s+(?:currently\s+|yet\s+)?(?:have|carry|stock|sell|offer)\b"
);

// "not available", "isn't currently available"
negative_pattern!(
    RE_NOT_AVAILABLE,
    r"(?i)\b(?:not|isn['’]?t|aren['’]?t)\s+(?:currently\s+|yet\s+)?available\b"
);

negative_pattern!(RE_OUT_OF_STOCK, r"(?i)\b(?:out\s+of\s+stock|sold\s+out)\b");

// "sorry ... we don't have" with anything in between on the same line
negative_pattern!(
    RE_SORRY_DONT_HAVE,
    r"(?i)\bsorry\b[^\n]*\b(?:don['’]?t|do not|cannot|can['’]?t)\s+(?:currently\s+)?(?:have|find|offer)\b"
);

negative_pattern!(
    RE_NO_LONGER,
    r"(?i)\bno\s+longer\s+(?:available|carry|stock|sell|offer)\b"
);

static PATTERNS: [&LazyLock<Option<Regex>>; 5] = [
    &RE_DONT_HAVE,
    &RE_NOT_AVAILABLE,
    &RE_OUT_OF_STOCK,
    &RE_SORRY_DONT_HAVE,
    &RE_NO_LONGER,
];

/// True if the generated answer says the requested product is not carried.
pub fn is_negative_availability_response(answer_text: &str) -> bool {
    PATTERNS.iter().any(|pattern| {
        pattern
            .as_ref()
            .is_some_and(|regex| regex.is_match(answer_text))
    })
}
