//! Text normalization for destination and status cells.

/// Title-case a destination.
///
/// Strips the trailing run of hyphens and whitespace, lower-cases the whole
/// string, then upper-cases the first character and every character that
/// follows `-`, `.` or whitespace, provided it is a word character.
///
/// ```
/// use stcp_arrivals::arrivals::normalize_destination;
///
/// assert_eq!(normalize_destination("CAMPANHÃ - ESTAÇÃO   "), "Campanhã - Estação");
/// assert_eq!(normalize_destination("HOSP. S.JOÃO -"), "Hosp. S.João");
/// ```
pub fn normalize_destination(raw: &str) -> String {
    let trimmed = raw.trim_end_matches(|c: char| c == '-' || c.is_whitespace());
    let lowered = trimmed.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut prev: Option<char> = None;
    for c in lowered.chars() {
        let starts_word = prev.is_none_or(is_word_boundary);
        if starts_word && is_word_char(c) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Reduce a status cell to its display form.
///
/// Statuses starting with `a` lose their last two characters. Anything else
/// is split on single spaces and the third token kept, or the empty string
/// when there is none. Not idempotent.
///
/// ```
/// use stcp_arrivals::arrivals::normalize_status;
///
/// assert_eq!(normalize_status("a chegar"), "a cheg");
/// assert_eq!(normalize_status("passou há 3 min"), "3");
/// ```
pub fn normalize_status(raw: &str) -> String {
    if raw.starts_with('a') {
        let keep = raw.chars().count().saturating_sub(2);
        raw.chars().take(keep).collect()
    } else {
        raw.split(' ').nth(2).unwrap_or_default().to_string()
    }
}

fn is_word_boundary(c: char) -> bool {
    c == '-' || c == '.' || c.is_whitespace()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
