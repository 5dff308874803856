const MAX_DIGITS: usize = 10;

pub fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Masks up to ten digits as `(XXX) XXX-XXXX`, filling in the punctuation
/// progressively as digits arrive.
pub fn format_phone(value: &str) -> String {
    let d: String = digits(value).chars().take(MAX_DIGITS).collect();
    match d.len() {
        0 => String::new(),
        1..=3 => format!("({d}"),
        4..=6 => format!("({}) {}", &d[..3], &d[3..]),
        _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
    }
}

/// Re-formats `raw` and moves the caret by however much the text grew or
/// shrank. Positions are in characters.
pub fn reformat_with_cursor(raw: &str, cursor: usize) -> (String, usize) {
    let formatted = format_phone(raw);
    let old_len = raw.chars().count() as i64;
    let new_len = formatted.chars().count() as i64;
    let moved = cursor as i64 + (new_len - old_len);
    let cursor = moved.clamp(0, new_len) as usize;
    (formatted, cursor)
}
