//! String helpers shared by both catalog loaders and the matcher.

const TRIM_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Strips spaces, tabs, newlines and carriage returns from both ends.
///
/// A string made only of those characters is returned as-is rather than
/// emptied, so callers can still tell a blank line from a whitespace one.
pub fn trim(s: &str) -> &str {
    let trimmed = s.trim_matches(&TRIM_CHARS[..]);
    if trimmed.is_empty() {
        s
    } else {
        trimmed
    }
}

/// ASCII-only lowercase copy, no locale handling.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Reads the integer at the start of `s`: optional leading whitespace, an
/// optional sign, then digits. Whatever follows the digits is ignored, so
/// `"5000.50"` is 5000 and `"2abc"` is 2. `None` when there are no leading
/// digits or the value does not fit in an `i64`.
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);

    let digits = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }

    // 符號與數字一起解析，i64::MIN 才不會溢位
    let end = s.len() - unsigned.len() + digits;
    s[..end].parse().ok()
}
