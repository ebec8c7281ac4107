//! Shared utility functions used across multiple modules.

/// Today's local date as `DD/MM/YYYY`.
pub fn today_stamp() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

/// Parse the leading integer of a query value.
///
/// Mirrors lenient form parsing: surrounding whitespace is ignored and
/// trailing garbage after the digits is dropped (`"3abc"` is 3). Returns
/// `None` for missing, non-numeric, zero or negative input so callers can
/// fall back to a default.
pub fn parse_positive_int(raw: Option<&str>) -> Option<usize> {
    let trimmed = raw?.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }

    // Overflowing values saturate rather than being rejected.
    let value = digits.parse::<usize>().unwrap_or(usize::MAX);
    (value > 0).then_some(value)
}
