use crate::error::ExtractError;

/// Render whole seconds the way a transcript panel shows them:
/// `m:ss` below an hour, `h:mm:ss` from there on.
pub fn format_timestamp(total_seconds: u64) -> String {
    let sec = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let min = total_minutes % 60;
    let hour = total_minutes / 60;

    if hour == 0 {
        format!("{min}:{sec:02}")
    } else {
        format!("{hour}:{min:02}:{sec:02}")
    }
}

/// Parse `m:ss` or `h:m:ss` into whole seconds. Seconds must be exactly two digits.
pub fn parse_timestamp(s: &str) -> Result<u64, ExtractError> {
    let t = s.trim();
    let bad = || ExtractError::InvalidTimeFormat(t.to_string());

    let parts: Vec<&str> = t.split(':').collect();
    let (h, m, sec) = match parts.as_slice() {
        [m, sec] => ("0", *m, *sec),
        [h, m, sec] => (*h, *m, *sec),
        _ => return Err(bad()),
    };

    if sec.len() != 2 {
        return Err(bad());
    }

    let h = parse_digits(h).ok_or_else(bad)?;
    let m = parse_digits(m).ok_or_else(bad)?;
    let sec = parse_digits(sec).ok_or_else(bad)?;

    h.checked_mul(3600)
        .and_then(|v| m.checked_mul(60).and_then(|mm| v.checked_add(mm)))
        .and_then(|v| v.checked_add(sec))
        .ok_or_else(bad)
}

// `u64::from_str` accepts a leading '+', which a timestamp never has.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
