//! Canonical description/hour extraction from raw lines.
//!
//! Lines look like `DATE TIME MARKER message...`. Tokens are whitespace-delimited.
//! Both extractors return `None` for lines too short or malformed; callers map
//! that to the unknown sentinel.

/// Everything after the first `offset` tokens, re-joined with single spaces.
///
/// With the default offset of 3 this is the message after date, time and marker:
/// `"2024-08-10 10:01:00 ERROR Database connection failed"` -> `"Database connection failed"`.
pub fn description(line: &str, offset: usize) -> Option<String> {
  let rest: Vec<&str> = line.split_whitespace().skip(offset).collect();
  if rest.is_empty() {
    return None;
  }
  Some(rest.join(" "))
}

/// Hour of day from the token at `index`, truncated before the first `:`.
///
/// The hour part must be one or two ASCII digits in `0..24`; it is zero-padded
/// to two digits so labels sort chronologically.
pub fn hour(line: &str, index: usize) -> Option<String> {
  let token = line.split_whitespace().nth(index)?;
  let (hh, _) = token.split_once(':')?;
  if hh.is_empty() || hh.len() > 2 || !hh.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  let value: u8 = hh.parse().ok()?;
  if value >= 24 {
    return None;
  }
  Some(format!("{:02}", value))
}
