//! Log sanitization utilities
//!
//! Bearer tokens and large response bodies (whole catalogs, embedded
//! avatars) must never land in a log file in full.

/// Byte budget for a logged body.
const TRUNCATE_LIMIT: usize = 256;

/// Leading characters of a token kept for correlating log lines.
const TOKEN_VISIBLE_PREFIX: usize = 6;

/// Longest prefix of `s` that fits in `max_bytes` without splitting a char.
fn prefix_within(s: &str, max_bytes: usize) -> &str {
    let end = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= max_bytes)
        .last()
        .unwrap_or(0);
    &s[..end]
}

/// Shorten a response body for logging, noting the original size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        prefix_within(s, TRUNCATE_LIMIT),
        s.len()
    )
}

/// Hide a bearer token behind its first few characters.
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= TOKEN_VISIBLE_PREFIX * 2 {
        return "***".to_string();
    }
    let visible: String = token.chars().take(TOKEN_VISIBLE_PREFIX).collect();
    format!("{visible}***")
}
