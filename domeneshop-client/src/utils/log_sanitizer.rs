//! Keeps response bodies and credentials out of logs in full.

use std::borrow::Cow;

/// Bodies longer than this are cut in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Keeps at most `TRUNCATE_LIMIT` bytes of `s` and notes how many were dropped.
///
/// The cut lands on the last character that starts within the limit, so a
/// multi-byte character is never split.
pub fn truncate_for_log(s: &str) -> Cow<'_, str> {
    if s.len() <= TRUNCATE_LIMIT {
        return Cow::Borrowed(s);
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    Cow::Owned(format!("{}... [{} more bytes]", &s[..cut], s.len() - cut))
}

/// Shows the first four characters of a token and masks the rest.
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if visible.len() == token.len() {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}
