//! `{{KEY}}` template tokens inside component data.
//!
//! Replacement is a single left-to-right pass: substituted values are never
//! scanned again and there is no escaping. A `{{` without a matching `}}` and
//! the empty token `{{}}` are plain text.

use std::collections::HashMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Distinct keys referenced in `text`, in order of first occurrence.
pub fn template_tokens(text: &str) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for (_, key) in tokens(text) {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

/// Result of a substitution pass.
pub(crate) struct Substituted {
    pub text: String,
    /// Keys without a binding, deduplicated, in first-occurrence order.
    pub unresolved: Vec<String>,
}

pub(crate) fn substitute_tokens(text: &str, bindings: &HashMap<String, String>) -> Substituted {
    let mut out = String::with_capacity(text.len());
    let mut unresolved: Vec<String> = Vec::new();
    let mut copied = 0;

    for (range, key) in tokens(text) {
        match bindings.get(key) {
            Some(value) => {
                out.push_str(&text[copied..range.start]);
                out.push_str(value);
                copied = range.end;
            }
            None => {
                if !unresolved.iter().any(|k| k == key) {
                    unresolved.push(key.to_string());
                }
            }
        }
    }
    out.push_str(&text[copied..]);
    Substituted { text: out, unresolved }
}

/// Yields the byte range of every `{{KEY}}` token along with its key.
///
/// A token is the closest `{{` before a `}}`, so a stray `{{` earlier in the
/// text (or an extra brace as in `{{{KEY}}}`) never swallows a real token.
fn tokens(text: &str) -> impl Iterator<Item = (std::ops::Range<usize>, &str)> {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        loop {
            let first_open = cursor + text[cursor..].find(OPEN)?;
            let close = first_open + OPEN.len() + text[first_open + OPEN.len()..].find(CLOSE)?;
            let start = text[first_open..close]
                .rfind(OPEN)
                .map_or(first_open, |i| first_open + i);
            let key = &text[start + OPEN.len()..close];
            let end = close + CLOSE.len();
            cursor = end;
            if key.is_empty() {
                continue;
            }
            return Some((start..end, key));
        }
    })
}
