//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use std::sync::OnceLock;

use regex::Regex;

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape text for Telegram HTML parse mode
pub fn escape_html(text: &str) -> String {
    teloxide::utils::html::escape(text)
}

/// Escape text for HTML parse mode, keeping the escaped form within `max_chars`
///
/// When the text has to be cut, whole characters or entities are dropped from
/// the end and an ellipsis is appended, so no entity is ever split.
pub fn escape_html_truncated(text: &str, max_chars: usize) -> String {
    let escaped = escape_html(text);
    if escaped.chars().count() <= max_chars {
        return escaped;
    }

    let budget = max_chars.saturating_sub(1);
    let mut out = String::with_capacity(budget);
    let mut used = 0;
    for ch in text.chars() {
        let entity = match ch {
            '<' => Some("&lt;"),
            '>' => Some("&gt;"),
            '&' => Some("&amp;"),
            _ => None,
        };
        let width = entity.map_or(1, str::len);
        if used + width > budget {
            break;
        }
        match entity {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
        used += width;
    }
    out.push('…');
    out
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"[^\p{L}\p{N}\s]+").expect("static regex"))
}

/// Lowercase, strip punctuation and collapse whitespace
pub fn normalize_answer(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = punctuation().replace_all(&lowered, " ");
    normalize_whitespace(&stripped)
}
