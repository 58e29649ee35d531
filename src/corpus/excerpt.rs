// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text excerpts and reading-time estimates for post bodies.

use crate::types::ReadingTime;
use regex::Regex;
use std::sync::LazyLock;

/// Default excerpt length in chars.
pub const EXCERPT_LENGTH: usize = 160;

/// Average reading speed.
pub const WORDS_PER_MINUTE: f64 = 200.0;

struct Strippers {
    front_matter: Regex,
    images: Regex,
    links: Regex,
    code: Regex,
    formatting: Regex,
    paragraphs: Regex,
    whitespace: Regex,
}

static STRIPPERS: LazyLock<Strippers> = LazyLock::new(|| Strippers {
    front_matter: Regex::new(r"(?s)\A---.*?---").expect("valid regex"),
    images: Regex::new(r"!\[.*?\]\(.*?\)").expect("valid regex"),
    links: Regex::new(r"\[.*?\]\(.*?\)").expect("valid regex"),
    code: Regex::new(r"`{1,3}.*?`{1,3}").expect("valid regex"),
    formatting: Regex::new(r"[#*_~]").expect("valid regex"),
    paragraphs: Regex::new(r"\n\s*\n").expect("valid regex"),
    whitespace: Regex::new(r"\s+").expect("valid regex"),
});

/// Strip markdown syntax and cut to `max_length` chars at a word boundary.
///
/// Links and images are removed outright (text included), as are inline code
/// spans. Cut excerpts end in `...`.
pub fn generate_excerpt(content: &str, max_length: usize) -> String {
    let s = &*STRIPPERS;
    let text = s.front_matter.replace(content, "");
    let text = s.images.replace_all(&text, "");
    let text = s.links.replace_all(&text, "");
    let text = s.code.replace_all(&text, "");
    let text = s.formatting.replace_all(&text, "");
    let text = s.paragraphs.replace_all(&text, " ");
    let text = s.whitespace.replace_all(&text, " ");
    let plain = text.trim();

    if plain.chars().count() <= max_length {
        return plain.to_string();
    }

    let truncated: String = plain.chars().take(max_length).collect();
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}

/// Estimate reading time at [`WORDS_PER_MINUTE`].
pub fn reading_time(content: &str) -> ReadingTime {
    let words = content.split_whitespace().count();
    let minutes = words as f64 / WORDS_PER_MINUTE;
    let displayed = ((minutes * 100.0).round() / 100.0).ceil() as u64;
    ReadingTime {
        text: format!("{} min read", displayed),
        minutes,
        time: (minutes * 60_000.0).round() as u64,
        words,
    }
}
