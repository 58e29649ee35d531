// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `FOLIO_THEME` if set, then `COLORFGBG`, and defaults to dark. Color is off
//! when `NO_COLOR` is set or stdout isn't a TTY, so piped output stays plain.

use folio::{Field, MatchSpan};
use std::sync::OnceLock;

/// Width between the box borders.
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors on stdout, unless `NO_COLOR` is set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Colors on stderr, unless `NO_COLOR` is set.
pub fn use_colors_stderr() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` chars, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// [`truncate`] a matched value and clip its spans to the chars still shown.
///
/// Spans past the cut are dropped, and one straddling it ends at the last
/// visible char, so the `…` is never highlighted.
pub fn truncate_with_spans(
    value: &str,
    spans: &[MatchSpan],
    max: usize,
) -> (String, Vec<MatchSpan>) {
    let text = truncate(value, max);
    let shown = if text == value {
        value.chars().count()
    } else {
        max.saturating_sub(1)
    };
    let clipped = spans
        .iter()
        .filter(|s| s.start < shown)
        .map(|s| MatchSpan::new(s.start, s.end.min(shown - 1)))
        .collect();
    (text, clipped)
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// `error: <message>` on stderr, red when stderr is a terminal.
pub fn print_error(message: &str) {
    if use_colors_stderr() {
        eprintln!("{}{}error:{} {}", BOLD, RED(), RESET, message);
    } else {
        eprintln!("error: {}", message);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    println!(
        "{}│{}{}{}│{}",
        border,
        reset,
        pad_right(content, BOX_WIDTH),
        border,
        reset
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Wrap each matched span of `value` in bold underline.
///
/// Spans are inclusive char ranges. Out-of-range spans are clipped.
pub fn highlight(value: &str, spans: &[MatchSpan]) -> String {
    if spans.is_empty() || !use_colors() {
        return value.to_string();
    }
    highlight_with(value, spans, &format!("{}{}{}", BOLD, UNDERLINE, YELLOW()), RESET)
}

fn highlight_with(value: &str, spans: &[MatchSpan], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(value.len() + spans.len() * (open.len() + close.len()));
    let mut spans = spans.iter().peekable();
    let mut inside = false;

    for (i, c) in value.chars().enumerate() {
        if !inside && spans.peek().is_some_and(|s| s.start == i) {
            out.push_str(open);
            inside = true;
        }
        out.push(c);
        if inside && spans.peek().is_some_and(|s| s.end == i) {
            out.push_str(close);
            inside = false;
            spans.next();
        }
    }
    if inside {
        out.push_str(close);
    }
    out
}

/// Score with color: green near 0 (better), gray toward 1.
pub fn score_value(score: f64) -> String {
    let text = format!("{:.4}", score);
    if !use_colors() {
        return text;
    }
    let color = if score < 0.01 {
        BRIGHT_GREEN()
    } else if score < 0.1 {
        GREEN()
    } else if score < 0.5 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Color-coded field label
pub fn field_label(field: Field) -> String {
    if !use_colors() {
        return field.to_string();
    }
    let color = match field {
        Field::Title => BRIGHT_GREEN(),
        Field::Description => CYAN(),
        Field::Tags | Field::Categories => BLUE(),
        Field::Body | Field::Author => GRAY(),
    };
    format!("{}{}{}", color, field, RESET)
}
