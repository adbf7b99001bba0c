// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the sift CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection tries
//! `SIFT_THEME` first, then `COLORFGBG`, then defaults to dark. `NO_COLOR`
//! and non-TTY stdout turn styling off entirely, so piped output is plain.

use sift::{DocId, FieldKey, SearchEngine, SearchResult};
use std::sync::OnceLock;

// Box drawing: width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 78;

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
    if let Ok(theme) = std::env::var("SIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
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

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

#[derive(Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Red,
    Blue,
    Cyan,
    Magenta,
    Gray,
}

impl Color {
    fn rgb(self) -> (u8, u8, u8) {
        match (theme(), self) {
            (Theme::Dark, Color::Green) => (152, 195, 121),
            (Theme::Dark, Color::Yellow) => (229, 192, 123),
            (Theme::Dark, Color::Red) => (224, 108, 117),
            (Theme::Dark, Color::Blue) => (97, 175, 239),
            (Theme::Dark, Color::Cyan) => (86, 182, 194),
            (Theme::Dark, Color::Magenta) => (198, 120, 221),
            (Theme::Dark, Color::Gray) => (92, 99, 112),
            (Theme::Light, Color::Green) => (80, 161, 79),
            (Theme::Light, Color::Yellow) => (193, 132, 1),
            (Theme::Light, Color::Red) => (228, 86, 73),
            (Theme::Light, Color::Blue) => (64, 120, 242),
            (Theme::Light, Color::Cyan) => (1, 132, 188),
            (Theme::Light, Color::Magenta) => (166, 38, 164),
            (Theme::Light, Color::Gray) => (160, 161, 167),
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color with optional modifiers, or nothing off-TTY
pub fn themed(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escapes
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

/// Cut plain text to `max` visible characters, marking the cut with `…`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn border(text: &str) -> String {
    themed(Color::Gray, &[], text)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(Color::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Relevance as a colored percentage: green from 75, yellow from 40
pub fn relevance_colored(relevance: u8) -> String {
    let text = format!("{:>3}%", relevance);
    let color = match relevance {
        75..=100 => Color::Green,
        40..=74 => Color::Yellow,
        _ => Color::Red,
    };
    themed(color, &[BOLD], &text)
}

/// Ten-cell bar, one cell per 10 points of relevance
pub fn relevance_bar(relevance: u8) -> String {
    let filled = (usize::from(relevance) + 5) / 10;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled.min(10)));
    themed(Color::Blue, &[], &bar)
}

fn field_label(key: FieldKey) -> &'static str {
    match key {
        FieldKey::Title => "title",
        FieldKey::Content => "content",
        FieldKey::Tag => "tag",
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_results(
    query: &str,
    category: Option<&str>,
    results: &[SearchResult<'_>],
    explain: Option<&SearchEngine>,
) {
    let label = match category {
        Some(category) => format!("SEARCH \"{}\" in {}", truncate(query, 30), category),
        None => format!("SEARCH \"{}\"", truncate(query, 40)),
    };
    section_top(&label);

    if results.is_empty() {
        row(&themed(Color::Gray, &[DIM], " no matching documents"));
    }

    for (rank, result) in results.iter().enumerate() {
        let doc = result.document;
        let head = format!(
            " {:>2}. {} {} {}",
            rank + 1,
            relevance_colored(result.relevance),
            relevance_bar(result.relevance),
            themed(Color::Cyan, &[BOLD], &truncate(&doc.title, 50)),
        );
        row(&head);
        row(&format!(
            "     {} {}  {}",
            themed(Color::Magenta, &[], &truncate(&doc.category, 20)),
            themed(Color::Gray, &[], &format!("#{}", truncate(&doc.id, 20))),
            themed(Color::Gray, &[DIM], &truncate(&doc.tags.join(", "), 30)),
        ));

        if let Some(engine) = explain {
            if let Some(position) = engine
                .documents()
                .iter()
                .position(|d| std::ptr::eq(d, doc))
            {
                let fields: Vec<String> = engine
                    .fuzzy_index()
                    .matched_fields(query, DocId(position as u32))
                    .into_iter()
                    .map(|(key, score)| format!("{}={:.3}", field_label(key), score))
                    .collect();
                row(&themed(
                    Color::Gray,
                    &[DIM],
                    &format!("     matched: {}", fields.join(" ")),
                ));
            }
        }
    }
    section_bot();
}

pub fn print_suggestions(query: &str, suggestions: &[String]) {
    section_top(&format!("SUGGESTIONS \"{}\"", truncate(query, 40)));
    if suggestions.is_empty() {
        row(&themed(Color::Gray, &[DIM], " no completions"));
    }
    for suggestion in suggestions {
        row(&format!(" {} {}", themed(Color::Gray, &[], "›"), suggestion));
    }
    section_bot();
}

pub fn print_topics(topics: &[(String, usize)]) {
    section_top("RELATED TOPICS");
    if topics.is_empty() {
        row(&themed(Color::Gray, &[DIM], " corpus has no tags"));
    }
    for (tag, count) in topics {
        row(&format!(
            " {} {}",
            themed(Color::Yellow, &[BOLD], &format!("{:>3}×", count)),
            tag
        ));
    }
    section_bot();
}
