// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the levtrie CLI.
//!
//! Colors follow OneDark on dark terminals and One Light on light ones. The
//! theme comes from `LEVTRIE_THEME`, then `COLORFGBG`, then defaults to dark.
//! `NO_COLOR` or a non-TTY stdout turns color off entirely.

use levtrie::normalize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Width between the two vertical borders of a box.
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// What a piece of text is, rather than which color it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Match,
    Value,
    Heading,
    Frame,
}

impl Theme {
    /// Pick a theme from the raw `LEVTRIE_THEME` and `COLORFGBG` values.
    pub fn from_vars(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
        match explicit.map(str::to_ascii_lowercase).as_deref() {
            Some("light" | "l") => return Theme::Light,
            Some("dark" | "d") => return Theme::Dark,
            _ => {}
        }

        // "fg;bg" where backgrounds 7 and up (except 8, dark gray) are light
        let background = colorfgbg
            .and_then(|value| value.rsplit(';').next())
            .and_then(|bg| bg.parse::<u8>().ok());
        match background {
            Some(bg) if bg >= 7 && bg != 8 => Theme::Light,
            _ => Theme::Dark,
        }
    }

    fn detect() -> Theme {
        let explicit = std::env::var("LEVTRIE_THEME").ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Theme::from_vars(explicit.as_deref(), colorfgbg.as_deref())
    }

    fn rgb(self, role: Role) -> Rgb {
        match (self, role) {
            (Theme::Dark, Role::Match) => (152, 195, 121),   // #98c379
            (Theme::Dark, Role::Value) => (229, 192, 123),   // #e5c07b
            (Theme::Dark, Role::Heading) => (86, 182, 194),  // #56b6c2
            (Theme::Dark, Role::Frame) => (92, 99, 112),     // #5c6370
            (Theme::Light, Role::Match) => (80, 161, 79),    // #50a14f
            (Theme::Light, Role::Value) => (193, 132, 1),    // #c18401
            (Theme::Light, Role::Heading) => (1, 132, 188),  // #0184bc
            (Theme::Light, Role::Frame) => (160, 161, 167),  // #a0a1a7
        }
    }
}

/// Resolved once per process: `None` means plain text.
fn active_theme() -> Option<Theme> {
    static ACTIVE: OnceLock<Option<Theme>> = OnceLock::new();
    *ACTIVE.get_or_init(|| {
        let colors = std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout);
        colors.then(Theme::detect)
    })
}

/// Wrap `text` in the escape codes for `role`, or return it unchanged when
/// color is off.
pub fn paint(role: Role, bold: bool, text: &str) -> String {
    match active_theme() {
        Some(theme) => {
            let (r, g, b) = theme.rgb(role);
            let weight = if bold { BOLD } else { "" };
            format!("{}\x1b[38;2;{};{};{}m{}{}", weight, r, g, b, text, RESET)
        }
        None => text.to_string(),
    }
}

/// Length as the terminal shows it: ANSI escapes don't count.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| match (in_escape, c) {
            (_, '\x1b') => {
                in_escape = true;
                false
            }
            (true, 'm') => {
                in_escape = false;
                false
            }
            (escaped, _) => !escaped,
        })
        .count()
}

fn top_line(label: &str) -> String {
    let title = format!("─ {} ", paint(Role::Heading, true, label));
    let fill = BOX_WIDTH.saturating_sub(visible_len(&title));
    format!(
        "{}{}{}",
        paint(Role::Frame, false, "┌"),
        title,
        paint(Role::Frame, false, &format!("{}┐", "─".repeat(fill)))
    )
}

fn content_line(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let border = paint(Role::Frame, false, "│");
    format!("{}{}{}{}", border, content, " ".repeat(pad), border)
}

fn bottom_line() -> String {
    paint(Role::Frame, false, &format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

/// `┌─ label ───┐`
pub fn section_top(label: &str) {
    println!("{}", top_line(label));
}

/// `│ content   │`
pub fn row(content: &str) {
    println!("{}", content_line(content));
}

/// `└───────────┘`
pub fn section_bottom() {
    println!("{}", bottom_line());
}

/// A label/value row inside a section.
pub fn stat(label: &str, value: impl std::fmt::Display) {
    row(&format!(" {:<16}{}", label, paint(Role::Value, true, &value.to_string())));
}

/// Split `text` into alternating runs of whitespace and non-whitespace,
/// keeping every character so the runs concatenate back to `text`.
fn runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (idx, c) in text.char_indices() {
        let space = c.is_whitespace();
        if in_space.is_some_and(|prev| prev != space) {
            runs.push(&text[start..idx]);
            start = idx;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }
    runs
}

fn highlight_with(document: &str, matched: &HashSet<String>, mark: impl Fn(&str) -> String) -> String {
    runs(document)
        .into_iter()
        .map(|run| {
            let is_word = !run.starts_with(char::is_whitespace);
            if is_word && matched.contains(normalize(run).as_str()) {
                mark(run)
            } else {
                run.to_string()
            }
        })
        .collect()
}

/// Color the tokens of `document` whose normalized form is a matched word.
/// Tokens are split the way the index splits them, on any whitespace.
pub fn highlight(document: &str, matched: &HashSet<String>) -> String {
    highlight_with(document, matched, |token| paint(Role::Match, true, token))
}
