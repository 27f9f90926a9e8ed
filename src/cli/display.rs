// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the pingmap CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `PINGMAP_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and drops all styling when stdout is not a TTY, so piping into
//! `jq` or a file gives clean text.

use std::env;
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEMES
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// What a piece of output means, independent of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Substring hits, low latency
    Good,
    /// Fuzzy hits, usable latency
    Fair,
    /// High latency
    Poor,
    /// Section titles
    Heading,
    /// Borders and footnotes
    Muted,
}

type Rgb = (u8, u8, u8);

struct Palette {
    good: Rgb,
    fair: Rgb,
    poor: Rgb,
    heading: Rgb,
    muted: Rgb,
}

const ONE_DARK: Palette = Palette {
    good: (152, 195, 121),   // #98c379
    fair: (229, 192, 123),   // #e5c07b
    poor: (224, 108, 117),   // #e06c75
    heading: (86, 182, 194), // #56b6c2
    muted: (92, 99, 112),    // #5c6370
};

const ONE_LIGHT: Palette = Palette {
    good: (80, 161, 79),    // #50a14f
    fair: (193, 132, 1),    // #c18401
    poor: (228, 86, 73),    // #e45649
    heading: (1, 132, 188), // #0184bc
    muted: (160, 161, 167), // #a0a1a7
};

impl Palette {
    fn escape(&self, role: Role) -> String {
        let (r, g, b) = match role {
            Role::Good => self.good,
            Role::Fair => self.fair,
            Role::Poor => self.poor,
            Role::Heading => self.heading,
            Role::Muted => self.muted,
        };
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

impl Theme {
    /// Resolve a theme from the `PINGMAP_THEME` and `COLORFGBG` values.
    ///
    /// An explicit `light`/`dark` wins. Otherwise `COLORFGBG` ("fg;bg") marks
    /// the terminal light when its background is 7 or above, except 8 (dark
    /// gray). Anything else is dark.
    fn resolve(explicit: Option<&str>, colorfgbg: Option<&str>) -> Self {
        match explicit.map(str::to_ascii_lowercase).as_deref() {
            Some("light" | "l") => return Theme::Light,
            Some("dark" | "d") => return Theme::Dark,
            _ => {}
        }

        let light_background = colorfgbg
            .and_then(|value| value.rsplit(';').next())
            .and_then(|bg| bg.parse::<u8>().ok())
            .is_some_and(|bg| bg >= 7 && bg != 8);

        if light_background {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &ONE_DARK,
            Theme::Light => &ONE_LIGHT,
        }
    }
}

/// The terminal's theme, detected once per process.
pub fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(|| {
        Theme::resolve(
            env::var("PINGMAP_THEME").ok().as_deref(),
            env::var("COLORFGBG").ok().as_deref(),
        )
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Style `text` for its role, plus optional modifiers
pub fn themed(role: Role, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        let color = theme().palette().escape(role);
        format!("{}{}{}{}", modifiers.concat(), color, text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
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

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        theme().palette().escape(Role::Muted)
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(Role::Heading, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Match distance, green for substring hits and yellow for fuzzy ones.
///
/// Anything below the fuzzy insertion cost can only be a substring hit.
pub fn distance_colored(distance: f64) -> String {
    let text = format!("{:.2}", distance);
    if distance < pingmap::search::FUZZY_INSERTION_COST {
        themed(Role::Good, &[BOLD], &text)
    } else {
        themed(Role::Fair, &[], &text)
    }
}

/// Latency in milliseconds, colored by how usable it is for real-time traffic.
pub fn latency_colored(latency: Option<f64>) -> String {
    match latency {
        None => themed(Role::Muted, &[DIM], "n/a"),
        Some(ms) => {
            let text = format!("{:.1} ms", ms);
            if ms < 50.0 {
                themed(Role::Good, &[], &text)
            } else if ms < 150.0 {
                themed(Role::Fair, &[], &text)
            } else {
                themed(Role::Poor, &[], &text)
            }
        }
    }
}
