//! Theme system for the TUI.
//!
//! `ThemeVariant` is the two-state light/dark toggle; `ThemeTokens` is the
//! fixed record of styles each variant resolves to. Category accents and the
//! rainbow border cycle are theme-independent lookups.

use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    Dark,
    #[default]
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Resolve the style tokens for this variant.
    pub fn tokens(self) -> ThemeTokens {
        match self {
            Self::Dark => ThemeTokens::dark(),
            Self::Light => ThemeTokens::light(),
        }
    }

    /// Flip: Dark → Light → Dark.
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Label shown on the theme toggle.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "🌙 Dark",
            Self::Light => "🌞 Light",
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Resolve the tokens for a dark/light flag.
pub fn resolve_theme(is_dark: bool) -> ThemeTokens {
    ThemeVariant::from_is_dark(is_dark).tokens()
}

// ============================================================================
// Theme Tokens
// ============================================================================

/// Every presentation value the UI needs for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    // -- Page --
    pub page: Style,
    pub panel: Style,
    pub panel_border: Style,

    // -- Header --
    pub title: Style,
    pub signature: Style,
    pub toggle: Style,

    // -- Search bar --
    pub input: Style,
    /// Border around the search box, standing in for the input shadow.
    pub input_shadow: Style,
    pub input_focused: Style,
    pub placeholder: Style,

    // -- Category chips --
    pub chip: Style,
    pub chip_selected: Style,

    // -- Cards --
    pub card_name: Style,
    pub card_raised: Style,
    pub card_fading: Style,
    pub mark: Style,
    pub empty_state: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub help_heading: Style,
}

impl ThemeTokens {
    fn dark() -> Self {
        let text = Color::Rgb(0xe6, 0xee, 0xf8);
        let page_bg = Color::Rgb(0x08, 0x12, 0x21);
        Self {
            page: Style::default().bg(page_bg).fg(text),
            panel: Style::default().bg(Color::Rgb(0x0a, 0x0d, 0x16)).fg(text),
            panel_border: Style::default().fg(Color::Rgb(0x2b, 0x34, 0x40)),

            title: Style::default().fg(text).add_modifier(Modifier::BOLD),
            signature: Style::default()
                .fg(Color::Rgb(0xbe, 0xe6, 0xff))
                .add_modifier(Modifier::BOLD),
            toggle: Style::default()
                .bg(Color::Rgb(0x2b, 0x34, 0x40))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            input: Style::default().bg(Color::Rgb(0x0b, 0x12, 0x20)).fg(Color::White),
            input_shadow: Style::default().fg(Color::Rgb(0x20, 0x28, 0x38)),
            input_focused: Style::default().fg(Color::Rgb(0x3b, 0x8e, 0xff)),
            placeholder: Style::default().fg(Color::Rgb(0x6b, 0x76, 0x88)),

            chip: Style::default().fg(text),
            chip_selected: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),

            card_name: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            card_raised: Style::default()
                .bg(Color::Rgb(0x1a, 0x24, 0x36))
                .add_modifier(Modifier::BOLD),
            card_fading: Style::default().add_modifier(Modifier::DIM),
            mark: Style::default()
                .bg(Color::Rgb(0x64, 0xb4, 0xff))
                .fg(Color::Rgb(0x05, 0x14, 0x28)),
            empty_state: Style::default()
                .fg(Color::Rgb(0xff, 0xd8, 0x6b))
                .add_modifier(Modifier::BOLD),

            status_bar: Style::default().bg(Color::Rgb(0x10, 0x14, 0x18)).fg(text),
            help_heading: Style::default()
                .fg(Color::Rgb(0x6d, 0xd3, 0xff))
                .add_modifier(Modifier::BOLD),
        }
    }

    fn light() -> Self {
        let text = Color::Rgb(0x11, 0x18, 0x27);
        Self {
            page: Style::default().bg(Color::Rgb(0xff, 0x99, 0xac)).fg(text),
            panel: Style::default().bg(Color::Rgb(0xff, 0xd6, 0xdf)).fg(text),
            panel_border: Style::default().fg(Color::Rgb(0xff, 0x6a, 0x88)),

            title: Style::default().fg(text).add_modifier(Modifier::BOLD),
            signature: Style::default()
                .fg(Color::Rgb(0x3b, 0x8e, 0xff))
                .add_modifier(Modifier::BOLD),
            toggle: Style::default()
                .bg(Color::White)
                .fg(Color::Rgb(0x0b, 0x12, 0x20))
                .add_modifier(Modifier::BOLD),

            input: Style::default().bg(Color::Rgb(0xff, 0xe5, 0x3b)).fg(Color::Rgb(0x11, 0x11, 0x11)),
            input_shadow: Style::default().fg(Color::Rgb(0xff, 0x50, 0x50)),
            input_focused: Style::default().fg(Color::Rgb(0x3b, 0x8e, 0xff)),
            placeholder: Style::default().fg(Color::Rgb(0x8a, 0x5a, 0x00)),

            chip: Style::default().fg(text),
            chip_selected: Style::default()
                .fg(text)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),

            card_name: Style::default().fg(text).add_modifier(Modifier::BOLD),
            card_raised: Style::default()
                .bg(Color::Rgb(0xff, 0xf0, 0xf3))
                .add_modifier(Modifier::BOLD),
            card_fading: Style::default().add_modifier(Modifier::DIM),
            mark: Style::default()
                .bg(Color::Rgb(0xff, 0xfa, 0xa0))
                .fg(Color::Rgb(0x11, 0x11, 0x11)),
            empty_state: Style::default()
                .fg(Color::Rgb(0xff, 0xf2, 0x00))
                .add_modifier(Modifier::BOLD),

            status_bar: Style::default().bg(Color::White).fg(text),
            help_heading: Style::default()
                .fg(Color::Rgb(0x4c, 0xa6, 0xff))
                .add_modifier(Modifier::BOLD),
        }
    }
}

// ============================================================================
// Category Accents
// ============================================================================

/// Accent used for categories without a dedicated colour.
pub const DEFAULT_ACCENT: Color = Color::Rgb(0x42, 0xe6, 0x95);

/// Accent colour for a category label.
pub fn category_accent(category: &str) -> Color {
    match category {
        "Programming" => Color::Rgb(0x4c, 0xa6, 0xff),
        "Web Development" => Color::Rgb(0xa7, 0x8b, 0xfa),
        "Database" => Color::Rgb(0x39, 0xd2, 0xa6),
        "Physics" => Color::Rgb(0xff, 0x7a, 0x7a),
        "Computer Science" => Color::Rgb(0xff, 0x9c, 0xee),
        "Cloud Computing" => Color::Rgb(0x5d, 0xd1, 0xff),
        "DevOps" => Color::Rgb(0xff, 0xb8, 0x6f),
        "AI/ML" => Color::Rgb(0xff, 0x9a, 0x9e),
        "Tools" => Color::Rgb(0xff, 0xd3, 0x6e),
        _ => DEFAULT_ACCENT,
    }
}

// ============================================================================
// Rainbow border
// ============================================================================

/// Rainbow stops the page border cycles through.
const RAINBOW: [Color; 7] = [
    Color::Rgb(0xff, 0x5f, 0x6d),
    Color::Rgb(0xff, 0xc3, 0x71),
    Color::Rgb(0xff, 0xb1, 0x99),
    Color::Rgb(0xa1, 0x8c, 0xd1),
    Color::Rgb(0x8f, 0xd3, 0xf4),
    Color::Rgb(0x6e, 0xe7, 0xb7),
    Color::Rgb(0xff, 0xd3, 0x6e),
];

/// One full pass through the rainbow.
pub const RAINBOW_PERIOD: Duration = Duration::from_secs(14);

/// Index of the rainbow stop active after `elapsed`.
pub fn rainbow_index(elapsed: Duration) -> usize {
    let period = RAINBOW_PERIOD.as_millis();
    let phase = elapsed.as_millis() % period;
    (phase * RAINBOW.len() as u128 / period) as usize
}

/// Rainbow colour active after `elapsed`.
pub fn rainbow_color(elapsed: Duration) -> Color {
    RAINBOW[rainbow_index(elapsed)]
}

// ============================================================================
// Tests
// ============================================================================
