//! View state for rendering.
//!
//! Groups all state related to display and navigation, separating it from
//! the animation and submission logic the engine owns.

use serde::Deserialize;

/// The four sections of the page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Projects,
    Stack,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Projects,
        Section::Stack,
        Section::Contact,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Projects => "Projects",
            Section::Stack => "Tech Stack",
            Section::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Section::Hero => Section::Projects,
            Section::Projects => Section::Stack,
            Section::Stack => Section::Contact,
            Section::Contact => Section::Hero,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Section::Hero => Section::Contact,
            Section::Projects => Section::Hero,
            Section::Stack => Section::Projects,
            Section::Contact => Section::Stack,
        }
    }

    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Section::Hero),
            '2' => Some(Section::Projects),
            '3' => Some(Section::Stack),
            '4' => Some(Section::Contact),
            _ => None,
        }
    }
}

/// Selection and scroll state within a list-like section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionState {
    pub selected: usize,
    /// First visible row; the renderer keeps `selected` inside the window.
    pub offset: usize,
}

impl SectionState {
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }
}

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for the caret, borders, and background.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Disable the background animation and caret blink.
    pub reduced_motion: bool,
}

/// Everything the renderer needs besides the content and the animator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    pub section: Section,
    pub projects: SectionState,
    pub options: UiOptions,
}
