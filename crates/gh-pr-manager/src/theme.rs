use gh_split_diff::DiffTheme;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Diff colors
    pub diff_removed_fg: Color,
    pub diff_removed_bg: Color,
    pub diff_added_fg: Color,
    pub diff_added_bg: Color,
    pub diff_context_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,

            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            // Accents
            accent_primary: tailwind::CYAN.c400,

            // Status
            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            // Selection
            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            // Diff
            diff_removed_fg: tailwind::RED.c500,
            diff_removed_bg: tailwind::RED.c900,
            diff_added_fg: tailwind::GREEN.c500,
            diff_added_bg: tailwind::GREEN.c900,
            diff_context_bg: tailwind::GRAY.c800,
        }
    }

    fn bold(color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Popup panels
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    pub fn panel_border(&self) -> Style {
        Self::bold(self.accent_primary)
    }

    pub fn panel_title(&self) -> Style {
        Self::bold(self.accent_primary)
    }

    /// "Description" heading of the detail view
    pub fn section_header(&self) -> Style {
        Self::bold(self.status_warning).add_modifier(Modifier::UNDERLINED)
    }

    /// The key part of a footer hint, e.g. `Enter` in `Enter Details`
    pub fn key_hint(&self) -> Style {
        Self::bold(self.accent_primary)
    }

    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// `Author:`, `Branch:` and friends
    pub fn label(&self) -> Style {
        Self::bold(self.text_secondary)
    }

    /// Highlighted row of the PR list and the repository filter
    pub fn table_selected(&self) -> Style {
        Self::bold(self.selected_fg).bg(self.selected_bg)
    }

    pub fn error(&self) -> Style {
        Self::bold(self.status_error)
    }

    pub fn success(&self) -> Style {
        Self::bold(self.status_success)
    }

    pub fn warning(&self) -> Style {
        Self::bold(self.status_warning)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.status_info)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Input cursor
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }
}

/// Split diff colors taken from the application palette
impl DiffTheme for Theme {
    fn removed(&self) -> Style {
        Style::new().fg(self.diff_removed_fg).bg(self.diff_removed_bg)
    }

    fn added(&self) -> Style {
        Style::new().fg(self.diff_added_fg).bg(self.diff_added_bg)
    }

    fn context(&self) -> Style {
        Style::new().fg(self.text_primary).bg(self.diff_context_bg)
    }

    fn hunk_header(&self) -> Style {
        Self::bold(self.accent_primary).bg(self.diff_context_bg)
    }

    fn line_number(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}
