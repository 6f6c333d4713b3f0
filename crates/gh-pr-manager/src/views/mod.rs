use crate::actions::{
    Action, ConfirmationPopupAction, NavigationAction, PrDetailAction, PrFilesAction,
    PrListAction, RepoFilterAction, TextInputAction,
};
use crate::capabilities::ViewCapabilities;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::KeyHint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    Frame,
};

pub mod confirmation_popup_view;
pub mod pr_detail_view;
pub mod pr_files_view;
pub mod pr_list_view;
pub mod repo_filter_view;
pub mod status_bar;

/// View identifier - one entry of the view stack
///
/// Everything a view contributes to input handling is answered here by
/// matching on the variant; rendering lives in the per-view modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    PrList,
    PrDetail,
    PrFiles,
    RepoFilter,
    ConfirmationPopup,
}

impl ViewId {
    /// Floating views are drawn over the view underneath
    pub fn is_floating(self) -> bool {
        matches!(self, Self::RepoFilter | Self::ConfirmationPopup)
    }

    /// Get the capabilities of this view (for keyboard handling)
    pub fn capabilities(self) -> ViewCapabilities {
        match self {
            Self::PrList => ViewCapabilities::ITEM_NAVIGATION,
            Self::PrDetail | Self::PrFiles => ViewCapabilities::SCROLL_VERTICAL,
            Self::RepoFilter => ViewCapabilities::TEXT_INPUT | ViewCapabilities::ITEM_NAVIGATION,
            Self::ConfirmationPopup => ViewCapabilities::TEXT_INPUT,
        }
    }

    /// Translate a generic navigation action to this view's specific action.
    pub fn translate_navigation(self, nav: NavigationAction) -> Option<Action> {
        match self {
            Self::PrList => {
                let action = match nav {
                    NavigationAction::Next => PrListAction::NavigateNext,
                    NavigationAction::Previous => PrListAction::NavigatePrevious,
                    NavigationAction::ToTop => PrListAction::NavigateToTop,
                    NavigationAction::ToBottom => PrListAction::NavigateToBottom,
                    NavigationAction::PageDown | NavigationAction::PageUp => return None,
                };
                Some(Action::PrList(action))
            }
            Self::PrDetail => {
                let action = match nav {
                    NavigationAction::Next => PrDetailAction::ScrollDown,
                    NavigationAction::Previous => PrDetailAction::ScrollUp,
                    NavigationAction::ToTop => PrDetailAction::ScrollToTop,
                    NavigationAction::ToBottom => PrDetailAction::ScrollToBottom,
                    NavigationAction::PageDown | NavigationAction::PageUp => return None,
                };
                Some(Action::PrDetail(action))
            }
            Self::PrFiles => {
                let action = match nav {
                    NavigationAction::Next => PrFilesAction::ScrollDown,
                    NavigationAction::Previous => PrFilesAction::ScrollUp,
                    NavigationAction::ToTop => PrFilesAction::ScrollToTop,
                    NavigationAction::ToBottom => PrFilesAction::ScrollToBottom,
                    NavigationAction::PageDown => PrFilesAction::PageDown,
                    NavigationAction::PageUp => PrFilesAction::PageUp,
                };
                Some(Action::PrFiles(action))
            }
            Self::RepoFilter => match nav {
                NavigationAction::Next => {
                    Some(Action::RepoFilter(RepoFilterAction::NavigateNext))
                }
                NavigationAction::Previous => {
                    Some(Action::RepoFilter(RepoFilterAction::NavigatePrevious))
                }
                _ => None,
            },
            Self::ConfirmationPopup => None,
        }
    }

    /// Translate a generic text input action to this view's specific action.
    pub fn translate_text_input(self, input: TextInputAction) -> Option<Action> {
        match self {
            Self::RepoFilter => {
                let action = match input {
                    TextInputAction::Char(c) => RepoFilterAction::Char(c),
                    TextInputAction::Backspace => RepoFilterAction::Backspace,
                    TextInputAction::ClearLine => RepoFilterAction::ClearInput,
                    TextInputAction::Escape => RepoFilterAction::Cancel,
                    TextInputAction::Confirm => RepoFilterAction::Confirm,
                };
                Some(Action::RepoFilter(action))
            }
            Self::ConfirmationPopup => {
                let action = match input {
                    TextInputAction::Char(c) => ConfirmationPopupAction::Char(c),
                    TextInputAction::Backspace => ConfirmationPopupAction::Backspace,
                    TextInputAction::ClearLine => ConfirmationPopupAction::ClearInput,
                    TextInputAction::Escape => ConfirmationPopupAction::Cancel,
                    TextInputAction::Confirm => ConfirmationPopupAction::Confirm,
                };
                Some(Action::ConfirmationPopup(action))
            }
            Self::PrList | Self::PrDetail | Self::PrFiles => None,
        }
    }

    /// Gate keymap commands: only actions meant for this view get through
    pub fn accepts_action(self, action: &Action) -> bool {
        match action {
            Action::Global(_) => true,
            Action::Navigate(nav) => self.translate_navigation(*nav).is_some(),
            Action::TextInput(input) => self.translate_text_input(input.clone()).is_some(),
            Action::PrList(_) => self == Self::PrList,
            Action::PrDetail(_) | Action::ConfirmationPopup(ConfirmationPopupAction::Show(_)) => {
                self == Self::PrDetail
            }
            Action::PrFiles(_) => self == Self::PrFiles,
            Action::RepoFilter(_) => self == Self::RepoFilter,
            Action::ConfirmationPopup(_) => self == Self::ConfirmationPopup,
            Action::StatusBar(_) => false,
        }
    }

    fn render(self, state: &AppState, area: Rect, f: &mut Frame) {
        match self {
            Self::PrList => pr_list_view::render(state, area, f),
            Self::PrDetail => pr_detail_view::render(state, area, f),
            Self::PrFiles => pr_files_view::render(state, area, f),
            Self::RepoFilter => repo_filter_view::render(state, area, f),
            Self::ConfirmationPopup => confirmation_popup_view::render(state, area, f),
        }
    }
}

/// Render the entire application UI
///
/// Rendering strategy:
/// - Start at the top-most non-floating view; views below it are hidden
/// - Render from there bottom-up so floating views land on top
/// - The status bar takes the last line
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [main_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let base = state
        .view_stack
        .iter()
        .rposition(|view| !view.is_floating())
        .unwrap_or(0);

    for view in &state.view_stack[base..] {
        view.render(state, main_area, f);
    }

    status_bar::render(state, status_area, f);
}

/// Footer line like ` Enter Details  r Reload `
pub(crate) fn hints_line(hints: &[KeyHint], theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for hint in hints {
        spans.push(Span::styled(hint.key.clone(), theme.key_hint()));
        spans.push(Span::styled(format!(" {}  ", hint.description), theme.key_description()));
    }
    Line::from(spans)
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
