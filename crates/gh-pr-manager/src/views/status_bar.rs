//! Status bar - the last line of the screen

use crate::keymap::CommandId;
use crate::state::{AppState, StatusKind};
use crate::view_models::key_hints;
use crate::views::hints_line;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the latest status message, or the global key hints when there is none
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let line = match &state.status_bar.current {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Running => theme.info(),
                StatusKind::Success => theme.success(),
                StatusKind::Error => theme.error(),
            };
            Line::from(vec![
                Span::raw(format!(" {} ", status.kind.emoji())),
                Span::styled(
                    format!("[{}] ", status.timestamp.format("%H:%M:%S")),
                    theme.muted(),
                ),
                Span::styled(status.message.clone(), style),
            ])
        }
        None => hints_line(
            &key_hints(&state.keymap, &[CommandId::GlobalClose, CommandId::GlobalQuit]),
            theme,
        ),
    };

    f.render_widget(Paragraph::new(line).style(theme.panel_background()), area);
}
