//! Confirmation popup for approve, comment, request changes and merge

use crate::state::AppState;
use crate::views::centered;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let Some(popup_state) = &state.confirmation_popup else {
        return;
    };
    let theme = &state.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(Color::Black).add_modifier(Modifier::DIM)),
        area,
    );

    let popup_width = (area.width * 60 / 100).clamp(50, 70);
    let popup = centered(area, popup_width, 11);
    f.render_widget(Clear, popup);

    let footer = Line::from(vec![
        Span::styled(" Enter", theme.key_hint()),
        Span::styled(" confirm  ", theme.key_description()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.key_description()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", popup_state.intent.popup_title()))
        .title_style(theme.panel_title())
        .title_bottom(footer)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    let inner = block.inner(popup).inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    f.render_widget(block, popup);

    let [target_area, _, instructions_area, input_area, _, validation_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    let target = Line::from(vec![
        Span::styled(format!("{}: ", popup_state.intent.action_verb()), theme.label()),
        Span::styled(popup_state.target_info(), theme.text()),
    ]);
    f.render_widget(Paragraph::new(target), target_area);

    f.render_widget(
        Paragraph::new(Line::styled(
            popup_state.intent.instructions(),
            theme.muted(),
        )),
        instructions_area,
    );

    let input = Line::from(vec![
        Span::styled("> ", theme.label()),
        Span::styled(popup_state.input_value.clone(), theme.text()),
        Span::styled("▌", theme.accent()),
    ]);
    f.render_widget(Paragraph::new(input), input_area);

    if popup_state.show_validation {
        f.render_widget(
            Paragraph::new(Line::styled("Message is required", theme.error())),
            validation_area,
        );
    }
}
