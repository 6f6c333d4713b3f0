//! Pull request detail view

use crate::state::AppState;
use crate::view_models::PrDetailViewModel;
use crate::views::hints_line;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = PrDetailViewModel::from_state(&state.pr_detail, &state.keymap, theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(vm.title)
        .title_style(theme.panel_title())
        .title_bottom(hints_line(&vm.hints, theme))
        .border_style(theme.panel_border())
        .style(Style::default().bg(theme.bg_primary));

    let paragraph = Paragraph::new(vm.lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((vm.scroll, 0));

    f.render_widget(paragraph, area);
}
