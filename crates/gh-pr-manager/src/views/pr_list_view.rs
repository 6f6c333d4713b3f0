//! Pull request list view

use crate::state::AppState;
use crate::view_models::{PrListBody, PrListViewModel};
use crate::views::hints_line;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = PrListViewModel::from_state(&state.pr_list, &state.keymap);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", vm.title))
        .title_style(theme.panel_title())
        .title_bottom(hints_line(&vm.hints, theme))
        .border_style(theme.panel_border())
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [subtitle_area, _, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Line::styled(vm.subtitle.clone(), theme.muted())),
        subtitle_area,
    );

    match &vm.body {
        PrListBody::Items { labels, selected } => {
            let items: Vec<ListItem> = labels
                .iter()
                .map(|label| ListItem::new(label.as_str()).style(theme.text()))
                .collect();
            let list = List::new(items)
                .highlight_style(theme.table_selected())
                .highlight_symbol("> ");
            let mut list_state = ListState::default().with_selected(Some(*selected));
            f.render_stateful_widget(list, list_area, &mut list_state);
        }
        body => {
            let style = if matches!(body, PrListBody::Error(_)) {
                theme.error()
            } else {
                theme.muted()
            };
            let message = body.message().unwrap_or_default();
            f.render_widget(Paragraph::new(Line::styled(message, style)), list_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::pr;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|f| render(state, f.area(), f))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_items_and_subtitle() {
        let mut state = AppState::new("acme", Default::default());
        state.pr_list.set_pull_requests(vec![pr("api", 42, 1)]);

        let screen = rendered(&state);

        assert!(screen.contains("Pull Requests"));
        assert!(screen.contains("Organization: acme | Order: Newest First | Repo: All"));
        assert!(screen.contains("> #42 - Change 42 (api) by octocat"));
    }

    #[test]
    fn test_renders_loading_message() {
        let state = AppState::new("acme", Default::default());

        assert!(rendered(&state).contains("Loading PRs..."));
    }
}
