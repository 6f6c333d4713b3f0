//! Repository filter popup

use crate::keymap::CommandId;
use crate::state::{AppState, RepoOption};
use crate::view_models::key_hints;
use crate::views::{centered, hints_line};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

const POPUP_HEIGHT: u16 = 18;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let Some(filter) = &state.repo_filter else {
        return;
    };
    let theme = &state.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(Color::Black).add_modifier(Modifier::DIM)),
        area,
    );

    let popup = centered(area, (area.width * 60 / 100).clamp(40, 70), POPUP_HEIGHT);
    f.render_widget(Clear, popup);

    let hints = key_hints(
        &state.keymap,
        &[CommandId::NavigateNext, CommandId::NavigatePrevious],
    );
    let mut footer = hints_line(&hints, theme);
    footer.spans.push(Span::styled("Enter", theme.key_hint()));
    footer.spans.push(Span::styled(" select  ", theme.key_description()));
    footer.spans.push(Span::styled("Esc", theme.key_hint()));
    footer.spans.push(Span::styled(" cancel ", theme.key_description()));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filter by Repository ")
        .title_style(theme.panel_title())
        .title_bottom(footer)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    let inner = block.inner(popup).inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    f.render_widget(block, popup);

    let [subtitle_area, input_area, _, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Line::styled(
            "Type to filter, then select a repository:",
            theme.muted(),
        )),
        subtitle_area,
    );

    let input = Line::from(vec![
        Span::styled("> ", theme.label()),
        Span::styled(filter.query.clone(), theme.text()),
        Span::styled("▌", theme.accent()),
    ]);
    f.render_widget(Paragraph::new(input), input_area);

    let options = filter.options();
    let mut items: Vec<ListItem> = options
        .iter()
        .map(|option| match option {
            RepoOption::All => ListItem::new("All repositories").style(theme.info()),
            RepoOption::Repository(name) => ListItem::new(name.clone()).style(theme.text()),
        })
        .collect();
    if filter.matching_repositories().is_empty() {
        items.push(ListItem::new("No repositories found").style(theme.muted()));
    }

    let list = List::new(items)
        .highlight_style(theme.table_selected())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(filter.selected));
    f.render_stateful_widget(list, list_area, &mut list_state);
}
