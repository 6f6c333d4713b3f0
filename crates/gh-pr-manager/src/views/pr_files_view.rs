//! Changed files view
//!
//! Draws the files document line by line: plain text lines as they are,
//! diff lines through the split diff column layout.

use crate::state::AppState;
use crate::view_models::{DocumentLine, PrFilesViewModel};
use crate::views::hints_line;
use gh_split_diff::column_headers;
use gh_split_diff::widget::{render_cells, render_row, ColumnLayout};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let details = state
        .pr_detail
        .details
        .as_ref()
        .filter(|_| state.pr_detail.target == state.pr_files.target);
    let vm = PrFilesViewModel::from_state(&state.pr_files, details, &state.keymap, theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Files ")
        .title_style(theme.panel_title())
        .title_bottom(hints_line(&vm.hints, theme))
        .border_style(theme.panel_border())
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = ColumnLayout::with_number_width(inner, vm.number_width);
    let headers = column_headers(theme);
    let buf = f.buffer_mut();

    let visible = vm.lines().skip(vm.scroll).take(inner.height as usize);
    for (y, line) in (inner.y..).zip(visible) {
        match line {
            DocumentLine::Text(line) => {
                buf.set_line(inner.x, y, line, inner.width);
            }
            DocumentLine::DiffHeader => render_cells(&headers, &layout, y, buf),
            DocumentLine::Diff(row) => render_row(row, &layout, y, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PrFilesAction;
    use crate::domain_models::PrKey;
    use crate::reducers::pr_files_reducer;
    use crate::state::PrFilesState;
    use crate::test_fixtures::changed_file;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| render(state, f.area(), f)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn loaded_state() -> AppState {
        let key = PrKey {
            owner: "acme".to_string(),
            repo: "api".to_string(),
            number: 9,
        };
        let files = vec![changed_file(
            "src/lib.rs",
            Some("@@ -3,2 +3,2 @@\n-let a = 1;\n+let a = 2;\n keep"),
        )];
        let mut state = AppState::default();
        state.pr_files = pr_files_reducer::reduce(
            PrFilesState::open(key.clone()),
            &PrFilesAction::Loaded(key, files),
            &state.theme,
        );
        state
    }

    #[test]
    fn test_renders_header_and_split_rows() {
        let lines = screen(&loaded_state());

        assert!(lines[1].contains("File Changes for PR #9"));
        let removed = lines
            .iter()
            .find(|line| line.contains("let a = 1;"))
            .expect("removed line on screen");
        assert!(removed.contains("    3"));
        assert!(!removed.contains("let a = 2;"));
        let context = lines
            .iter()
            .find(|line| line.contains("keep"))
            .expect("context line on screen");
        assert_eq!(context.matches("keep").count(), 2);
    }

    #[test]
    fn test_large_line_numbers_are_not_cut() {
        let key = PrKey {
            owner: "acme".to_string(),
            repo: "api".to_string(),
            number: 9,
        };
        let files = vec![changed_file(
            "src/big.rs",
            Some("@@ -123456,1 +123456,0 @@\n-gone"),
        )];
        let mut state = AppState::default();
        state.pr_files = pr_files_reducer::reduce(
            PrFilesState::open(key.clone()),
            &PrFilesAction::Loaded(key, files),
            &state.theme,
        );

        let lines = screen(&state);

        assert!(lines.iter().any(|line| line.contains("123456 gone")));
    }

    #[test]
    fn test_scroll_skips_leading_lines() {
        let mut state = loaded_state();
        state.pr_files.scroll = 2;

        let lines = screen(&state);

        assert!(!lines.iter().any(|line| line.contains("File Changes for PR")));
        assert!(lines[1].contains("Total Files Changed: 1"));
    }
}
