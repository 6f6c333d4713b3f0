use anyhow::Context;
use gh_pr_config::{load_dotenv, AppConfig, Settings};
use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    DefaultTerminal,
};
use std::time::Duration;

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
#[cfg(test)]
mod test_fixtures;
mod theme;
mod view_models;
mod views;

use actions::{Action, GlobalAction, PrListAction};
use middleware::{
    github_middleware::GitHubMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware, navigation_middleware::NavigationMiddleware,
    text_input_middleware::TextInputMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting gh-pr-manager, logging to {}", log_file.display());

    load_dotenv();
    let settings = match Settings::load(AppConfig::load()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let github = GitHubMiddleware::connect(&settings.config.merge_method)
        .context("Failed to connect to GitHub")?;

    let mut store = Store::new(AppState::new(settings.organization, settings.config));

    // Middleware runs in this order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(TextInputMiddleware::new()));
    store.add_middleware(Box::new(github));

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &mut store);
    ratatui::restore();

    log::info!("Exiting gh-pr-manager");
    result
}

fn run_app(terminal: &mut DefaultTerminal, store: &mut Store) -> anyhow::Result<()> {
    store.dispatch(Action::PrList(PrListAction::Reload));

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Key release events are reported on some platforms
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }

        // Results of background GitHub calls arrive through the dispatcher
        store.process_pending();
    }

    Ok(())
}
