//! Menuboard - a terminal menu board.
//!
//! Shows a fixed list of dishes, each with an order counter and a
//! confirmation dialog.

mod app;
mod cli;
mod config;
mod constants;
mod event;
mod message;
mod state;
mod theme;
mod tui;
mod ui;

use app::App;
use clap::Parser;
use cli::args::{Args, Commands};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use event::{Event, EventHandler};

fn main() -> Result<()> {
    tui::install_hooks()?;
    let args = Args::parse();

    if let Some(Commands::Menu { json }) = args.command {
        return cli::menu::run(json);
    }

    let (config, source) = config::load(args.config.as_deref())?;

    let mut app = App::new(&config);
    app.log(format!("{}loaded from {source}", constants::LOG_CONFIG));

    let mut terminal = tui::init(config.mouse).wrap_err("Failed to initialize terminal")?;
    let events = EventHandler::new(config.tick_rate());

    let result = run(&mut terminal, &mut app, &events);
    let restored = tui::restore().wrap_err("Failed to restore terminal");

    result.and(restored)
}

/// Draw, wait for an event, apply it; until the user quits.
fn run(terminal: &mut tui::Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(_, _) | Event::Tick => {}
        }
    }
    Ok(())
}
