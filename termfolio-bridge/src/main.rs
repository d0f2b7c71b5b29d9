use termfolio_bridge::app::{self, TermfolioApp, IDLE_REDRAW};
use termfolio_bridge::keyboard;
use termfolio_bridge::messages::{Flow, Message};
use termfolio_bridge::update::update;
use termfolio_bridge::util::{self, TerminalGuard};
use termfolio_bridge::view_ui;

use termfolio_core::Config;

use anyhow::Context;
use crossterm::event::EventStream;
use futures::StreamExt;

use std::io;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_dir = Config::data_dir().unwrap_or_else(std::env::temp_dir);
    let log_path = util::init_tracing(&log_dir)?;
    util::install_panic_hook();
    tracing::info!("=== Termfolio Starting === (log: {})", log_path.display());

    let config = Config::load_default().context("loading config")?;
    let (width, height) = crossterm::terminal::size().context("querying terminal size")?;
    let mut app = app::boot(&config, width, height, Instant::now());

    let guard = TerminalGuard::enter().context("entering raw mode")?;
    let result = run(&mut app).await;
    drop(guard);

    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    tracing::info!(commands = app.session_cmd_count, "=== Termfolio Stopped ===");
    result
}

async fn run(app: &mut TermfolioApp) -> anyhow::Result<()> {
    let mut events = EventStream::new();

    let mut stdout = io::stdout();
    let mut last_draw = Instant::now();
    view_ui::draw(&mut stdout, app, last_draw).context("drawing first frame")?;
    app.dirty = false;

    loop {
        let wait = app.next_wake(Instant::now());
        let message = tokio::select! {
            biased;

            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => keyboard::map_event(&event),
                Some(Err(e)) => return Err(e).context("reading terminal events"),
                None => Some(Message::Quit),
            },

            _ = tokio::time::sleep(wait) => Some(Message::Tick),
        };

        let Some(message) = message else {
            continue;
        };

        let now = Instant::now();
        if update(app, message, now) == Flow::Quit {
            break;
        }

        if app.dirty || now.duration_since(last_draw) >= IDLE_REDRAW {
            view_ui::draw(&mut stdout, app, now).context("drawing frame")?;
            app.dirty = false;
            last_draw = now;
        }
    }

    Ok(())
}
