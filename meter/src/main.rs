//! Thought-O-Meter terminal frontend.
//!
//! Fetches the story once at startup, then steps through the slides:
//! narration advances with Next, exercises grade a picked option, and the
//! demo slide sends free text to the backend classifier.

mod app;
mod events;
mod html;
mod ui;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use meter_api::MeterApi;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch story data. Please make sure the backend server is running.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let api = MeterApi::from_env();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(api)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    // Show the loading screen while the one-time content fetch runs.
    terminal.draw(|f| render(f, &app))?;
    match app.api.story().await {
        Ok(items) => app.navigator.resolve(items),
        Err(_) => app.navigator.fail(FETCH_FAILED_MESSAGE),
    }

    // Demo text pending a round-trip to the classifier
    let mut pending_analyze: Option<String> = None;

    loop {
        terminal.draw(|f| render(f, &app))?;

        // Process a pending analyze request, showing progress first so the
        // user sees their sentence before the await.
        if let Some(text) = pending_analyze.take() {
            app.set_status("Analyzing...");
            terminal.draw(|f| render(f, &app))?;

            match app.api.analyze(&text).await {
                Ok(sentiment) => app.navigator.set_sentiment(sentiment),
                Err(_) => app.navigator.analysis_failed(),
            }
            app.clear_status();
        }

        // Poll for events with a timeout so redraws stay responsive
        if crossterm::event::poll(Duration::from_millis(100))? {
            let ev = crossterm::event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::Analyze(text) => pending_analyze = Some(text),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
