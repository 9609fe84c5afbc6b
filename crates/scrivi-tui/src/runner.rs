//! Main TUI runner - entry point and event loop

use scrivi_app::{AppState, Engine};
use scrivi_client::AnalysisService;
use scrivi_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Owns the terminal for its lifetime and restores it on every exit path,
/// panics included.
pub async fn run<S>(state: AppState, service: S) -> Result<()>
where
    S: AnalysisService + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut engine = Engine::new(state, service);
    info!("scrivi started, service at {}", engine.state.service_url);

    let result = run_loop(&mut term, &mut engine);

    ratatui::restore();
    info!("scrivi exiting");

    result
}

/// Main event loop
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: AnalysisService + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Analysis outcomes and signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
