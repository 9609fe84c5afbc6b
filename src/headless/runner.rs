//! Headless mode runner - one analysis without the TUI

use scrivi_app::{AnalysisStatus, AppState, Engine, Message};
use scrivi_client::AnalysisService;
use scrivi_core::prelude::*;

use super::HeadlessEvent;

/// Analyse the draft in `state` once and emit NDJSON events.
///
/// Returns `Ok(true)` when the service produced a result.
pub async fn run_headless<S>(state: AppState, service: S) -> Result<bool>
where
    S: AnalysisService + Send + Sync + 'static,
{
    info!("scrivi starting in headless mode");
    info!("Service: {}", state.service_url);

    let mut engine = Engine::new(state, service);
    let chars = engine.state.draft.char_count();

    engine.process_message(Message::Analyse);
    let request_id = engine
        .state
        .analysis
        .in_flight()
        .map(|id| id.0)
        .unwrap_or_default();
    HeadlessEvent::analysis_started(request_id, chars).emit();

    while engine.state.analysis.is_busy() && !engine.should_quit() {
        if !engine.process_next().await {
            return Err(Error::ChannelClosed);
        }
    }

    let analysis = &engine.state.analysis;
    let succeeded = match (&analysis.status, &analysis.view, &analysis.failure) {
        (AnalysisStatus::Completed { elapsed_ms }, Some(view), _) => {
            HeadlessEvent::analysis_completed(request_id, *elapsed_ms, view.clone()).emit();
            true
        }
        (_, _, Some(failure)) => {
            HeadlessEvent::analysis_failed(failure).emit();
            false
        }
        _ => {
            info!("Headless analysis interrupted");
            false
        }
    };

    info!("scrivi headless mode exiting");
    Ok(succeeded)
}
