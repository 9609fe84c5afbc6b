//! Trigger control and analysis response handlers

use scrivi_core::{AnalysisFailure, AnalysisResult};
use tracing::{debug, info, warn};

use crate::state::{AppState, RequestId};

use super::{Task, UpdateAction, UpdateResult};

/// Start an analysis of the current draft unless one is already running
pub fn handle_analyse(state: &mut AppState) -> UpdateResult {
    let Some(request_id) = state.analysis.begin() else {
        debug!("Analysis already in flight, ignoring trigger");
        return UpdateResult::none();
    };

    let text = state.draft.text().to_string();
    info!(
        "Analysis {} requested ({} words, {} chars)",
        request_id,
        state.draft.word_count(),
        state.draft.char_count()
    );

    UpdateResult::action(UpdateAction::SpawnTask(Task::Analyse { request_id, text }))
}

pub fn handle_completed(
    state: &mut AppState,
    request_id: RequestId,
    result: AnalysisResult,
    elapsed_ms: u64,
) -> UpdateResult {
    if state.analysis.complete(request_id, result, elapsed_ms) {
        state.results_view.reset();
        debug!("Analysis {} stored after {}ms", request_id, elapsed_ms);
    } else {
        debug!("Discarding stale analysis response {}", request_id);
    }
    UpdateResult::none()
}

pub fn handle_failed(
    state: &mut AppState,
    request_id: RequestId,
    failure: AnalysisFailure,
) -> UpdateResult {
    if state.analysis.fail(request_id, failure) {
        state.results_view.reset();
        if let Some(failure) = &state.analysis.failure {
            warn!("Analysis {} failed: {}", request_id, failure);
        }
    } else {
        debug!("Discarding stale analysis failure {}", request_id);
    }
    UpdateResult::none()
}
