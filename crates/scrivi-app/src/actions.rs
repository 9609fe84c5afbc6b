//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Instant;

use scrivi_client::AnalysisService;
use scrivi_core::prelude::*;
use tokio::sync::mpsc;

use crate::handler::{Task, UpdateAction};
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: AnalysisService + Send + Sync + 'static,
{
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                if let Err(e) = execute_task(task, msg_tx, service).await {
                    warn!("{}", e);
                }
            });
        }
    }
}

/// Run a task to completion and report its outcome as a message.
///
/// Fails only if the event loop is gone and the outcome cannot be delivered.
pub async fn execute_task<S>(
    task: Task,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) -> Result<()>
where
    S: AnalysisService + Send + Sync + 'static,
{
    match task {
        Task::Analyse { request_id, text } => {
            let start = Instant::now();
            let outcome = service.analyse(&text).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            let msg = match outcome {
                Ok(result) => Message::AnalysisCompleted {
                    request_id,
                    result: Box::new(result),
                    elapsed_ms,
                },
                Err(e) => Message::AnalysisFailed {
                    request_id,
                    failure: e.failure(),
                },
            };

            msg_tx.send(msg).await.map_err(|_| {
                Error::channel_send(format!("outcome of analysis {} was dropped", request_id))
            })
        }
    }
}
