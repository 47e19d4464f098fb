//! JSON-lines event feed
//!
//! Each inbound line is handled on its own task; responses are funneled
//! through a channel to a single writer so output lines never interleave.

use std::sync::Arc;

use emote_common::{AppError, AppResult};
use emote_core::GatewayEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::handlers::EventRouter;
use crate::protocol::{decode_event, OutboundResponse};

/// Pending responses buffered ahead of the writer
const RESPONSE_BUFFER: usize = 256;

/// Totals for one feed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    /// Events handed to the router
    pub events: usize,
    /// Lines that did not parse as a known event
    pub skipped: usize,
    /// Response lines written
    pub responses: usize,
}

/// Route every event read from `input` and write responses to `output`.
///
/// Returns once `input` is exhausted and every in-flight event is handled.
pub async fn run_feed<R, W>(router: EventRouter, input: R, output: W) -> AppResult<FeedStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let router = Arc::new(router);
    let (tx, rx) = mpsc::channel(RESPONSE_BUFFER);
    let writer = tokio::spawn(write_responses(output, rx));

    let mut stats = FeedStats::default();
    let mut tasks = JoinSet::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await.map_err(AppError::internal)? {
        let event = match decode_event(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                debug!(error = %e, "Skipping unrecognized event line");
                stats.skipped += 1;
                continue;
            }
        };
        stats.events += 1;

        let router = Arc::clone(&router);
        let tx = tx.clone();
        tasks.spawn(async move {
            let interaction_id = match &event {
                GatewayEvent::InteractionCreate(interaction) => Some(interaction.id),
                _ => None,
            };
            let response = router.dispatch(event).await;
            if let (Some(id), Some(response)) = (interaction_id, response) {
                if tx.send(OutboundResponse::new(id, response)).await.is_err() {
                    warn!(interaction_id = %id, "Response writer closed");
                }
            }
        });

        // Reap finished tasks so the set stays small on long feeds
        while tasks.try_join_next().is_some() {}
    }

    while let Some(result) = tasks.join_next().await {
        if let Err(e) = result {
            warn!(error = %e, "Event task failed");
        }
    }
    drop(tx);

    stats.responses = writer
        .await
        .map_err(AppError::internal)?
        .map_err(AppError::internal)?;
    Ok(stats)
}

async fn write_responses<W>(
    mut output: W,
    mut rx: mpsc::Receiver<OutboundResponse>,
) -> std::io::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while let Some(line) = rx.recv().await {
        let mut bytes = serde_json::to_vec(&line)?;
        bytes.push(b'\n');
        output.write_all(&bytes).await?;
        output.flush().await?;
        written += 1;
    }
    Ok(written)
}
