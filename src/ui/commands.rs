//! Background work requested by the UI.
//!
//! Commands run on the tokio runtime; results return to the UI loop as
//! [`AppEvent`]s.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::media::ImageLoader;
use crate::storage::StorySink;
use crate::story::SavePayload;
use crate::ui::events::AppEvent;

const COMMAND_QUEUE: usize = 16;

#[derive(Debug)]
pub enum UiCommand {
    LoadImage { path: PathBuf },
    Save { payload: SavePayload },
}

pub type UiCommandSender = tokio::sync::mpsc::Sender<UiCommand>;

/// Start the worker that executes [`UiCommand`]s.
///
/// Each command runs as its own task so a slow save does not hold up an
/// image load.
pub fn spawn_command_worker(
    runtime: &Handle,
    sink: Arc<dyn StorySink>,
    loader: ImageLoader,
    events: mpsc::Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = tokio::sync::mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(async move {
        while let Some(command) = rx.recv().await {
            let sink = Arc::clone(&sink);
            let loader = loader.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let event = run_command(command, sink.as_ref(), &loader).await;
                if events.send(event).is_err() {
                    tracing::trace!("Command result dropped (UI gone)");
                }
            });
        }
    });
    tx
}

async fn run_command(command: UiCommand, sink: &dyn StorySink, loader: &ImageLoader) -> AppEvent {
    match command {
        UiCommand::LoadImage { path } => match loader.load(&path).await {
            Ok(uri) => AppEvent::ImageLoaded { uri },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Image load failed");
                AppEvent::ImageFailed {
                    message: err.to_string(),
                }
            }
        },
        UiCommand::Save { payload } => {
            let kind = payload.kind;
            match sink.save(payload).await {
                Ok(receipt) => AppEvent::SaveFinished(Ok(receipt)),
                Err(err) => {
                    tracing::warn!(sink = sink.name(), kind = kind.label(), error = %err, "Save failed");
                    AppEvent::SaveFinished(Err(err.to_string()))
                }
            }
        }
    }
}
