//! Async executor for fetch commands issued by the UI.
//!
//! The UI loop never awaits. It sends a [`UiCommand`] and later receives an
//! [`AppEvent::Content`] carrying the result and the ticket it was issued
//! with. Each fetch runs in its own task so a slow detail request never
//! delays a list reload.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::model::{PhilosopherDetail, PhilosopherSummary};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;
use crate::ui::lifecycle::FetchTicket;

use super::error::ScreenError;
use super::traits::ContentSource;

/// Completed fetch, tagged with the ticket it was issued under.
#[derive(Debug)]
pub enum ContentEvent {
    ListLoaded {
        ticket: FetchTicket,
        result: Result<Vec<PhilosopherSummary>, ScreenError>,
    },
    DetailLoaded {
        ticket: FetchTicket,
        result: Result<PhilosopherDetail, ScreenError>,
    },
}

impl ContentEvent {
    pub fn ticket(&self) -> FetchTicket {
        match self {
            ContentEvent::ListLoaded { ticket, .. } | ContentEvent::DetailLoaded { ticket, .. } => {
                *ticket
            }
        }
    }
}

pub struct ContentWorker;

impl ContentWorker {
    /// Spawn the command loop on the current tokio runtime.
    ///
    /// The loop ends when every command sender is dropped.
    pub fn spawn(
        source: Arc<dyn ContentSource>,
        mut commands: mpsc::Receiver<UiCommand>,
        events: Sender<AppEvent>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            tracing::info!(source = source.name(), "Content worker started");
            while let Some(command) = commands.recv().await {
                let source = Arc::clone(&source);
                let events = events.clone();
                tokio::spawn(async move {
                    let event = Self::execute(source.as_ref(), command).await;
                    // Receiver gone means the UI has exited.
                    let _ = events.send(AppEvent::Content(event));
                });
            }
            tracing::info!("Content worker stopped");
        })
    }

    /// Run one command to completion.
    pub async fn execute(source: &dyn ContentSource, command: UiCommand) -> ContentEvent {
        match command {
            UiCommand::FetchList { ticket } => {
                tracing::debug!(%ticket, "Fetching philosopher list");
                let result = source
                    .fetch_summary_list()
                    .await
                    .map_err(ScreenError::ListFetch);
                ContentEvent::ListLoaded { ticket, result }
            }
            UiCommand::FetchDetail { ticket, summary } => {
                tracing::debug!(%ticket, name = %summary.name, "Fetching philosopher detail");
                let result = source.fetch_detail(&summary).await.map_err(|source| {
                    ScreenError::DetailFetch {
                        name: summary.name.clone(),
                        source,
                    }
                });
                ContentEvent::DetailLoaded { ticket, result }
            }
        }
    }
}
