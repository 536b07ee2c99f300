//! Background worker messages and async loading tasks.

use crate::catalogue::Catalogue;
use crate::catalogue::query::{QueryResults, run_query};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Message sent from background workers to the UI event loop.
#[derive(Debug)]
pub enum WorkerMessage {
    CatalogueLoaded {
        label: String,
        result: Result<Catalogue, String>,
    },
    QueryCompleted {
        path: String,
        results: QueryResults,
    },
}

/// Spawns async loading of the catalogue snapshot.
pub fn spawn_load_catalogue(tx: UnboundedSender<WorkerMessage>, path: PathBuf) {
    tokio::spawn(async move {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let result = tokio::task::spawn_blocking(move || Catalogue::load(&path))
            .await
            .map_err(|error| error.to_string())
            .and_then(|loaded| loaded.map_err(|error| error.to_string()));

        let _ = tx.send(WorkerMessage::CatalogueLoaded { label, result });
    });
}

/// Spawns a query run against the loaded catalogue.
pub fn spawn_run_query(
    tx: UnboundedSender<WorkerMessage>,
    catalogue: Arc<Catalogue>,
    display_term: String,
    path: String,
) {
    tokio::spawn(async move {
        let results = run_query(&catalogue, &display_term);
        let _ = tx.send(WorkerMessage::QueryCompleted { path, results });
    });
}
