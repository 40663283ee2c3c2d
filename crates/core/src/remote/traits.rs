use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::trip::Trip;

/// Receipt returned by the document-save endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDocument {
    /// Server-assigned file name of the stored document.
    pub filename: String,
}

/// Remote load/save collaborator.
///
/// Everything here is best-effort from the planner's point of view: a
/// failing remote never blocks the local cache, which remains the source
/// of truth for the session.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RemoteStore: Send + Sync {
    /// Fetch the default itinerary document.
    async fn fetch_default(&self) -> Result<Trip, CoreError>;

    /// Push the JSON-serialized trip to the fixed resource path.
    async fn save_snapshot(&self, trip: &Trip) -> Result<(), CoreError>;

    /// Upload an exported self-contained document; returns the
    /// server-assigned filename on success.
    async fn save_document(&self, html: &str) -> Result<SavedDocument, CoreError>;
}
