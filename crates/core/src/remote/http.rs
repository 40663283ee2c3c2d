use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::config::PlannerConfig;
use crate::errors::CoreError;
use crate::models::trip::Trip;

use super::traits::{RemoteStore, SavedDocument};

/// HTTP implementation of the remote collaborator.
///
/// - `GET remote_data_url` → default itinerary JSON
/// - `POST remote_snapshot_url` ← JSON-serialized trip
/// - `POST document_save_url` ← exported document as an `html` form field,
///   answered with `{ ok, filename, error }`
pub struct HttpRemoteStore {
    client: Client,
    data_url: String,
    snapshot_url: String,
    document_url: String,
}

impl HttpRemoteStore {
    pub fn new(config: &PlannerConfig) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            data_url: config.remote_data_url.clone(),
            snapshot_url: config.remote_snapshot_url.clone(),
            document_url: config.document_save_url.clone(),
        }
    }
}

// ── Save endpoint response body ─────────────────────────────────────

#[derive(Deserialize)]
struct SaveResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RemoteStore for HttpRemoteStore {
    async fn fetch_default(&self) -> Result<Trip, CoreError> {
        let resp = self.client.get(&self.data_url).send().await?;
        if !resp.status().is_success() {
            return Err(CoreError::Api {
                endpoint: self.data_url.clone(),
                message: format!("unexpected status {}", resp.status()),
            });
        }
        resp.json::<Trip>().await.map_err(|e| CoreError::Api {
            endpoint: self.data_url.clone(),
            message: format!("failed to parse itinerary document: {e}"),
        })
    }

    async fn save_snapshot(&self, trip: &Trip) -> Result<(), CoreError> {
        let resp = self
            .client
            .post(&self.snapshot_url)
            .json(trip)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(CoreError::Api {
                endpoint: self.snapshot_url.clone(),
                message: format!("unexpected status {}", resp.status()),
            });
        }
        Ok(())
    }

    async fn save_document(&self, html: &str) -> Result<SavedDocument, CoreError> {
        let resp = self
            .client
            .post(&self.document_url)
            .form(&[("html", html)])
            .send()
            .await?;
        let body: SaveResponse = resp.json().await.map_err(|e| CoreError::Api {
            endpoint: self.document_url.clone(),
            message: format!("failed to parse save response: {e}"),
        })?;
        if body.ok {
            Ok(SavedDocument {
                filename: body.filename.unwrap_or_default(),
            })
        } else {
            Err(CoreError::SaveRejected(
                body.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}
