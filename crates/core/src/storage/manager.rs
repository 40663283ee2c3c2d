use log::{info, warn};

use crate::errors::CoreError;
use crate::models::trip::Trip;
use crate::remote::traits::RemoteStore;

use super::cache::SnapshotCache;

/// Where the startup snapshot actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// A snapshot baked into the document itself (exported artifacts).
    Embedded,
    /// The local key-value cache.
    Cache,
    /// The remote default itinerary.
    Remote,
    /// Every source failed or was empty; the hard-coded empty trip.
    Default,
}

/// Snapshot codec plus the startup load ladder.
///
/// High-level storage operations only; the actual byte transport lives in
/// the cache and remote collaborators.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a trip for the cache.
    pub fn encode(trip: &Trip) -> Result<String, CoreError> {
        serde_json::to_string(trip)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize trip: {e}")))
    }

    /// Parse a snapshot. Day expenses and missing ids normalize during
    /// deserialization, so the returned trip is already canonical.
    pub fn decode(json: &str) -> Result<Trip, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse trip snapshot: {e}")))
    }

    /// Persist the whole trip under the snapshot key. Synchronous and
    /// unconditional — every mutation rewrites the full snapshot.
    pub fn persist(
        cache: &dyn SnapshotCache,
        key: &str,
        trip: &Trip,
    ) -> Result<(), CoreError> {
        let json = Self::encode(trip)?;
        cache.put(key, &json)
    }

    /// The startup load ladder: embedded snapshot, then cache, then remote
    /// default, then the empty trip. Transport and parse failures degrade
    /// to the next rung; this never returns an error.
    pub async fn load(
        cache: &dyn SnapshotCache,
        remote: Option<&dyn RemoteStore>,
        key: &str,
        embedded: Option<&str>,
    ) -> (Trip, LoadSource) {
        if let Some(json) = embedded {
            match Self::decode(json) {
                Ok(trip) => {
                    info!("loaded trip from embedded snapshot");
                    return (trip, LoadSource::Embedded);
                }
                Err(e) => warn!("embedded snapshot unusable, trying cache: {e}"),
            }
        }

        match cache.get(key) {
            Ok(Some(json)) => match Self::decode(&json) {
                Ok(trip) => {
                    info!("loaded trip from cache key {key}");
                    return (trip, LoadSource::Cache);
                }
                Err(e) => warn!("cached snapshot unusable, trying remote: {e}"),
            },
            Ok(None) => {}
            Err(e) => warn!("cache read failed, trying remote: {e}"),
        }

        if let Some(remote) = remote {
            match remote.fetch_default().await {
                Ok(trip) => {
                    info!("loaded trip from remote default");
                    return (trip, LoadSource::Remote);
                }
                Err(e) => warn!("remote load failed, falling back to empty trip: {e}"),
            }
        }

        (Trip::default(), LoadSource::Default)
    }

    // ── Devmode flag ────────────────────────────────────────────────

    /// Read a boolean-ish flag; "1" (or any non-empty value except "0")
    /// means set. Missing keys and cache failures read as unset.
    pub fn load_flag(cache: &dyn SnapshotCache, key: &str) -> bool {
        match cache.get(key) {
            Ok(Some(value)) => !value.is_empty() && value != "0",
            Ok(None) => false,
            Err(e) => {
                warn!("flag read failed for {key}: {e}");
                false
            }
        }
    }

    /// Store a boolean-ish flag with the same "1" / empty encoding the
    /// original page used.
    pub fn store_flag(
        cache: &dyn SnapshotCache,
        key: &str,
        value: bool,
    ) -> Result<(), CoreError> {
        cache.put(key, if value { "1" } else { "" })
    }
}
