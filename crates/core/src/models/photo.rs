use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A day photo stored as a self-contained `data:` URI.
///
/// Keeping the binary payload inline means the snapshot round-trips through
/// the key-value cache and exported documents without any external file
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Photo(String);

impl Photo {
    /// Wrap an already-encoded `data:` URI (e.g. from an upload control).
    pub fn from_data_uri(uri: impl Into<String>) -> Result<Self, CoreError> {
        let uri = uri.into();
        if !uri.starts_with("data:") {
            return Err(CoreError::InvalidImage(
                "expected a data: URI".to_string(),
            ));
        }
        Ok(Self(uri))
    }

    /// Encode raw image bytes into a `data:` URI.
    #[must_use]
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    #[must_use]
    pub fn as_data_uri(&self) -> &str {
        &self.0
    }
}
