use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where an event happens, as a deep link into the external map service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Snapshot field name kept from the original data format.
    #[serde(rename = "mapsUrl", default)]
    pub maps_url: String,
}

/// One scheduled activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Stable identity used to correlate rendered rows back to the model.
    #[serde(default = "Uuid::new_v4", deserialize_with = "super::lenient_id")]
    pub id: Uuid,

    /// Free-form time-of-day label ("09:30", "morning") — never validated
    /// against a clock format.
    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub note: String,

    /// Optional map link; created lazily on the first URL edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl TimelineEvent {
    /// A blank event, as appended by the editor's add control.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            time: String::new(),
            title: String::new(),
            note: String::new(),
            location: None,
        }
    }

    /// The map URL, if one has been set to a non-empty value.
    #[must_use]
    pub fn maps_url(&self) -> Option<&str> {
        self.location
            .as_ref()
            .map(|l| l.maps_url.as_str())
            .filter(|u| !u.is_empty())
    }
}
