use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::day::Day;

/// The whole itinerary document: header metadata plus the ordered day list.
///
/// Loaded once per session and owned exclusively by it; every mutation is
/// followed by a full persist of this structure, never a delta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default)]
    pub header: String,

    /// Display date range ("10–24 March").
    #[serde(default)]
    pub dates: String,

    #[serde(default)]
    pub author: String,

    /// Display budget text, rendered verbatim.
    #[serde(default)]
    pub budget: String,

    /// Days in insertion order, which is display order. Never sorted.
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Trip {
    #[must_use]
    pub fn day(&self, day_id: Uuid) -> Option<&Day> {
        self.days.iter().find(|d| d.id == day_id)
    }

    pub fn day_mut(&mut self, day_id: Uuid) -> Option<&mut Day> {
        self.days.iter_mut().find(|d| d.id == day_id)
    }

    /// 0-based display position of a day.
    #[must_use]
    pub fn day_position(&self, day_id: Uuid) -> Option<usize> {
        self.days.iter().position(|d| d.id == day_id)
    }
}
