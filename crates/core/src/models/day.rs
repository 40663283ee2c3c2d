use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::expense;
use super::photo::Photo;
use super::timeline::TimelineEvent;

/// Expense currency for a day.
///
/// Rubles are the primary currency; yen are converted into rubles for
/// aggregation at a fixed rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "RUB")]
    Rub,
    #[serde(rename = "JPY")]
    Jpy,
}

impl Currency {
    /// Both supported currencies, in selector display order.
    pub const ALL: [Currency; 2] = [Currency::Rub, Currency::Jpy];

    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Rub => "₽",
            Currency::Jpy => "¥",
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Jpy => "JPY",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One calendar day's plan: notes, timeline, spend and an optional photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Stable identity; the join key between rendered sections and the model.
    /// The 1-based "Day N" ordinal is derived at render time, never stored.
    #[serde(default = "Uuid::new_v4", deserialize_with = "super::lenient_id")]
    pub id: Uuid,

    /// Free-form display date ("15 марта", "March 15").
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub notes: String,

    /// Timed events in insertion/edit order. Deleting one shifts the rest.
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,

    /// Canonical non-negative spend. Legacy snapshots may store this as
    /// text ("5000 руб"); deserialization normalizes it.
    #[serde(default, deserialize_with = "expense::deserialize")]
    pub expenses: u64,

    #[serde(default)]
    pub currency: Currency,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
}

impl Day {
    /// A new empty day with a fresh identity.
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: date.into(),
            title: String::new(),
            notes: String::new(),
            timeline: Vec::new(),
            expenses: 0,
            currency: Currency::default(),
            photo: None,
        }
    }

    /// Find an event by id.
    #[must_use]
    pub fn event(&self, event_id: Uuid) -> Option<&TimelineEvent> {
        self.timeline.iter().find(|e| e.id == event_id)
    }

    pub fn event_mut(&mut self, event_id: Uuid) -> Option<&mut TimelineEvent> {
        self.timeline.iter_mut().find(|e| e.id == event_id)
    }
}
