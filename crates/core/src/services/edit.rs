use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::day::Currency;
use crate::models::photo::Photo;

/// Which field of a timeline event an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventField {
    Time,
    Title,
    Note,
    MapsUrl,
}

/// One user edit coming back from the editable rendering.
///
/// Each variant corresponds to one class of interactive element; the ids it
/// carries come from that element's binding, so the edit resolves to a model
/// location without positional ambiguity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditCommand {
    SetHeader { value: String },
    SetDates { value: String },
    SetAuthor { value: String },
    SetBudget { value: String },

    SetDayDate { day_id: Uuid, value: String },
    SetDayTitle { day_id: Uuid, value: String },
    SetDayNotes { day_id: Uuid, value: String },
    SetExpense { day_id: Uuid, raw: String },
    SetCurrency { day_id: Uuid, currency: Currency },

    SetEventField {
        day_id: Uuid,
        event_id: Uuid,
        field: EventField,
        value: String,
    },
    AddEvent { day_id: Uuid },
    RemoveEvent { day_id: Uuid, event_id: Uuid },

    SetPhoto { day_id: Uuid, photo: Photo },
    ClearPhoto { day_id: Uuid },
}

/// How much of the UI must refresh after an applied edit.
///
/// Text edits happen in place; expense edits only move the totals; anything
/// that changes structure, currency symbols or media forces a full
/// re-render (which implies a totals recompute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    None,
    Totals,
    Full,
}

impl EditCommand {
    /// Refresh scope this command requires once applied.
    #[must_use]
    pub fn refresh(&self) -> Refresh {
        match self {
            EditCommand::SetExpense { .. } => Refresh::Totals,
            EditCommand::SetCurrency { .. }
            | EditCommand::AddEvent { .. }
            | EditCommand::RemoveEvent { .. }
            | EditCommand::SetPhoto { .. }
            | EditCommand::ClearPhoto { .. } => Refresh::Full,
            _ => Refresh::None,
        }
    }
}

/// Result of dispatching an edit: whether it hit a live target, and what
/// the embedding UI must refresh. Ignored edits never require a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    pub applied: bool,
    pub refresh: Refresh,
}

impl EditOutcome {
    pub(crate) fn ignored() -> Self {
        Self {
            applied: false,
            refresh: Refresh::None,
        }
    }
}
