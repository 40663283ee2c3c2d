use serde_json::Value;
use uuid::Uuid;

use crate::models::day::Currency;
use crate::models::expense::normalize_expense;
use crate::models::photo::Photo;
use crate::models::timeline::{Location, TimelineEvent};
use crate::models::trip::Trip;

use super::edit::EventField;

/// Id-addressed mutation of the trip structure.
///
/// Pure business logic — no I/O. Every method returns whether it applied:
/// a day or event id that no longer resolves (the row was deleted under the
/// handler) is a silent no-op, never a panic and never an error.
pub struct TripService;

impl TripService {
    pub fn new() -> Self {
        Self
    }

    // ── Day fields ──────────────────────────────────────────────────

    /// Store a day's display date. The editable heading is rendered as
    /// "Day N: <date>", so a leading ordinal prefix is stripped before
    /// storing — it is synthesized at render time and must not persist.
    pub fn set_day_date(&self, trip: &mut Trip, day_id: Uuid, value: &str) -> bool {
        let Some(day) = trip.day_mut(day_id) else {
            return false;
        };
        day.date = strip_ordinal_prefix(value).to_string();
        true
    }

    pub fn set_day_title(&self, trip: &mut Trip, day_id: Uuid, value: &str) -> bool {
        let Some(day) = trip.day_mut(day_id) else {
            return false;
        };
        day.title = value.trim().to_string();
        true
    }

    pub fn set_day_notes(&self, trip: &mut Trip, day_id: Uuid, value: &str) -> bool {
        let Some(day) = trip.day_mut(day_id) else {
            return false;
        };
        day.notes = value.trim().to_string();
        true
    }

    /// Store a day's expense from raw editor input, re-normalized so free
    /// text like "5 000 руб" converges to a canonical integer.
    pub fn set_expenses(&self, trip: &mut Trip, day_id: Uuid, raw: &str) -> bool {
        let Some(day) = trip.day_mut(day_id) else {
            return false;
        };
        day.expenses = normalize_expense(&Value::String(raw.to_string()));
        true
    }

    pub fn set_currency(&self, trip: &mut Trip, day_id: Uuid, currency: Currency) -> bool {
        let Some(day) = trip.day_mut(day_id) else {
            return false;
        };
        day.currency = currency;
        true
    }

    // ── Timeline events ─────────────────────────────────────────────

    /// Write one field of an event. The map URL nests under the event's
    /// location, which is created on first write.
    pub fn set_event_field(
        &self,
        trip: &mut Trip,
        day_id: Uuid,
        event_id: Uuid,
        field: EventField,
        value: &str,
    ) -> bool {
        let Some(event) = trip
            .day_mut(day_id)
            .and_then(|d| d.event_mut(event_id))
        else {
            return false;
        };
        match field {
            EventField::Time => event.time = value.to_string(),
            EventField::Title => event.title = value.to_string(),
            EventField::Note => event.note = value.to_string(),
            EventField::MapsUrl => {
                event
                    .location
                    .get_or_insert_with(Location::default)
                    .maps_url = value.to_string();
            }
        }
        true
    }

    /// Append a blank event to a day. Returns the new event's id.
    pub fn add_event(&self, trip: &mut Trip, day_id: Uuid) -> Option<Uuid> {
        let day = trip.day_mut(day_id)?;
        let event = TimelineEvent::blank();
        let id = event.id;
        day.timeline.push(event);
        Some(id)
    }

    /// Remove an event; subsequent events shift down one position.
    pub fn remove_event(&self, trip: &mut Trip, day_id: Uuid, event_id: Uuid) -> bool {
        let Some(day) = trip.day_mut(day_id) else {
            return false;
        };
        let Some(pos) = day.timeline.iter().position(|e| e.id == event_id) else {
            return false;
        };
        day.timeline.remove(pos);
        true
    }

    // ── Photo ───────────────────────────────────────────────────────

    pub fn set_photo(&self, trip: &mut Trip, day_id: Uuid, photo: Photo) -> bool {
        let Some(day) = trip.day_mut(day_id) else {
            return false;
        };
        day.photo = Some(photo);
        true
    }

    pub fn clear_photo(&self, trip: &mut Trip, day_id: Uuid) -> bool {
        let Some(day) = trip.day_mut(day_id) else {
            return false;
        };
        day.photo = None;
        true
    }
}

impl Default for TripService {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip a synthesized "Day N:" heading prefix, case-insensitively.
/// Anything that does not match the exact `Day <digits>:` shape is kept.
fn strip_ordinal_prefix(value: &str) -> &str {
    let trimmed = value.trim();
    let Some(prefix) = trimmed.get(..3) else {
        return trimmed;
    };
    if !prefix.eq_ignore_ascii_case("day") {
        return trimmed;
    }
    let rest = trimmed[3..].trim_start();
    let digit_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digit_end == 0 {
        return trimmed;
    }
    match rest[digit_end..].trim_start().strip_prefix(':') {
        Some(after) => after.trim_start(),
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::strip_ordinal_prefix;

    #[test]
    fn strips_exact_prefix() {
        assert_eq!(strip_ordinal_prefix("Day 2: March 15"), "March 15");
        assert_eq!(strip_ordinal_prefix("day 10:Osaka"), "Osaka");
        assert_eq!(strip_ordinal_prefix("DAY 1 : arrival"), "arrival");
    }

    #[test]
    fn keeps_non_matching_text() {
        assert_eq!(strip_ordinal_prefix("March 15"), "March 15");
        assert_eq!(strip_ordinal_prefix("Daytona: beach"), "Daytona: beach");
        assert_eq!(strip_ordinal_prefix("Day trip to Nara"), "Day trip to Nara");
        assert_eq!(strip_ordinal_prefix(""), "");
    }
}
