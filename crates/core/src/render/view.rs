use uuid::Uuid;

use crate::models::day::Currency;
use crate::services::edit::EventField;

/// Trip-level fields an editable control can write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripField {
    Header,
    Dates,
    Author,
    Budget,
}

/// Day-level text fields an editable control can write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayField {
    Date,
    Title,
    Notes,
}

/// Identifies the model location an interactive element resolves to.
///
/// Bindings carry stable entity ids, not display positions, so a control
/// rendered before a deletion still resolves unambiguously (or not at all)
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Trip(TripField),
    Day { day_id: Uuid, field: DayField },
    Expense { day_id: Uuid },
    Currency { day_id: Uuid },
    Event {
        day_id: Uuid,
        event_id: Uuid,
        field: EventField,
    },
    AddEvent { day_id: Uuid },
    RemoveEvent { day_id: Uuid, event_id: Uuid },
    UploadPhoto { day_id: Uuid },
    RemovePhoto { day_id: Uuid },
}

/// A text field in one of the two rendering modes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldView {
    Static(String),
    Editable { binding: Binding, value: String },
}

impl FieldView {
    /// The displayed text regardless of mode.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            FieldView::Static(value) => value,
            FieldView::Editable { value, .. } => value,
        }
    }

    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, FieldView::Editable { .. })
    }
}

/// Trip header block: title, date range, author, budget text.
#[derive(Debug, Clone, PartialEq)]
pub struct TripHeader {
    pub title: FieldView,
    pub dates: FieldView,
    pub author: FieldView,
    pub budget: FieldView,
}

/// One day-navigation button.
#[derive(Debug, Clone, PartialEq)]
pub struct NavButton {
    pub day_id: Uuid,
    /// "Day N" in display order.
    pub label: String,
    pub active: bool,
}

/// An editable text input with its model binding.
#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    pub binding: Binding,
    pub value: String,
    pub placeholder: &'static str,
}

/// A timeline row in read-only mode: activating it focuses the event on the
/// map and opens `maps_url` when present.
#[derive(Debug, Clone, PartialEq)]
pub struct EventLink {
    pub event_id: Uuid,
    pub time: String,
    pub title: String,
    pub note: String,
    pub maps_url: Option<String>,
}

/// A timeline row in editable mode: one bound input per field plus the
/// delete control.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEditor {
    pub event_id: Uuid,
    pub time: TextInput,
    pub title: TextInput,
    pub maps_url: TextInput,
    pub note: TextInput,
    pub remove: Binding,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventRow {
    Link(EventLink),
    Editor(EventEditor),
}

/// Per-day spend block, read-only form.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendReadOnly {
    /// Grouped amount with currency symbol, e.g. "5 000 ₽".
    pub display: String,
    /// Converted-amount hint, present for secondary-currency days.
    pub converted_hint: Option<String>,
}

/// Per-day spend block, editable form: numeric input plus currency selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendEditor {
    pub amount: u64,
    pub amount_binding: Binding,
    pub currency: Currency,
    pub currency_binding: Binding,
    pub options: &'static [Currency],
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpendView {
    ReadOnly(SpendReadOnly),
    Editor(SpendEditor),
}

/// Current photo shown inside the media editor, with its delete control.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoPreview {
    pub data_uri: String,
    pub remove: Binding,
}

/// The photo/map column of a day section.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaView {
    Photo { data_uri: String },
    MapPlaceholder,
    Editor {
        upload: Binding,
        photo: Option<PhotoPreview>,
    },
}

/// One rendered day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySection {
    pub day_id: Uuid,
    /// Scroll target, stable across renders.
    pub anchor: String,
    /// "Day N: <date>" — the ordinal is synthesized here and stripped again
    /// when the heading is edited.
    pub heading: FieldView,
    pub title: FieldView,
    pub notes: FieldView,
    pub spend: SpendView,
    pub timeline: Vec<EventRow>,
    /// Present only in editable mode.
    pub add_event: Option<Binding>,
    pub media: MediaView,
}

/// The full view tree: header, day navigation and day sections, always
/// rendered together so navigation never references a missing section.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub header: TripHeader,
    pub nav: Vec<NavButton>,
    pub days: Vec<DaySection>,
}

/// Scroll anchor for a day section.
#[must_use]
pub fn anchor_for(day_id: Uuid) -> String {
    format!("day-{day_id}")
}
