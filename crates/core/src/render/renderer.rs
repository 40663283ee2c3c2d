use uuid::Uuid;

use crate::models::day::{Currency, Day};
use crate::models::timeline::TimelineEvent;
use crate::models::trip::Trip;
use crate::services::budget_service::{fmt_grouped, BudgetService};
use crate::services::edit::EventField;

use super::view::{
    anchor_for, Binding, DayField, DaySection, Document, EventEditor, EventLink, EventRow,
    FieldView, MediaView, NavButton, PhotoPreview, SpendEditor, SpendReadOnly, SpendView,
    TextInput, TripField, TripHeader,
};

/// Rendering mode, driven by the persisted devmode flag. The two modes are
/// mutually exclusive for the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ReadOnly,
    Editable,
}

/// Projects the trip into a display-ready view tree.
///
/// The renderer produces data, not side effects: the embedding shell walks
/// the `Document` and materializes widgets, feeding interactions back as
/// edit commands through each element's binding.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the full document. Header, navigation and day sections are
    /// always produced together so the navigation button count matches the
    /// day list before any activation can happen.
    #[must_use]
    pub fn render(
        &self,
        trip: &Trip,
        mode: Mode,
        budget: &BudgetService,
        active_day: Option<Uuid>,
    ) -> Document {
        Document {
            header: self.render_header(trip, mode),
            nav: self.render_nav(trip, active_day),
            days: trip
                .days
                .iter()
                .enumerate()
                .map(|(position, day)| self.render_day(day, position, mode, budget))
                .collect(),
        }
    }

    fn render_header(&self, trip: &Trip, mode: Mode) -> TripHeader {
        TripHeader {
            title: field(mode, Binding::Trip(TripField::Header), trip.header.clone()),
            dates: field(mode, Binding::Trip(TripField::Dates), trip.dates.clone()),
            author: field(mode, Binding::Trip(TripField::Author), trip.author.clone()),
            budget: field(mode, Binding::Trip(TripField::Budget), trip.budget.clone()),
        }
    }

    /// One button per day in display order. A freshly rendered navigation
    /// marks the first day active when no explicit activation happened yet.
    fn render_nav(&self, trip: &Trip, active_day: Option<Uuid>) -> Vec<NavButton> {
        let active = active_day.or_else(|| trip.days.first().map(|d| d.id));
        trip.days
            .iter()
            .enumerate()
            .map(|(position, day)| NavButton {
                day_id: day.id,
                label: format!("Day {}", position + 1),
                active: Some(day.id) == active,
            })
            .collect()
    }

    fn render_day(
        &self,
        day: &Day,
        position: usize,
        mode: Mode,
        budget: &BudgetService,
    ) -> DaySection {
        let heading = field(
            mode,
            Binding::Day {
                day_id: day.id,
                field: DayField::Date,
            },
            format!("Day {}: {}", position + 1, day.date),
        );

        DaySection {
            day_id: day.id,
            anchor: anchor_for(day.id),
            heading,
            title: field(
                mode,
                Binding::Day {
                    day_id: day.id,
                    field: DayField::Title,
                },
                day.title.clone(),
            ),
            notes: field(
                mode,
                Binding::Day {
                    day_id: day.id,
                    field: DayField::Notes,
                },
                day.notes.clone(),
            ),
            spend: self.render_spend(day, mode, budget),
            timeline: day
                .timeline
                .iter()
                .map(|event| self.render_event(day.id, event, mode))
                .collect(),
            add_event: match mode {
                Mode::ReadOnly => None,
                Mode::Editable => Some(Binding::AddEvent { day_id: day.id }),
            },
            media: self.render_media(day, mode),
        }
    }

    fn render_spend(&self, day: &Day, mode: Mode, budget: &BudgetService) -> SpendView {
        match mode {
            Mode::ReadOnly => {
                let converted_hint = (day.currency == Currency::Jpy).then(|| {
                    format!(
                        "≈ {} ₽",
                        fmt_grouped(budget.to_primary(day.expenses, day.currency))
                    )
                });
                SpendView::ReadOnly(SpendReadOnly {
                    display: format!(
                        "{} {}",
                        fmt_grouped(day.expenses),
                        day.currency.symbol()
                    ),
                    converted_hint,
                })
            }
            Mode::Editable => SpendView::Editor(SpendEditor {
                amount: day.expenses,
                amount_binding: Binding::Expense { day_id: day.id },
                currency: day.currency,
                currency_binding: Binding::Currency { day_id: day.id },
                options: &Currency::ALL,
            }),
        }
    }

    fn render_event(&self, day_id: Uuid, event: &TimelineEvent, mode: Mode) -> EventRow {
        match mode {
            Mode::ReadOnly => EventRow::Link(EventLink {
                event_id: event.id,
                time: event.time.clone(),
                title: event.title.clone(),
                note: event.note.clone(),
                maps_url: event.maps_url().map(str::to_string),
            }),
            Mode::Editable => {
                let input = |field: EventField, value: &str, placeholder: &'static str| TextInput {
                    binding: Binding::Event {
                        day_id,
                        event_id: event.id,
                        field,
                    },
                    value: value.to_string(),
                    placeholder,
                };
                EventRow::Editor(EventEditor {
                    event_id: event.id,
                    time: input(EventField::Time, &event.time, "Time"),
                    title: input(EventField::Title, &event.title, "Title"),
                    maps_url: input(
                        EventField::MapsUrl,
                        event.maps_url().unwrap_or(""),
                        "Google Maps URL (optional)",
                    ),
                    note: input(EventField::Note, &event.note, "Note"),
                    remove: Binding::RemoveEvent {
                        day_id,
                        event_id: event.id,
                    },
                })
            }
        }
    }

    fn render_media(&self, day: &Day, mode: Mode) -> MediaView {
        match mode {
            Mode::ReadOnly => match &day.photo {
                Some(photo) => MediaView::Photo {
                    data_uri: photo.as_data_uri().to_string(),
                },
                None => MediaView::MapPlaceholder,
            },
            Mode::Editable => MediaView::Editor {
                upload: Binding::UploadPhoto { day_id: day.id },
                photo: day.photo.as_ref().map(|photo| PhotoPreview {
                    data_uri: photo.as_data_uri().to_string(),
                    remove: Binding::RemovePhoto { day_id: day.id },
                }),
            },
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn field(mode: Mode, binding: Binding, value: String) -> FieldView {
    match mode {
        Mode::ReadOnly => FieldView::Static(value),
        Mode::Editable => FieldView::Editable { binding, value },
    }
}
