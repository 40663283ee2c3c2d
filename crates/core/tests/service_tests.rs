// ═══════════════════════════════════════════════════════════════════
// Service Tests — TripService mutations, BudgetService aggregation,
// edit command refresh scopes
// ═══════════════════════════════════════════════════════════════════

use uuid::Uuid;

use trip_planner_core::models::day::{Currency, Day};
use trip_planner_core::models::photo::Photo;
use trip_planner_core::models::timeline::TimelineEvent;
use trip_planner_core::models::trip::Trip;
use trip_planner_core::services::budget_service::{fmt_grouped, BudgetService};
use trip_planner_core::services::edit::{EditCommand, EventField, Refresh};
use trip_planner_core::services::trip_service::TripService;

fn day_with_events(date: &str, count: usize) -> Day {
    let mut day = Day::new(date);
    for i in 0..count {
        let mut event = TimelineEvent::blank();
        event.time = format!("{:02}:00", 9 + i);
        event.title = format!("stop {i}");
        day.timeline.push(event);
    }
    day
}

fn sample_trip() -> Trip {
    Trip {
        header: "Япония".to_string(),
        dates: "10–24 марта".to_string(),
        author: "Masha".to_string(),
        budget: "350 000 ₽".to_string(),
        days: vec![day_with_events("15 марта", 2), day_with_events("16 марта", 3)],
    }
}

// ═══════════════════════════════════════════════════════════════════
// TripService
// ═══════════════════════════════════════════════════════════════════

mod trip_mutations {
    use super::*;

    #[test]
    fn day_text_edits_store_trimmed() {
        let mut trip = sample_trip();
        let day_id = trip.days[0].id;
        let service = TripService::new();

        assert!(service.set_day_title(&mut trip, day_id, "  Tokyo day  "));
        assert!(service.set_day_notes(&mut trip, day_id, " pack light "));
        assert_eq!(trip.days[0].title, "Tokyo day");
        assert_eq!(trip.days[0].notes, "pack light");
    }

    #[test]
    fn date_edit_strips_rendered_ordinal_prefix() {
        let mut trip = sample_trip();
        let day_id = trip.days[1].id;
        let service = TripService::new();

        assert!(service.set_day_date(&mut trip, day_id, "Day 2: 16 March"));
        assert_eq!(trip.days[1].date, "16 March");

        assert!(service.set_day_date(&mut trip, day_id, "day 12:Osaka day"));
        assert_eq!(trip.days[1].date, "Osaka day");

        // No synthesized prefix means nothing to strip.
        assert!(service.set_day_date(&mut trip, day_id, "  17 March "));
        assert_eq!(trip.days[1].date, "17 March");

        assert!(service.set_day_date(&mut trip, day_id, "Day trip to Nara"));
        assert_eq!(trip.days[1].date, "Day trip to Nara");
    }

    #[test]
    fn expense_edits_renormalize_raw_input() {
        let mut trip = sample_trip();
        let day_id = trip.days[0].id;
        let service = TripService::new();

        assert!(service.set_expenses(&mut trip, day_id, "5 000 руб"));
        assert_eq!(trip.days[0].expenses, 5000);

        assert!(service.set_expenses(&mut trip, day_id, ""));
        assert_eq!(trip.days[0].expenses, 0);
    }

    #[test]
    fn currency_edits_store_the_code() {
        let mut trip = sample_trip();
        let day_id = trip.days[0].id;
        let service = TripService::new();

        assert!(service.set_currency(&mut trip, day_id, Currency::Jpy));
        assert_eq!(trip.days[0].currency, Currency::Jpy);
    }

    #[test]
    fn event_field_edits_resolve_by_id() {
        let mut trip = sample_trip();
        let day_id = trip.days[0].id;
        let event_id = trip.days[0].timeline[1].id;
        let service = TripService::new();

        assert!(service.set_event_field(&mut trip, day_id, event_id, EventField::Title, "Ueno"));
        assert!(service.set_event_field(&mut trip, day_id, event_id, EventField::Time, "14:30"));
        assert_eq!(trip.days[0].timeline[1].title, "Ueno");
        assert_eq!(trip.days[0].timeline[1].time, "14:30");
        // The sibling event is untouched.
        assert_eq!(trip.days[0].timeline[0].title, "stop 0");
    }

    #[test]
    fn maps_url_creates_location_on_first_write() {
        let mut trip = sample_trip();
        let day_id = trip.days[0].id;
        let event_id = trip.days[0].timeline[0].id;
        let service = TripService::new();

        assert!(trip.days[0].timeline[0].location.is_none());
        assert!(service.set_event_field(
            &mut trip,
            day_id,
            event_id,
            EventField::MapsUrl,
            "https://maps.example/ueno",
        ));
        assert_eq!(
            trip.days[0].timeline[0].maps_url(),
            Some("https://maps.example/ueno")
        );
    }

    #[test]
    fn add_event_appends_a_blank_row() {
        let mut trip = sample_trip();
        let day_id = trip.days[1].id;
        let service = TripService::new();

        let new_id = service.add_event(&mut trip, day_id).unwrap();
        let day = &trip.days[1];
        assert_eq!(day.timeline.len(), 4);
        let last = day.timeline.last().unwrap();
        assert_eq!(last.id, new_id);
        assert!(last.time.is_empty());
        assert!(last.title.is_empty());
    }

    #[test]
    fn removing_an_event_shifts_the_rest_down() {
        let mut trip = sample_trip();
        let day_id = trip.days[1].id;
        let removed = trip.days[1].timeline[1].id;
        let successor = trip.days[1].timeline[2].id;
        let service = TripService::new();

        assert!(service.remove_event(&mut trip, day_id, removed));
        let day = &trip.days[1];
        assert_eq!(day.timeline.len(), 2);
        // The event formerly at position 2 is now reachable at position 1.
        assert_eq!(day.timeline[1].id, successor);
        assert!(day.event(removed).is_none());
    }

    #[test]
    fn stale_ids_are_silent_noops() {
        let mut trip = sample_trip();
        let before = trip.clone();
        let service = TripService::new();
        let ghost = Uuid::new_v4();

        assert!(!service.set_day_title(&mut trip, ghost, "x"));
        assert!(!service.set_expenses(&mut trip, ghost, "100"));
        assert!(!service.set_currency(&mut trip, ghost, Currency::Jpy));
        assert!(service.add_event(&mut trip, ghost).is_none());

        let live_day = trip.days[0].id;
        assert!(!service.set_event_field(&mut trip, live_day, ghost, EventField::Time, "x"));
        assert!(!service.remove_event(&mut trip, live_day, ghost));
        assert!(!service.clear_photo(&mut trip, ghost));

        assert_eq!(trip, before);
    }

    #[test]
    fn photo_set_and_clear() {
        let mut trip = sample_trip();
        let day_id = trip.days[0].id;
        let service = TripService::new();
        let photo = Photo::from_bytes("image/png", &[1, 2, 3]);

        assert!(service.set_photo(&mut trip, day_id, photo.clone()));
        assert_eq!(trip.days[0].photo.as_ref(), Some(&photo));

        assert!(service.clear_photo(&mut trip, day_id));
        assert!(trip.days[0].photo.is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
// BudgetService
// ═══════════════════════════════════════════════════════════════════

mod budget {
    use super::*;

    fn trip_with_spend(spend: &[(u64, Currency)]) -> Trip {
        let mut trip = Trip::default();
        for (i, (amount, currency)) in spend.iter().enumerate() {
            let mut day = Day::new(format!("day {i}"));
            day.expenses = *amount;
            day.currency = *currency;
            trip.days.push(day);
        }
        trip
    }

    #[test]
    fn mixed_currency_grand_total() {
        let trip = trip_with_spend(&[(100, Currency::Rub), (200, Currency::Jpy)]);
        let summary = BudgetService::new(0.68).summarize(&trip);

        assert_eq!(summary.rub_total, 100);
        assert_eq!(summary.jpy_total, 200);
        assert_eq!(summary.converted_rub, 136);
        assert_eq!(summary.grand_total, 236);
    }

    #[test]
    fn conversion_rounds_to_nearest_integer() {
        let trip = trip_with_spend(&[(3, Currency::Jpy)]);
        // 3 × 0.68 = 2.04
        assert_eq!(BudgetService::new(0.68).summarize(&trip).grand_total, 2);

        let trip = trip_with_spend(&[(5, Currency::Jpy)]);
        // 5 × 0.68 = 3.4
        assert_eq!(BudgetService::new(0.68).summarize(&trip).grand_total, 3);
    }

    #[test]
    fn primary_only_summary_omits_the_breakdown() {
        let trip = trip_with_spend(&[(100, Currency::Rub), (200, Currency::Rub)]);
        let summary = BudgetService::new(0.68).summarize(&trip);
        let text = summary.display();

        assert_eq!(summary.grand_total, 300);
        assert!(text.contains('₽'));
        assert!(!text.contains('¥'));
        assert!(!text.contains("0.68"));
    }

    #[test]
    fn secondary_breakdown_is_auditable_from_the_string() {
        let trip = trip_with_spend(&[(1000, Currency::Rub), (5000, Currency::Jpy)]);
        let summary = BudgetService::new(0.68).summarize(&trip);
        let text = summary.display();

        assert!(text.contains(&fmt_grouped(summary.grand_total)));
        assert!(text.contains(&fmt_grouped(1000)));
        assert!(text.contains(&fmt_grouped(5000)));
        assert!(text.contains("0.68"));
        assert!(text.contains(&fmt_grouped(summary.converted_rub)));
        assert!(text.contains('¥'));
    }

    #[test]
    fn per_day_conversion_hint_math() {
        let budget = BudgetService::new(0.68);
        assert_eq!(budget.to_primary(100, Currency::Rub), 100);
        assert_eq!(budget.to_primary(1200, Currency::Jpy), 816);
    }

    #[test]
    fn empty_trip_totals_zero() {
        let summary = BudgetService::new(0.68).summarize(&Trip::default());
        assert_eq!(summary.grand_total, 0);
        assert_eq!(summary.display(), "Total spent: 0 ₽");
    }

    #[test]
    fn grouping_inserts_thousands_separators() {
        let grouped = fmt_grouped(5000);
        assert!(grouped.starts_with('5'));
        assert!(grouped.ends_with("000"));
        // A separator sits between the groups.
        assert_ne!(grouped, "5000");
        assert!(grouped.chars().count() >= 5);
        assert_eq!(fmt_grouped(500), "500");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Edit command refresh scopes
// ═══════════════════════════════════════════════════════════════════

mod edit_commands {
    use super::*;

    #[test]
    fn text_edits_refresh_nothing() {
        let day_id = Uuid::new_v4();
        assert_eq!(
            EditCommand::SetHeader { value: "x".into() }.refresh(),
            Refresh::None
        );
        assert_eq!(
            EditCommand::SetDayNotes {
                day_id,
                value: "x".into()
            }
            .refresh(),
            Refresh::None
        );
        assert_eq!(
            EditCommand::SetEventField {
                day_id,
                event_id: Uuid::new_v4(),
                field: EventField::Note,
                value: "x".into()
            }
            .refresh(),
            Refresh::None
        );
    }

    #[test]
    fn expense_edits_refresh_totals() {
        assert_eq!(
            EditCommand::SetExpense {
                day_id: Uuid::new_v4(),
                raw: "500".into()
            }
            .refresh(),
            Refresh::Totals
        );
    }

    #[test]
    fn structural_edits_refresh_everything() {
        let day_id = Uuid::new_v4();
        assert_eq!(
            EditCommand::SetCurrency {
                day_id,
                currency: Currency::Jpy
            }
            .refresh(),
            Refresh::Full
        );
        assert_eq!(EditCommand::AddEvent { day_id }.refresh(), Refresh::Full);
        assert_eq!(
            EditCommand::RemoveEvent {
                day_id,
                event_id: Uuid::new_v4()
            }
            .refresh(),
            Refresh::Full
        );
        assert_eq!(EditCommand::ClearPhoto { day_id }.refresh(), Refresh::Full);
    }

    #[test]
    fn commands_round_trip_through_serde() {
        let cmd = EditCommand::SetEventField {
            day_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            field: EventField::MapsUrl,
            value: "https://maps.example/1".to_string(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("set_event_field"));
        assert!(json.contains("maps_url"));
        let back: EditCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}
