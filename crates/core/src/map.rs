use crate::models::day::Day;
use crate::models::timeline::TimelineEvent;

/// External map collaborator.
///
/// The planner holds this as an optional adapter; when none is attached,
/// day activation and event focusing simply skip the notification and
/// everything else behaves identically.
pub trait MapAdapter: Send + Sync {
    /// A day was explicitly activated (navigation click).
    fn show_day(&self, day: &Day);

    /// A timeline event row was activated.
    fn focus_event(&self, day: &Day, event: &TimelineEvent);
}
