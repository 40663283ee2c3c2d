pub mod config;
pub mod errors;
pub mod export;
pub mod map;
pub mod models;
pub mod remote;
pub mod render;
pub mod services;
pub mod storage;

use log::{debug, warn};
use uuid::Uuid;

use config::PlannerConfig;
use errors::CoreError;
use export::ExportAssets;
use map::MapAdapter;
use models::trip::Trip;
use remote::traits::{RemoteStore, SavedDocument};
use render::nav::active_section_for_scroll;
use render::renderer::{Mode, Renderer};
use render::view::{anchor_for, Document};
use services::budget_service::{BudgetService, SpendingSummary};
use services::edit::{EditCommand, EditOutcome};
use services::trip_service::TripService;
use storage::cache::SnapshotCache;
use storage::manager::{LoadSource, StorageManager};

/// How the startup load went. `Default` means every configured source
/// failed or was empty — the shell should show its blocking notice, but the
/// planner stays alive on the empty trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
}

impl LoadReport {
    #[must_use]
    pub fn all_sources_failed(&self) -> bool {
        self.source == LoadSource::Default
    }
}

/// Outcome of a best-effort remote save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    /// The remote was unreachable or rejected the payload; the local cache
    /// already holds the data, so this is a notice, not a failure.
    SavedLocally { notice: String },
}

const SAVED_LOCALLY_NOTICE: &str = "Server unavailable — changes saved locally";

/// Main entry point for the trip-planner core library.
/// Holds the trip state, the persisted devmode flag and all collaborators.
#[must_use]
pub struct TripPlanner {
    trip: Trip,
    devmode: bool,
    active_day: Option<Uuid>,
    config: PlannerConfig,
    cache: Box<dyn SnapshotCache>,
    remote: Option<Box<dyn RemoteStore>>,
    map: Option<Box<dyn MapAdapter>>,
    trip_service: TripService,
    budget_service: BudgetService,
    renderer: Renderer,
}

impl std::fmt::Debug for TripPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripPlanner")
            .field("days", &self.trip.days.len())
            .field("devmode", &self.devmode)
            .field("active_day", &self.active_day)
            .finish()
    }
}

impl TripPlanner {
    /// Load a planner session through the source ladder: embedded snapshot,
    /// then cache, then remote default, then the empty trip. Never fails;
    /// the report says which source won.
    pub async fn load(
        config: PlannerConfig,
        cache: Box<dyn SnapshotCache>,
        remote: Option<Box<dyn RemoteStore>>,
        map: Option<Box<dyn MapAdapter>>,
        embedded_snapshot: Option<&str>,
    ) -> (Self, LoadReport) {
        let (trip, source) = StorageManager::load(
            cache.as_ref(),
            remote.as_deref(),
            &config.snapshot_key,
            embedded_snapshot,
        )
        .await;
        let devmode = StorageManager::load_flag(cache.as_ref(), &config.devmode_key);
        let planner = Self::build(trip, devmode, config, cache, remote, map);
        (planner, LoadReport { source })
    }

    /// Create a planner over an empty trip, skipping the load ladder.
    pub fn create_new(config: PlannerConfig, cache: Box<dyn SnapshotCache>) -> Self {
        Self::build(Trip::default(), false, config, cache, None, None)
    }

    /// Attach the optional map collaborator after construction.
    pub fn attach_map(&mut self, map: Box<dyn MapAdapter>) {
        self.map = Some(map);
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Project the current trip into the full view tree for the current
    /// mode. Header, navigation and days always come out together, so the
    /// navigation button count matches the day list.
    #[must_use]
    pub fn render(&self) -> Document {
        self.renderer.render(
            &self.trip,
            self.mode(),
            &self.budget_service,
            self.active_day,
        )
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.devmode {
            Mode::Editable
        } else {
            Mode::ReadOnly
        }
    }

    // ── Devmode ─────────────────────────────────────────────────────

    #[must_use]
    pub fn devmode(&self) -> bool {
        self.devmode
    }

    /// Flip the rendering mode and persist the flag. Returns the freshly
    /// rendered document; a cache failure on the flag write is logged and
    /// ignored so the toggle itself always succeeds.
    pub fn set_devmode(&mut self, devmode: bool) -> Document {
        self.devmode = devmode;
        if let Err(e) =
            StorageManager::store_flag(self.cache.as_ref(), &self.config.devmode_key, devmode)
        {
            warn!("devmode flag not persisted: {e}");
        }
        self.render()
    }

    pub fn toggle_devmode(&mut self) -> Document {
        self.set_devmode(!self.devmode)
    }

    // ── Editing ─────────────────────────────────────────────────────

    /// Dispatch one edit from the editable rendering.
    ///
    /// A command whose day/event id no longer resolves is ignored (the row
    /// was deleted under the control) — no mutation, no error. Applied
    /// mutations persist the whole trip before the refresh scope is
    /// reported, so a reload at any later point sees the edit.
    pub fn apply(&mut self, cmd: EditCommand) -> Result<EditOutcome, CoreError> {
        let applied = self.apply_to_store(&cmd);
        if !applied {
            debug!("edit ignored, target no longer exists: {cmd:?}");
            return Ok(EditOutcome::ignored());
        }
        self.persist()?;
        Ok(EditOutcome {
            applied: true,
            refresh: cmd.refresh(),
        })
    }

    fn apply_to_store(&mut self, cmd: &EditCommand) -> bool {
        let trip = &mut self.trip;
        match cmd {
            EditCommand::SetHeader { value } => {
                trip.header = value.trim().to_string();
                true
            }
            EditCommand::SetDates { value } => {
                trip.dates = value.trim().to_string();
                true
            }
            EditCommand::SetAuthor { value } => {
                trip.author = value.trim().to_string();
                true
            }
            EditCommand::SetBudget { value } => {
                trip.budget = value.trim().to_string();
                true
            }
            EditCommand::SetDayDate { day_id, value } => {
                self.trip_service.set_day_date(trip, *day_id, value)
            }
            EditCommand::SetDayTitle { day_id, value } => {
                self.trip_service.set_day_title(trip, *day_id, value)
            }
            EditCommand::SetDayNotes { day_id, value } => {
                self.trip_service.set_day_notes(trip, *day_id, value)
            }
            EditCommand::SetExpense { day_id, raw } => {
                self.trip_service.set_expenses(trip, *day_id, raw)
            }
            EditCommand::SetCurrency { day_id, currency } => {
                self.trip_service.set_currency(trip, *day_id, *currency)
            }
            EditCommand::SetEventField {
                day_id,
                event_id,
                field,
                value,
            } => self
                .trip_service
                .set_event_field(trip, *day_id, *event_id, *field, value),
            EditCommand::AddEvent { day_id } => {
                self.trip_service.add_event(trip, *day_id).is_some()
            }
            EditCommand::RemoveEvent { day_id, event_id } => {
                self.trip_service.remove_event(trip, *day_id, *event_id)
            }
            EditCommand::SetPhoto { day_id, photo } => {
                self.trip_service.set_photo(trip, *day_id, photo.clone())
            }
            EditCommand::ClearPhoto { day_id } => {
                self.trip_service.clear_photo(trip, *day_id)
            }
        }
    }

    fn persist(&self) -> Result<(), CoreError> {
        StorageManager::persist(self.cache.as_ref(), &self.config.snapshot_key, &self.trip)
    }

    // ── Budget ──────────────────────────────────────────────────────

    /// Recompute the spending aggregate for the current trip.
    #[must_use]
    pub fn summary(&self) -> SpendingSummary {
        self.budget_service.summarize(&self.trip)
    }

    // ── Navigation & map ────────────────────────────────────────────

    #[must_use]
    pub fn active_day(&self) -> Option<Uuid> {
        self.active_day
    }

    /// Explicitly activate a day (navigation click): marks it active,
    /// notifies the map collaborator and returns the scroll anchor.
    /// Unknown ids are a no-op.
    pub fn activate_day(&mut self, day_id: Uuid) -> Option<String> {
        let day = self.trip.day(day_id)?;
        if let Some(map) = &self.map {
            map.show_day(day);
        }
        self.active_day = Some(day_id);
        Some(anchor_for(day_id))
    }

    /// Activate a timeline event (read-only row click): focuses it on the
    /// map and returns the URL to open, if the event carries one.
    pub fn activate_event(&self, day_id: Uuid, event_id: Uuid) -> Option<String> {
        let day = self.trip.day(day_id)?;
        let event = day.event(event_id)?;
        if let Some(map) = &self.map {
            map.focus_event(day, event);
        }
        event.maps_url().map(str::to_string)
    }

    /// Passive scroll tracking: mark the day section closest to the scroll
    /// offset (plus the configured header bias) active, without any map
    /// notification. Returns the now-active day.
    pub fn set_active_by_scroll(
        &mut self,
        section_offsets: &[f64],
        scroll_y: f64,
    ) -> Option<Uuid> {
        let index = active_section_for_scroll(
            section_offsets,
            scroll_y,
            self.config.scroll_header_bias,
        )?;
        let day_id = self.trip.days.get(index)?.id;
        self.active_day = Some(day_id);
        Some(day_id)
    }

    // ── Export & remote save ────────────────────────────────────────

    /// Materialize the current trip as a portable, self-contained document.
    pub fn export_document(&self, assets: &ExportAssets) -> Result<String, CoreError> {
        export::render_document(&self.trip, assets)
    }

    /// Best-effort push of the JSON snapshot to the server. The local cache
    /// already holds the data, so remote failure degrades to a notice.
    pub async fn save_remote(&self) -> SaveStatus {
        let Some(remote) = &self.remote else {
            return SaveStatus::SavedLocally {
                notice: SAVED_LOCALLY_NOTICE.to_string(),
            };
        };
        match remote.save_snapshot(&self.trip).await {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                warn!("remote snapshot save failed: {e}");
                SaveStatus::SavedLocally {
                    notice: SAVED_LOCALLY_NOTICE.to_string(),
                }
            }
        }
    }

    /// Export the document and upload it, returning the server-assigned
    /// filename. Unlike `save_remote`, rejection surfaces as an error so
    /// the shell can show the server's message.
    pub async fn save_document_remote(
        &self,
        assets: &ExportAssets,
    ) -> Result<SavedDocument, CoreError> {
        let Some(remote) = &self.remote else {
            return Err(CoreError::Network(
                "no remote store configured".to_string(),
            ));
        };
        let html = self.export_document(assets)?;
        remote.save_document(&html).await
    }

    // ── Read access ─────────────────────────────────────────────────

    #[must_use]
    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        trip: Trip,
        devmode: bool,
        config: PlannerConfig,
        cache: Box<dyn SnapshotCache>,
        remote: Option<Box<dyn RemoteStore>>,
        map: Option<Box<dyn MapAdapter>>,
    ) -> Self {
        let budget_service = BudgetService::new(config.jpy_to_rub);
        let active_day = trip.days.first().map(|d| d.id);
        Self {
            trip,
            devmode,
            active_day,
            config,
            cache,
            remote,
            map,
            trip_service: TripService::new(),
            budget_service,
            renderer: Renderer::new(),
        }
    }
}
