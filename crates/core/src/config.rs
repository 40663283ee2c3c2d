/// Runtime configuration for a planner session.
///
/// Everything the original page kept as free-floating globals lives here
/// explicitly: the cache keys, the remote endpoints, the fixed conversion
/// rate and the scroll bias used for day-navigation highlighting.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Cache key holding the serialized trip snapshot.
    pub snapshot_key: String,

    /// Companion cache key holding the devmode flag.
    pub devmode_key: String,

    /// GET endpoint serving the default itinerary JSON.
    pub remote_data_url: String,

    /// POST endpoint accepting the JSON-serialized trip.
    pub remote_snapshot_url: String,

    /// POST endpoint accepting an exported self-contained document.
    pub document_save_url: String,

    /// Fixed conversion rate: primary units (₽) per one secondary unit (¥).
    pub jpy_to_rub: f64,

    /// Pixels added to the scroll offset before picking the active day,
    /// compensating for the sticky navigation header.
    pub scroll_header_bias: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            snapshot_key: "jp_itin_v1".to_string(),
            devmode_key: "jp_itin_devmode".to_string(),
            remote_data_url: "data/itinerary.json".to_string(),
            remote_snapshot_url: "/api/itinerary".to_string(),
            document_save_url: "/save_html".to_string(),
            jpy_to_rub: 0.68,
            scroll_header_bias: 70.0,
        }
    }
}
