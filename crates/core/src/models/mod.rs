pub mod day;
pub mod expense;
pub mod photo;
pub mod timeline;
pub mod trip;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// Deserialize an entity id leniently. Snapshots written before ids existed
/// (or with the original's numeric day ids) get a fresh id instead of
/// failing the whole load.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Uuid::parse_str(&s).unwrap_or_else(|_| Uuid::new_v4()),
        _ => Uuid::new_v4(),
    })
}
