use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a loosely-typed expense value into a canonical non-negative integer.
///
/// Legacy snapshots stored expenses as numbers, numeric strings, or free text
/// with currency suffixes ("5000 руб", "¥1200"). This function is total:
/// whatever the input, it produces a number and never errors, so corrupted
/// stored data cannot crash rendering.
///
/// - numbers pass through (negatives clamp to 0, fractions truncate);
/// - strings keep only their ASCII digits; no digits means 0;
/// - null and every other JSON shape mean 0.
#[must_use]
pub fn normalize_expense(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u
            } else if let Some(f) = n.as_f64() {
                if f > 0.0 {
                    f as u64
                } else {
                    0
                }
            } else {
                0
            }
        }
        Value::String(s) => {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

/// Serde hook for `Day::expenses`: accepts number, string or null, so the
/// normalization runs exactly once, at the snapshot boundary.
pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(normalize_expense(&value))
}
