use crate::errors::CoreError;
use crate::models::trip::Trip;
use crate::storage::manager::StorageManager;

/// Static assets inlined into an exported document. The caller supplies
/// them explicitly; this module never fetches anything.
#[derive(Debug, Clone, Default)]
pub struct ExportAssets {
    pub stylesheet: String,
    pub script: String,
    pub map_script: String,
}

/// Title used when the trip header is empty.
const FALLBACK_TITLE: &str = "Trip Itinerary";

/// Build a portable, self-contained document: the current trip embedded as
/// a startup snapshot plus the supplied style/script assets.
///
/// Pure function of its inputs. The embedded snapshot is exactly what the
/// load ladder accepts as its first rung, so opening the artifact restores
/// the same trip with no cache or network involved.
pub fn render_document(trip: &Trip, assets: &ExportAssets) -> Result<String, CoreError> {
    let snapshot = snapshot_json(trip)?;
    let title = if trip.header.is_empty() {
        FALLBACK_TITLE
    } else {
        &trip.header
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{stylesheet}
  </style>
</head>
<body>
  <header>
    <h1>{header}</h1>
    <p class="dates"><span id="trip-dates">{dates}</span></p>
  </header>
  <main>
    <nav id="day-nav" class="day-navigation"></nav>
    <section id="itinerary"></section>
  </main>
  <footer>
    <div>Author: <span id="author-name">{author}</span></div>
    <div>Budget: <span id="budget">{budget}</span></div>
  </footer>
  <script>
    window.embeddedData = {snapshot};
  </script>
  <script>
{map_script}
  </script>
  <script>
{script}
  </script>
</body>
</html>"#,
        title = escape_html(title),
        stylesheet = assets.stylesheet,
        header = escape_html(title),
        dates = escape_html(&trip.dates),
        author = escape_html(&trip.author),
        budget = escape_html(&trip.budget),
        snapshot = snapshot,
        map_script = assets.map_script,
        script = assets.script,
    ))
}

/// The embeddable snapshot: trip JSON with script-closing sequences broken
/// so user text cannot terminate the embed slot early.
pub fn snapshot_json(trip: &Trip) -> Result<String, CoreError> {
    Ok(StorageManager::encode(trip)?.replace("</", "<\\/"))
}

/// Escape user text for HTML interpolation.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
