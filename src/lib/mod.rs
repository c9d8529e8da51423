//! Turns a GeoJSON `FeatureCollection` into `latitude,longitude,name`
//! CSV lines, one per feature, using the first vertex of each geometry.

use serde_json::Value;

pub mod error;
mod extract;
pub mod geometry;
pub mod input;
pub mod output;
pub mod preview;
#[cfg(test)]
mod test_helpers;

pub use error::{Error, Result, SkipReason};
pub use extract::{extract, extract_rows, rows, Extraction, Row, UNNAMED};

/// Truthiness of a JSON value as a browser would judge it: `null`,
/// `false`, `0` and `""` are false, every array and object is true.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parses GeoJSON text and converts it in one go.
///
/// # Example
///
/// ```
/// let text = r#"{"type": "FeatureCollection", "features": [
///     {"type": "Feature", "properties": null,
///      "geometry": {"type": "MultiPolygon", "coordinates": [[[[5, 6], [7, 8]]]]}}
/// ]}"#;
/// assert_eq!(geojson2csv::convert(text).unwrap(), "6,5,Unnamed Feature");
/// ```
pub fn convert(text: &str) -> Result<String> {
    let collection = input::parse(text)?;
    extract(&collection)
}
