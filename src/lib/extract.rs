use super::error::{Error, Result, SkipReason};
use super::geometry::representative_coordinate;
use super::is_truthy;
use geo_types::Point;
use itertools::Itertools;
use log::{debug, warn};
use serde_json::Value;
use std::fmt;

pub const UNNAMED: &str = "Unnamed Feature";

/// One CSV line: `latitude,longitude,name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl Row {
    pub fn new(point: Point<f64>, name: String) -> Self {
        Row {
            latitude: point.lat(),
            longitude: point.lng(),
            name,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.latitude, self.longitude, self.name)
    }
}

/// The outcome for a single feature of a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Row(Row),
    Skipped { index: usize, reason: SkipReason },
}

impl Extraction {
    pub fn into_row(self) -> Option<Row> {
        match self {
            Extraction::Row(row) => Some(row),
            Extraction::Skipped { .. } => None,
        }
    }
}

pub(crate) fn features(input: &Value) -> Result<&Vec<Value>> {
    input
        .get("features")
        .and_then(Value::as_array)
        .ok_or(Error::Format)
}

fn sanitize(name: &str) -> String {
    name.replace(',', " ")
}

fn resolve_name(properties: Option<&Value>) -> std::result::Result<String, SkipReason> {
    match properties.and_then(|properties| properties.get("name")) {
        Some(name) if is_truthy(name) => name
            .as_str()
            .map(sanitize)
            .ok_or(SkipReason::NonStringName),
        _ => Ok(UNNAMED.to_string()),
    }
}

fn resolve(feature: &Value) -> std::result::Result<Row, SkipReason> {
    let feature = feature.as_object().ok_or(SkipReason::NotAnObject)?;
    let name = resolve_name(feature.get("properties"))?;
    let point = representative_coordinate(feature.get("geometry"))?;
    Ok(Row::new(point, name))
}

/// Lazily resolves every feature of a collection, in input order.
///
/// Fails only when `input` has no `features` array. Features that cannot
/// be turned into a row show up as `Extraction::Skipped`.
pub fn rows(input: &Value) -> Result<impl Iterator<Item = Extraction> + '_> {
    let features = features(input)?;
    let extractions = features
        .iter()
        .enumerate()
        .map(|(index, feature)| match resolve(feature) {
            Ok(row) => Extraction::Row(row),
            Err(reason) => {
                if reason.is_malformed() {
                    warn!("skipping feature {}: {}", index, reason);
                } else {
                    debug!("skipping feature {}: {}", index, reason);
                }
                Extraction::Skipped { index, reason }
            }
        });
    Ok(extractions)
}

pub fn extract_rows(input: &Value) -> Result<Vec<Row>> {
    let rows: Vec<Row> = rows(input)?.filter_map(Extraction::into_row).collect();
    Ok(rows)
}

/// Converts a GeoJSON feature collection into CSV lines of
/// `latitude,longitude,name`, one per feature that has a usable
/// coordinate. There is no header and no trailing newline.
///
/// # Example
///
/// ```
/// use geojson2csv::extract;
/// use serde_json::json;
///
/// let collection = json!({
///     "type": "FeatureCollection",
///     "features": [{
///         "type": "Feature",
///         "properties": {"name": "Foo, Bar"},
///         "geometry": {"type": "Point", "coordinates": [10.5, 20.25]}
///     }]
/// });
/// assert_eq!(extract(&collection).unwrap(), "20.25,10.5,Foo  Bar");
/// ```
pub fn extract(input: &Value) -> Result<String> {
    let rows = extract_rows(input)?;
    debug!("extracted {} rows", rows.len());
    Ok(rows.iter().join("\n"))
}
