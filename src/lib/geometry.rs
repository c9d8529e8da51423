use super::error::SkipReason;
use super::is_truthy;
use geo_types::Point;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryKind {
    Point,
    LineString,
    MultiPoint,
    Polygon,
    MultiLineString,
    MultiPolygon,
    Other(String),
}

impl From<&str> for GeometryKind {
    fn from(type_name: &str) -> Self {
        match type_name {
            "Point" => GeometryKind::Point,
            "LineString" => GeometryKind::LineString,
            "MultiPoint" => GeometryKind::MultiPoint,
            "Polygon" => GeometryKind::Polygon,
            "MultiLineString" => GeometryKind::MultiLineString,
            "MultiPolygon" => GeometryKind::MultiPolygon,
            other => GeometryKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::Other(name) => name,
        };
        f.write_str(name)
    }
}

impl GeometryKind {
    /// Reads the `type` member of a geometry object. A missing or
    /// non-string tag is kept as `Other` so it can be reported.
    pub fn of(geometry: &Value) -> Self {
        match geometry.get("type") {
            Some(Value::String(type_name)) => type_name.as_str().into(),
            Some(other) => GeometryKind::Other(other.to_string()),
            None => GeometryKind::Other(String::new()),
        }
    }

    /// Number of arrays wrapped around the first `[lon, lat]` pair.
    pub fn depth(&self) -> Option<usize> {
        match self {
            GeometryKind::Point => Some(0),
            GeometryKind::LineString | GeometryKind::MultiPoint => Some(1),
            GeometryKind::Polygon | GeometryKind::MultiLineString => Some(2),
            GeometryKind::MultiPolygon => Some(3),
            GeometryKind::Other(_) => None,
        }
    }
}

fn first_at_depth(coordinates: &Value, depth: usize) -> Option<&Value> {
    (0..depth).try_fold(coordinates, |value, _| value.get(0))
}

fn to_point(pair: &Value) -> Option<Point<f64>> {
    let lon = pair.get(0)?.as_f64()?;
    let lat = pair.get(1)?.as_f64()?;
    Some(Point::new(lon, lat))
}

/// Picks the first vertex of a geometry: the point itself, the first
/// point of a line, or the first vertex of the first ring of the first
/// part. This is a cheap stand-in for a location, not a centroid.
///
/// # Example
///
/// ```
/// use geojson2csv::geometry::representative_coordinate;
/// use serde_json::json;
///
/// let polygon = json!({"type": "Polygon", "coordinates": [[[1, 2], [3, 4]]]});
/// let point = representative_coordinate(Some(&polygon)).unwrap();
/// assert_eq!((point.lng(), point.lat()), (1., 2.));
/// ```
pub fn representative_coordinate(geometry: Option<&Value>) -> Result<Point<f64>, SkipReason> {
    let geometry = geometry
        .filter(|geometry| geometry.is_object())
        .ok_or(SkipReason::NoGeometry)?;
    let coordinates = geometry
        .get("coordinates")
        .filter(|coordinates| is_truthy(coordinates))
        .ok_or(SkipReason::NoCoordinates)?;

    let kind = GeometryKind::of(geometry);
    let depth = match kind.depth() {
        Some(depth) => depth,
        None => return Err(SkipReason::UnrecognizedGeometry(kind.to_string())),
    };
    let pair = first_at_depth(coordinates, depth).ok_or(SkipReason::MissingVertex(kind))?;
    to_point(pair).ok_or(SkipReason::InvalidPair)
}

#[cfg(test)]
mod first_vertex {
    use super::*;
    use serde_json::json;

    fn resolve(geometry: Value) -> Result<(f64, f64), SkipReason> {
        representative_coordinate(Some(&geometry)).map(|point| (point.lng(), point.lat()))
    }

    #[test]
    fn point() {
        let geometry = json!({"type": "Point", "coordinates": [10.5, 20.25]});
        assert_eq!(resolve(geometry), Ok((10.5, 20.25)));
    }

    #[test]
    fn point_with_altitude() {
        let geometry = json!({"type": "Point", "coordinates": [13.4, 52.5, 34.0]});
        assert_eq!(resolve(geometry), Ok((13.4, 52.5)));
    }

    #[test]
    fn line_string_and_multi_point() {
        for type_name in &["LineString", "MultiPoint"] {
            let geometry = json!({"type": type_name, "coordinates": [[1, 2], [3, 4]]});
            assert_eq!(resolve(geometry), Ok((1., 2.)));
        }
    }

    #[test]
    fn polygon_and_multi_line_string() {
        for type_name in &["Polygon", "MultiLineString"] {
            let geometry = json!({
                "type": type_name,
                "coordinates": [[[1, 2], [3, 4]], [[5, 6], [7, 8]]]
            });
            assert_eq!(resolve(geometry), Ok((1., 2.)));
        }
    }

    #[test]
    fn multi_polygon() {
        let geometry = json!({
            "type": "MultiPolygon",
            "coordinates": [[[[5, 6], [7, 8]]], [[[9, 10]]]]
        });
        assert_eq!(resolve(geometry), Ok((5., 6.)));
    }

    #[test]
    fn missing_geometry() {
        assert_eq!(representative_coordinate(None), Err(SkipReason::NoGeometry));
        assert_eq!(resolve(Value::Null), Err(SkipReason::NoGeometry));
    }

    #[test]
    fn missing_coordinates() {
        let geometry = json!({"type": "Point"});
        assert_eq!(resolve(geometry), Err(SkipReason::NoCoordinates));
        let geometry = json!({"type": "Point", "coordinates": null});
        assert_eq!(resolve(geometry), Err(SkipReason::NoCoordinates));
    }

    #[test]
    fn geometry_collection_is_not_recognized() {
        let geometry = json!({"type": "GeometryCollection", "coordinates": [[1, 2]]});
        assert_eq!(
            resolve(geometry),
            Err(SkipReason::UnrecognizedGeometry("GeometryCollection".into()))
        );
    }

    #[test]
    fn missing_type() {
        let geometry = json!({"coordinates": [1, 2]});
        assert_eq!(
            resolve(geometry),
            Err(SkipReason::UnrecognizedGeometry(String::new()))
        );
    }

    #[test]
    fn empty_polygon() {
        let geometry = json!({"type": "Polygon", "coordinates": []});
        assert_eq!(
            resolve(geometry),
            Err(SkipReason::MissingVertex(GeometryKind::Polygon))
        );
    }

    #[test]
    fn too_shallow_for_its_type() {
        // a Point's coordinates labelled as a MultiPolygon
        let geometry = json!({"type": "MultiPolygon", "coordinates": [1, 2]});
        assert_eq!(
            resolve(geometry),
            Err(SkipReason::MissingVertex(GeometryKind::MultiPolygon))
        );
    }

    #[test]
    fn non_numeric_pair() {
        let geometry = json!({"type": "Point", "coordinates": ["1", "2"]});
        assert_eq!(resolve(geometry), Err(SkipReason::InvalidPair));
        let geometry = json!({"type": "LineString", "coordinates": [[1]]});
        assert_eq!(resolve(geometry), Err(SkipReason::InvalidPair));
    }
}
