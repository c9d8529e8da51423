use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::{Map, Value};

pub fn feature(shape: Option<geojson::Value>, name: Option<&str>) -> Feature {
    let properties = name.map(|name| {
        let mut properties = Map::new();
        properties.insert("name".to_string(), name.into());
        properties
    });
    Feature {
        bbox: None,
        geometry: shape.map(Geometry::new),
        id: None,
        properties,
        foreign_members: None,
    }
}

pub fn collection(features: Vec<Feature>) -> Value {
    let feature_collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    serde_json::to_value(&feature_collection).unwrap()
}
