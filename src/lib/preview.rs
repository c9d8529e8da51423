use super::error::Result;
use super::extract::{features, UNNAMED};
use super::geometry::representative_coordinate;
use super::is_truthy;
use geo_types::Point;
use serde_json::Value;
use std::fmt;

pub const SAMPLE_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub number: usize,
    pub name: String,
    pub coordinate: Option<Point<f64>>,
}

impl Sample {
    fn new(number: usize, feature: &Value) -> Self {
        // the preview shows names as they are, commas included
        let name = match feature.get("properties").and_then(|p| p.get("name")) {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            Some(name) if is_truthy(name) => name.to_string(),
            _ => UNNAMED.to_string(),
        };
        let coordinate = representative_coordinate(feature.get("geometry")).ok();
        Sample {
            number,
            name,
            coordinate,
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Feature {}: {}", self.number, self.name)?;
        match self.coordinate {
            Some(point) => write!(
                f,
                "  First Coordinate (lat, lng): [{:.6}, {:.6}]",
                point.lat(),
                point.lng()
            ),
            None => write!(f, "  First Coordinate (lat, lng): No coordinates"),
        }
    }
}

/// A short human readable summary of a collection: how many features it
/// has and where the first few of them are.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub feature_count: usize,
    pub samples: Vec<Sample>,
}

impl Preview {
    pub fn new(input: &Value) -> Result<Self> {
        let features = features(input)?;
        let samples = features
            .iter()
            .take(SAMPLE_SIZE)
            .enumerate()
            .map(|(index, feature)| Sample::new(index + 1, feature))
            .collect();
        Ok(Preview {
            feature_count: features.len(),
            samples,
        })
    }

    pub fn remaining(&self) -> usize {
        self.feature_count - self.samples.len()
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found {} features.", self.feature_count)?;
        for sample in &self.samples {
            write!(f, "\n{}", sample)?;
        }
        if self.remaining() > 0 {
            write!(f, "\nAnd {} more features...", self.remaining())?;
        }
        Ok(())
    }
}
