use super::geometry::GeometryKind;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The value handed to the extractor has no `features` sequence.
    #[error("Invalid GeoJSON data format")]
    Format,

    #[error("Invalid GeoJSON format: missing top-level `{0}`")]
    InvalidGeoJson(&'static str),

    #[error("could not parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read input: {0}")]
    Read(#[source] io::Error),

    #[error("could not write CSV: {0}")]
    Write(#[source] io::Error),

    #[error("unsupported file {0}, expected .geojson or .json")]
    UnsupportedFile(String),
}

impl Error {
    /// Message shown to the person who supplied the file.
    ///
    /// An unreadable file and a file that is not GeoJSON are reported
    /// differently.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Read(_) => "Failed to read the file. Please try again.",
            Error::Format | Error::InvalidGeoJson(_) | Error::Parse(_) => {
                "The file is not a valid GeoJSON format."
            }
            Error::UnsupportedFile(_) => "Only .geojson and .json files are supported.",
            Error::Write(_) => "Failed to write the CSV file.",
        }
    }
}

/// Why a single feature produced no row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("feature is not an object")]
    NotAnObject,

    #[error("name property is not a string")]
    NonStringName,

    #[error("feature has no geometry")]
    NoGeometry,

    #[error("geometry has no coordinates")]
    NoCoordinates,

    #[error("unrecognized geometry type {0:?}")]
    UnrecognizedGeometry(String),

    #[error("{0} coordinates are not nested deep enough")]
    MissingVertex(GeometryKind),

    #[error("coordinate is not a [longitude, latitude] pair")]
    InvalidPair,
}

impl SkipReason {
    /// Whether the feature was broken, as opposed to simply carrying
    /// nothing to extract.
    pub fn is_malformed(&self) -> bool {
        !matches!(
            self,
            SkipReason::NoGeometry | SkipReason::NoCoordinates | SkipReason::UnrecognizedGeometry(_)
        )
    }
}
