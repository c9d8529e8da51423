use super::error::{Error, Result};
use super::is_truthy;
use super::output::csv_file_name;
use log::info;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const EXTENSIONS: [&str; 2] = [".geojson", ".json"];
pub const MIME_TYPES: [&str; 2] = ["application/geo+json", "application/json"];

const REQUIRED_MEMBERS: [&str; 2] = ["type", "features"];

/// Whether a file is accepted for conversion, judged by its name or,
/// when the name doesn't tell, by its declared MIME type.
pub fn is_supported(file_name: &str, mime: Option<&str>) -> bool {
    EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
        || mime.map_or(false, |mime| MIME_TYPES.contains(&mime))
}

/// Parses text as JSON and checks that it looks like GeoJSON at the
/// top level. The shape of `features` is left to the extractor.
pub fn parse(text: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(text)?;
    for member in REQUIRED_MEMBERS.iter() {
        if !value.get(member).map_or(false, is_truthy) {
            return Err(Error::InvalidGeoJson(*member));
        }
    }
    Ok(value)
}

pub fn read(mut reader: impl Read) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::Read)?;
    parse(&text)
}

/// A parsed GeoJSON document and the name of the file it came from.
#[derive(Debug)]
pub struct Source {
    pub name: Option<String>,
    pub collection: Value,
}

impl Source {
    pub fn open(path: impl AsRef<Path>, mime: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(OsStr::to_str)
            .map(str::to_owned);
        let label = name.as_deref().unwrap_or_default();
        if !is_supported(label, mime) {
            return Err(Error::UnsupportedFile(path.display().to_string()));
        }

        let file = File::open(path).map_err(Error::Read)?;
        let collection = read(file)?;
        info!("loaded {}", path.display());
        Ok(Source { name, collection })
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let collection = read(reader)?;
        Ok(Source {
            name: None,
            collection,
        })
    }

    pub fn csv_file_name(&self) -> String {
        csv_file_name(self.name.as_deref())
    }
}

#[cfg(test)]
mod supported_files {
    use super::*;

    #[test]
    fn by_extension() {
        assert!(is_supported("places.geojson", None));
        assert!(is_supported("places.json", None));
        assert!(!is_supported("places.csv", None));
        assert!(!is_supported("geojson", None));
    }

    #[test]
    fn by_mime_type() {
        assert!(is_supported("upload", Some("application/geo+json")));
        assert!(is_supported("upload", Some("application/json")));
        assert!(!is_supported("upload", Some("text/plain")));
    }
}
