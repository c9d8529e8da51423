use super::error::{Error, Result};
use super::extract::Row;
use itertools::Itertools;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const CSV_MIME: &str = "text/csv";
pub const FALLBACK_STEM: &str = "geoJSON-extract";

/// Name of the CSV file offered for a given input file: the input name
/// without its `.geojson` suffix, plus `.csv`.
///
/// # Example
///
/// ```
/// use geojson2csv::output::csv_file_name;
///
/// assert_eq!(csv_file_name(Some("parks.geojson")), "parks.csv");
/// assert_eq!(csv_file_name(Some("parks.json")), "parks.json.csv");
/// assert_eq!(csv_file_name(None), "geoJSON-extract.csv");
/// ```
pub fn csv_file_name(original: Option<&str>) -> String {
    let stem = original
        .map(|name| name.strip_suffix(".geojson").unwrap_or(name))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(FALLBACK_STEM);
    format!("{}.csv", stem)
}

pub trait Output {
    fn write_csv(&self, writer: &mut dyn Write) -> Result<()>;
}

impl Output for [Row] {
    fn write_csv(&self, writer: &mut dyn Write) -> Result<()> {
        write!(writer, "{}", self.iter().format("\n")).map_err(Error::Write)?;
        writer.flush().map_err(Error::Write)
    }
}

impl Output for str {
    fn write_csv(&self, writer: &mut dyn Write) -> Result<()> {
        writer.write_all(self.as_bytes()).map_err(Error::Write)?;
        writer.flush().map_err(Error::Write)
    }
}

/// Writes `csv` into `dir` under the name derived from `original` and
/// returns the path of the new file.
pub fn save(csv: &(impl Output + ?Sized), dir: &Path, original: Option<&str>) -> Result<PathBuf> {
    let path = dir.join(csv_file_name(original));
    let file = File::create(&path).map_err(Error::Write)?;
    let mut writer = BufWriter::new(file);
    csv.write_csv(&mut writer)?;
    info!("wrote {} as {}", path.display(), CSV_MIME);
    Ok(path)
}
