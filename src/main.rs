use geojson2csv::input::Source;
use geojson2csv::output::{save, Output};
use geojson2csv::preview::Preview;
use geojson2csv::{extract_rows, Error};
use log::{error, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "geojson2csv",
    about = "Extracts latitude, longitude and name of every GeoJSON feature into CSV"
)]
struct Opt {
    /// GeoJSON file (.geojson or .json), read from stdin when omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// CSV file to write, instead of stdout
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Directory to write <input name>.csv into
    #[structopt(short = "d", long, parse(from_os_str), conflicts_with = "output")]
    out_dir: Option<PathBuf>,

    /// Accept the input as this MIME type, whatever its extension
    #[structopt(long)]
    content_type: Option<String>,

    /// Print a preview of the first features to stderr
    #[structopt(short, long)]
    preview: bool,

    /// Verbose logging, repeat for more
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run(opt: &Opt) -> Result<(), Error> {
    let source = match &opt.input {
        Some(path) => Source::open(path, opt.content_type.as_deref())?,
        None => Source::from_reader(io::stdin())?,
    };

    if opt.preview {
        eprintln!("{}", Preview::new(&source.collection)?);
    }

    let rows = extract_rows(&source.collection)?;
    info!("{} rows extracted", rows.len());

    if let Some(path) = &opt.output {
        let file = File::create(path).map_err(Error::Write)?;
        rows.write_csv(&mut BufWriter::new(file))?;
    } else if let Some(dir) = &opt.out_dir {
        save(rows.as_slice(), dir, source.name.as_deref())?;
    } else {
        let stdout = io::stdout();
        let mut handle = BufWriter::new(stdout.lock());
        rows.write_csv(&mut handle)?;
    }
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    env_logger::Builder::new()
        .filter_level(level_filter(opt.verbose))
        .format_timestamp(None)
        .init();

    if let Err(err) = run(&opt) {
        error!("{}", err);
        eprintln!("{}", err.user_message());
        process::exit(1);
    }
}
