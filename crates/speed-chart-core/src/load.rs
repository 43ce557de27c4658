// File: crates/speed-chart-core/src/load.rs
// Summary: Fetch a CSV resource (file or HTTP URL) and parse it into raw records.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::clean::clean;
use crate::error::LoadError;
use crate::record::{Dataset, RawRecord};

/// Where the CSV lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// `http://` and `https://` prefixes select a URL, anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(raw.trim().to_string())
        } else {
            Source::Path(PathBuf::from(raw))
        }
    }
}

impl From<&Path> for Source {
    fn from(p: &Path) -> Self {
        Source::Path(p.to_path_buf())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(p) => write!(f, "{}", p.display()),
            Source::Url(u) => f.write_str(u),
        }
    }
}

/// Fetch the raw bytes of the resource. No caching, no retry.
pub fn fetch(source: &Source) -> Result<Vec<u8>, LoadError> {
    match source {
        Source::Path(path) => std::fs::read(path)
            .map_err(|source| LoadError::Io { path: path.clone(), source }),
        Source::Url(url) => {
            let http = |source| LoadError::Http { url: url.clone(), source };
            let resp = reqwest::blocking::get(url).map_err(http)?;
            let status = resp.status();
            if !status.is_success() {
                return Err(LoadError::HttpStatus { url: url.clone(), status: status.as_u16() });
            }
            Ok(resp.bytes().map_err(http)?.to_vec())
        }
    }
}

/// Parse CSV bytes into raw rows by header name. Column order is irrelevant;
/// the category column may be called `category` or `diet`.
/// Rows that are not valid UTF-8 are skipped; an undecodable header is an error.
pub fn parse_records(data: impl AsRef<[u8]>) -> Result<Vec<RawRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_ref());

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        names.iter().find_map(|want| headers.iter().position(|h| h.as_str() == *want))
    };

    let i_name = idx(&["name"]).ok_or(LoadError::MissingColumn("name"))?;
    let i_speed = idx(&["speed"]).ok_or(LoadError::MissingColumn("speed"))?;
    let i_category = idx(&["category", "diet"]).ok_or(LoadError::MissingColumn("category"))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.byte_records().enumerate() {
        let rec = match rec {
            Ok(rec) => rec,
            Err(err) => {
                debug!(row, %err, "skipping unreadable row");
                continue;
            }
        };
        let rec = match csv::StringRecord::from_byte_record(rec) {
            Ok(rec) => rec,
            Err(err) => {
                debug!(row, %err, "skipping row with invalid UTF-8");
                continue;
            }
        };
        let field = |i: usize| rec.get(i).unwrap_or_default().to_string();
        out.push(RawRecord {
            name: field(i_name),
            speed: field(i_speed),
            category: field(i_category),
        });
    }
    Ok(out)
}

/// Fetch and parse.
pub fn load_records(source: &Source) -> Result<Vec<RawRecord>, LoadError> {
    let bytes = fetch(source)?;
    let records = parse_records(&bytes)?;
    info!(%source, rows = records.len(), "loaded source");
    Ok(records)
}

/// Full loader + cleaner. Failures are logged and degrade to an empty dataset.
pub fn load_dataset(source: &Source) -> Dataset {
    match load_records(source) {
        Ok(records) => clean(records),
        Err(err) => {
            error!(%source, error = %err, "error loading CSV");
            Dataset::empty()
        }
    }
}
