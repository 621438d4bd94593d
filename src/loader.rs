//! Loading record sets from CSV sources, with a per-session cache.

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::records::{DailyRecord, HourlyRecord};

/// Why a source could not be turned into a record set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} at line {line}: {source}")]
    Csv {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Reads every row of a headed CSV file into `R`.
///
/// Paths ending in `.gz` are gunzipped on the fly. The first bad row fails the
/// whole source; no partial set is returned.
pub fn read_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn Read> = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: R = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;
        rows.push(record);
    }

    Ok(rows)
}

/// Outcome of loading one source.
///
/// On failure `records` is empty and `failure` says why.
#[derive(Debug)]
pub struct LoadedSource<R> {
    pub records: Arc<[R]>,
    pub failure: Option<Arc<LoadError>>,
}

impl<R> Clone for LoadedSource<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            failure: self.failure.clone(),
        }
    }
}

impl<R> LoadedSource<R> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[tracing::instrument(skip(path), fields(source = %path.display()))]
fn load_source<R: DeserializeOwned>(path: &Path) -> LoadedSource<R> {
    let started = Instant::now();
    match read_records::<R>(path) {
        Ok(rows) => {
            info!(
                rows = rows.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Source loaded"
            );
            LoadedSource {
                records: rows.into(),
                failure: None,
            }
        }
        Err(e) => {
            error!(error = %e, "Source unavailable, continuing with an empty record set");
            LoadedSource {
                records: Vec::<R>::new().into(),
                failure: Some(Arc::new(e)),
            }
        }
    }
}

/// Memoizes loaded sources for the lifetime of the cache, keyed by path.
///
/// Entries are never invalidated: sources are assumed static for a session,
/// and a failed load stays failed.
#[derive(Debug, Default)]
pub struct SourceCache {
    daily: HashMap<PathBuf, LoadedSource<DailyRecord>>,
    hourly: HashMap<PathBuf, LoadedSource<HourlyRecord>>,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn daily(&mut self, path: &Path) -> LoadedSource<DailyRecord> {
        cached(&mut self.daily, path)
    }

    pub fn hourly(&mut self, path: &Path) -> LoadedSource<HourlyRecord> {
        cached(&mut self.hourly, path)
    }

    /// Number of distinct sources held, successful or not.
    pub fn len(&self) -> usize {
        self.daily.len() + self.hourly.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn cached<R: DeserializeOwned>(
    entries: &mut HashMap<PathBuf, LoadedSource<R>>,
    path: &Path,
) -> LoadedSource<R> {
    if let Some(hit) = entries.get(path) {
        debug!(source = %path.display(), "Source cache hit");
        return hit.clone();
    }

    let loaded = load_source::<R>(path);
    entries.insert(path.to_path_buf(), loaded.clone());
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::env;
    use std::fs;
    use std::io::Write;

    const DAILY_CSV: &str = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985
2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801
";

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_read_records_plain_csv() {
        let path = temp_path("bike_share_insights_loader_plain.csv");
        fs::write(&path, DAILY_CSV).unwrap();

        let rows: Vec<DailyRecord> = read_records(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].total_count, 801);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_records_gzip_matches_plain() {
        let plain = temp_path("bike_share_insights_loader_gz_plain.csv");
        let gz = temp_path("bike_share_insights_loader_gz.csv.gz");
        fs::write(&plain, DAILY_CSV).unwrap();

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(DAILY_CSV.as_bytes()).unwrap();
        fs::write(&gz, encoder.finish().unwrap()).unwrap();

        let a: Vec<DailyRecord> = read_records(&plain).unwrap();
        let b: Vec<DailyRecord> = read_records(&gz).unwrap();
        assert_eq!(a, b);

        fs::remove_file(&plain).unwrap();
        fs::remove_file(&gz).unwrap();
    }

    #[test]
    fn test_read_records_missing_file_is_io_error() {
        let path = temp_path("bike_share_insights_loader_missing.csv");
        let _ = fs::remove_file(&path);

        let result = read_records::<DailyRecord>(&path);
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_read_records_bad_row_fails_whole_source() {
        let path = temp_path("bike_share_insights_loader_bad_row.csv");
        let bad = DAILY_CSV.replace("2011-01-02", "not-a-date");
        fs::write(&path, bad).unwrap();

        let result = read_records::<DailyRecord>(&path);
        assert!(matches!(result, Err(LoadError::Csv { line: 3, .. })));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_cache_returns_same_records_without_rereading() {
        let path = temp_path("bike_share_insights_loader_cache.csv");
        fs::write(&path, DAILY_CSV).unwrap();

        let mut cache = SourceCache::new();
        let first = cache.daily(&path);
        // Source disappears; the cached outcome is still served.
        fs::remove_file(&path).unwrap();
        let second = cache.daily(&path);

        assert!(first.failure.is_none());
        assert!(Arc::ptr_eq(&first.records, &second.records));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_keeps_failure_for_session() {
        let path = temp_path("bike_share_insights_loader_cache_failure.csv");
        let _ = fs::remove_file(&path);

        let mut cache = SourceCache::new();
        let first = cache.daily(&path);
        assert!(first.is_empty());
        assert!(first.failure.is_some());

        // Source appears later; the failure is terminal for this cache.
        fs::write(&path, DAILY_CSV).unwrap();
        let second = cache.daily(&path);
        assert!(second.is_empty());
        assert!(second.failure.is_some());

        fs::remove_file(&path).unwrap();
    }
}
