use crate::{DatabaseEntity, DatabaseError};
use flate2::read::GzDecoder;
use log::{debug, info};
use std::env;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

const SAMPLE_DATASET_JSON: &str = include_str!("../../data/sample.json");

pub const DATASET_PATH_ENV: &str = "PROTACTIC_DATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Embedded,
    File(PathBuf),
}

impl DatasetSource {
    pub fn from_env() -> Self {
        match env::var(DATASET_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => DatasetSource::File(PathBuf::from(path.trim())),
            _ => DatasetSource::Embedded,
        }
    }
}

impl Display for DatasetSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Embedded => f.write_str("embedded sample"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load(source: &DatasetSource) -> Result<DatabaseEntity, DatabaseError> {
        let database = match source {
            DatasetSource::Embedded => serde_json::from_str(SAMPLE_DATASET_JSON)?,
            DatasetSource::File(path) => Self::load_file(path)?,
        };

        Self::log_counts(&database);

        Ok(database)
    }

    fn load_file(path: &Path) -> Result<DatabaseEntity, DatabaseError> {
        let file = File::open(path).map_err(|source| DatabaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let reader: Box<dyn Read> = if is_compressed(path) {
            debug!("reading gzip dataset {}", path.display());
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        Ok(serde_json::from_reader(BufReader::new(reader))?)
    }

    fn log_counts(database: &DatabaseEntity) {
        info!(
            "dataset: {} clubs, {} competitions, {} players, {} matches, {} goals, {} lineup entries, {} performance records",
            database.clubs.len(),
            database.competitions.len(),
            database.players.len(),
            database.matches.len(),
            database.goals.len(),
            database.lineups.len(),
            database.performances.len()
        );
    }
}

fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const MINIMAL: &str = r#"{
        "clubs": [{ "id": "clb_a", "name": "Alpha", "country": "Brasil", "founded": "1909-04-15" }]
    }"#;

    #[test]
    fn test_embedded_sample_loads() {
        let database = DatabaseLoader::load(&DatasetSource::Embedded).expect("sample should load");

        assert!(!database.clubs.is_empty());
        assert!(!database.matches.is_empty());
        assert!(!database.lineups.is_empty());
    }

    #[test]
    fn test_plain_and_gzip_files_load() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("clubs.json");
        std::fs::write(&plain, MINIMAL).unwrap();

        let compressed = dir.path().join("clubs.json.gz");
        let mut encoder = GzEncoder::new(File::create(&compressed).unwrap(), Compression::default());
        encoder.write_all(MINIMAL.as_bytes()).unwrap();
        encoder.finish().unwrap();

        for path in [plain, compressed] {
            let database = DatabaseLoader::load(&DatasetSource::File(path)).unwrap();
            assert_eq!(database.clubs.len(), 1);
            assert!(database.matches.is_empty());
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = DatabaseLoader::load(&DatasetSource::File(PathBuf::from("/nonexistent/data.json")));

        assert!(matches!(result, Err(DatabaseError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"clubs\": [ ").unwrap();

        let result = DatabaseLoader::load(&DatasetSource::File(path));

        assert!(matches!(result, Err(DatabaseError::Json(_))));
    }
}
