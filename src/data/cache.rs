use std::sync::Arc;
use std::time::SystemTime;

use crate::config::SourceConfig;

use super::error::{DataLoadError, LoadResult};
use super::loader::load_file;
use super::model::SalesDataset;

/// Identity of a completed load: the source plus the file's mtime.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceStamp {
    source: SourceConfig,
    modified: Option<SystemTime>,
}

impl SourceStamp {
    fn read(source: &SourceConfig) -> LoadResult<Self> {
        let meta = std::fs::metadata(&source.path).map_err(|e| DataLoadError::Io {
            path: source.path.clone(),
            source: e,
        })?;
        Ok(Self {
            source: source.clone(),
            modified: meta.modified().ok(),
        })
    }
}

/// Load-once cache for the parsed dataset.
///
/// Parsing a workbook is slow next to a UI frame, so the dataset is kept
/// until the path, the sheet or the file's modification time changes.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(SourceStamp, Arc<SalesDataset>)>,
}

impl DatasetCache {
    /// Return the cached dataset for `source`, loading it if stale.
    pub fn get(&mut self, source: &SourceConfig) -> LoadResult<Arc<SalesDataset>> {
        let stamp = SourceStamp::read(source)?;
        if let Some((cached, dataset)) = &self.entry {
            if *cached == stamp {
                return Ok(Arc::clone(dataset));
            }
        }

        let dataset = Arc::new(load_file(&source.path, &source.sheet)?);
        log::info!(
            "Loaded {} records from {} (sheet '{}')",
            dataset.len(),
            source.path.display(),
            source.sheet
        );
        self.entry = Some((stamp, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Forget the cached dataset so the next `get` reloads.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;

    const CSV: &str = "Item Names,Distributors,State,Year,Month,Case Equivs,Units Sold,Net Price\n\
                       Gin,Acme,TX,2024,1,1,12,100\n";

    fn source_with(contents: &str) -> (tempfile::TempDir, SourceConfig) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");
        std::fs::write(&path, contents).unwrap();
        let config = SourceConfig {
            path,
            sheet: "unused".to_string(),
        };
        (dir, config)
    }

    #[test]
    fn second_get_hits_the_cache() {
        let (_dir, config) = source_with(CSV);
        let mut cache = DatasetCache::default();
        let first = cache.get(&config).unwrap();
        let second = cache.get(&config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn modified_source_is_reloaded() {
        let (_dir, config) = source_with(CSV);
        let mut cache = DatasetCache::default();
        let first = cache.get(&config).unwrap();

        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&config.path)
            .unwrap();
        file.write_all(b"Rum,Acme,TX,2024,2,1,6,50\n").unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(60)).unwrap();
        drop(file);

        let second = cache.get(&config).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn invalidate_forces_reload() {
        let (_dir, config) = source_with(CSV);
        let mut cache = DatasetCache::default();
        let first = cache.get(&config).unwrap();
        cache.invalidate();
        let second = cache.get(&config).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn missing_source_is_an_error() {
        let mut cache = DatasetCache::default();
        let config = SourceConfig {
            path: "/no/such/file.xlsx".into(),
            sheet: "Sheet1".to_string(),
        };
        assert!(matches!(cache.get(&config), Err(DataLoadError::Io { .. })));
    }
}
