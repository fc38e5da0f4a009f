//! Dataset session state
//!
//! One immutable snapshot of the loaded tables. Load operations build a
//! complete new snapshot before it replaces the active one, so a failed
//! load leaves the previous state intact.

use std::path::{Path, PathBuf};

use crate::core::dedupe::dedupe;
use crate::core::limits::SpecTable;
use crate::core::loader::{self, FileLoadError, RESULT_KEY_COLUMN};
use crate::core::table::DataTable;

/// Snapshot of the loaded spec and result tables.
#[derive(Debug, Clone, Default)]
pub struct Session {
    spec: Option<SpecTable>,
    results: Option<DataTable>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Snapshot with a freshly loaded spec table. On error the current
    /// snapshot is still valid and unchanged.
    pub fn with_spec(&self, path: &Path) -> Result<Session, FileLoadError> {
        let spec = loader::load_spec(path)?;
        Ok(Session {
            spec: Some(spec),
            results: self.results.clone(),
        })
    }

    /// Snapshot with freshly loaded, concatenated result files. On error
    /// the current snapshot is still valid and unchanged.
    pub fn with_results(&self, paths: &[PathBuf]) -> Result<Session, FileLoadError> {
        let results = loader::load_results(paths)?;
        Ok(Session {
            spec: self.spec.clone(),
            results: Some(results),
        })
    }

    pub fn spec(&self) -> Option<&SpecTable> {
        self.spec.as_ref()
    }

    pub fn results(&self) -> Option<&DataTable> {
        self.results.as_ref()
    }

    /// Deduplicated view of the results (one row per `DUT_SN`, last wins),
    /// recomputed on demand.
    pub fn deduped_results(&self) -> Option<DataTable> {
        self.results.as_ref().map(|t| dedupe(t, RESULT_KEY_COLUMN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_failed_load_preserves_snapshot() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("r.csv");
        fs::write(&good, "DUT_SN,V_1\nA,1.0\n").unwrap();

        let session = Session::new().with_results(&[good]).unwrap();
        assert_eq!(session.results().unwrap().n_rows(), 1);

        let bad = tmp.path().join("missing.csv");
        assert!(session.with_results(&[bad]).is_err());
        // the original snapshot is untouched
        assert_eq!(session.results().unwrap().n_rows(), 1);
    }

    #[test]
    fn test_deduped_view_recomputed_on_demand() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("r.csv");
        fs::write(&path, "DUT_SN,V_1\nA,1.0\nA,2.0\n").unwrap();

        let session = Session::new().with_results(&[path]).unwrap();
        assert_eq!(session.results().unwrap().n_rows(), 2);
        assert_eq!(session.deduped_results().unwrap().n_rows(), 1);
    }
}
