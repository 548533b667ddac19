#![allow(dead_code)]

use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    sync::Mutex,
};

use ledger_sheets::{
    errors::ExportError,
    export::{Printer, Sharer},
    Document, Fields,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn account_entry(date: &str, mill: &str, rent: &str, paid: &str) -> Fields {
    Fields::new()
        .with("date", date)
        .with("sugarMill", mill)
        .with("rent", rent)
        .with("paid", paid)
}

pub fn labor_entry(month: &str, expenses: &str, cost: &str) -> Fields {
    Fields::new()
        .with("month", month)
        .with("expenses", expenses)
        .with("cost", cost)
}

/// Remembers every path it was asked to share.
#[derive(Default)]
pub struct RecordingSharer {
    pub shared: RefCell<Vec<PathBuf>>,
}

impl Sharer for RecordingSharer {
    fn share(&self, path: &Path) -> Result<(), ExportError> {
        self.shared.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Simulates the platform refusing to share.
pub struct DenyingSharer;

impl Sharer for DenyingSharer {
    fn share(&self, _path: &Path) -> Result<(), ExportError> {
        Err(ExportError::ShareFailed("permission denied".into()))
    }
}

/// Simulates a device without file system access.
pub struct BrokenPrinter;

impl Printer for BrokenPrinter {
    fn print_to_file(&self, _document: &Document) -> Result<PathBuf, ExportError> {
        Err(ExportError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "no file system access",
        )))
    }
}
