//! Hands rendered reports to the print/share collaborators.
//!
//! The ledger never sees any of this: export reads a finished [`Document`] and
//! either succeeds or returns the first collaborator failure.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{info, warn};
use uuid::Uuid;

use crate::{errors::ExportError, report::Document, utils::default_export_dir};

const EXPORT_EXTENSION: &str = "html";
const TMP_SUFFIX: &str = "tmp";

/// Turns a document into a file that can be shared.
pub trait Printer {
    fn print_to_file(&self, document: &Document) -> Result<PathBuf, ExportError>;
}

/// Offers a printed file through the platform's share or print mechanism.
pub trait Sharer {
    fn share(&self, path: &Path) -> Result<(), ExportError>;
}

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub rows: usize,
    pub bytes: usize,
}

/// Writes each document to a fresh `<uuid>.html` file.
#[derive(Debug, Clone)]
pub struct HtmlFilePrinter {
    dir: PathBuf,
}

impl HtmlFilePrinter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for HtmlFilePrinter {
    fn default() -> Self {
        Self::new(default_export_dir())
    }
}

impl Printer for HtmlFilePrinter {
    fn print_to_file(&self, document: &Document) -> Result<PathBuf, ExportError> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(ExportError::NoExportDirectory(self.dir.clone()));
        }
        fs::create_dir_all(&self.dir)?;

        let path = self
            .dir
            .join(format!("{}.{}", Uuid::new_v4(), EXPORT_EXTENSION));
        write_staged(&path, document.as_bytes())?;
        Ok(path)
    }
}

/// Writes `data` next to `path` and renames it into place.
///
/// The staging file is removed again if either step fails.
fn write_staged(path: &Path, data: &[u8]) -> Result<(), ExportError> {
    let tmp = path.with_extension(format!("{EXPORT_EXTENSION}.{TMP_SUFFIX}"));
    let result = fs::write(&tmp, data).and_then(|()| fs::rename(&tmp, path));
    if let Err(err) = result {
        if tmp.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %cleanup, "could not remove staging file");
            }
        }
        return Err(err.into());
    }
    Ok(())
}

/// Records share requests in the log. Used when no platform share sheet exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSharer;

impl Sharer for LogSharer {
    fn share(&self, path: &Path) -> Result<(), ExportError> {
        info!(path = %path.display(), "report ready to share");
        Ok(())
    }
}

/// Prints `document` to a file, then shares that file.
pub fn export_document(
    document: &Document,
    printer: &dyn Printer,
    sharer: &dyn Sharer,
) -> Result<ExportReceipt, ExportError> {
    let path = printer.print_to_file(document).map_err(|err| {
        warn!(error = %err, "printing report failed");
        err
    })?;
    sharer.share(&path).map_err(|err| {
        warn!(error = %err, path = %path.display(), "sharing report failed");
        err
    })?;

    info!(
        path = %path.display(),
        rows = document.body_row_count(),
        "report exported"
    );
    Ok(ExportReceipt {
        path,
        rows: document.body_row_count(),
        bytes: document.as_bytes().len(),
    })
}
