#![doc(test(attr(deny(warnings))))]

//! Ledger Sheets keeps per-category record ledgers (account payments, labor
//! costs, raw-product purchases) in memory and renders them as printable HTML
//! tables.

pub mod config;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod report;
pub mod screen;
pub mod utils;
pub mod workbook;

pub use errors::{ExportError, LedgerError};
pub use ledger::{Commit, EditPolicy, Fields, FormState, Ledger, Record, RecordId, Schema};
pub use report::{Document, ReportRenderer};
pub use screen::Screen;
pub use workbook::{Tab, Workbook};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Sheets tracing initialized.");
    });
}
