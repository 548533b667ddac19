//! Report rendering for ledger snapshots.

pub mod listing;
pub mod renderer;

pub use listing::{ledger_cards, record_card, RecordCard};
pub use renderer::{Document, ReportRenderer, ReportStyle, DEFAULT_STYLESHEET};
