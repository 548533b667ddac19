//! Record ledgers, their column schemas, and the entry form that feeds them.

pub mod form;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;
pub mod schema;

pub use form::{Commit, EditPolicy, FormPhase, FormState};
pub use ledger::Ledger;
pub use record::{Fields, Record, RecordId};
pub use schema::{Column, ColumnKind, Schema, Violation, ViolationKind};
