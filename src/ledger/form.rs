//! Draft values staged between user input and a ledger commit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    ledger::Ledger,
    record::{Fields, Record, RecordId},
    schema::Schema,
};
use crate::errors::LedgerError;

/// How committing a form that was loaded from an existing record behaves.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// The edited record replaces the original in place.
    #[default]
    ReplaceInPlace,
    /// The edited record is appended as a new entry and the original stays.
    Duplicate,
}

/// Where the form is in its save/clear cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Empty,
    Drafting,
    Editing(RecordId),
}

/// Result of [`FormState::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Appended(RecordId),
    Replaced(RecordId),
}

impl Commit {
    pub fn id(self) -> RecordId {
        match self {
            Commit::Appended(id) | Commit::Replaced(id) => id,
        }
    }

    pub fn is_append(self) -> bool {
        matches!(self, Commit::Appended(_))
    }
}

/// One string per schema field, plus the record the draft was loaded from.
#[derive(Debug, Clone)]
pub struct FormState {
    schema_key: String,
    fields: Vec<String>,
    values: Fields,
    editing: Option<RecordId>,
}

impl FormState {
    pub fn new(schema: &Schema) -> Self {
        Self {
            schema_key: schema.key().to_owned(),
            fields: schema.column_names().map(str::to_owned).collect(),
            values: Fields::new(),
            editing: None,
        }
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), LedgerError> {
        if !self.fields.iter().any(|field| field == name) {
            return Err(LedgerError::UnknownField(name.to_string()));
        }
        self.values.insert(name, value);
        Ok(())
    }

    /// Current draft value; fields never touched read as empty.
    pub fn get(&self, name: &str) -> &str {
        self.values.value_or_empty(name)
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    /// True when no field holds text and no record is loaded.
    pub fn is_empty(&self) -> bool {
        self.editing.is_none() && self.values.iter().all(|(_, value)| value.is_empty())
    }

    pub fn phase(&self) -> FormPhase {
        match self.editing {
            Some(id) => FormPhase::Editing(id),
            None if self.is_empty() => FormPhase::Empty,
            None => FormPhase::Drafting,
        }
    }

    pub fn clear(&mut self) {
        self.values = Fields::new();
        self.editing = None;
    }

    /// Copies the record's schema fields into the draft, replacing whatever was staged.
    pub fn load_from(&mut self, record: &Record) {
        self.values = self
            .fields
            .iter()
            .filter_map(|name| record.field(name).map(|value| (name.clone(), value.to_owned())))
            .collect();
        self.editing = Some(record.id());
    }

    /// Draft values for every schema field, empty where nothing was entered.
    pub fn values(&self) -> Fields {
        self.fields
            .iter()
            .map(|name| (name.clone(), self.get(name).to_owned()))
            .collect()
    }

    /// Writes the draft into `ledger`, then clears the form.
    ///
    /// Fails without touching either side when `ledger` uses a different schema.
    pub fn commit(
        &mut self,
        ledger: &mut Ledger,
        policy: EditPolicy,
    ) -> Result<Commit, LedgerError> {
        if ledger.schema().key() != self.schema_key {
            return Err(LedgerError::SchemaMismatch {
                expected: self.schema_key.clone(),
                found: ledger.schema().key().to_owned(),
            });
        }
        let values = self.values();
        let target = match policy {
            EditPolicy::ReplaceInPlace => self.editing,
            EditPolicy::Duplicate => None,
        };

        let replaced = match target {
            Some(id) => ledger.update(id, values.clone()).map(Record::id),
            None => None,
        };
        let outcome = match replaced {
            Some(id) => Commit::Replaced(id),
            None => Commit::Appended(ledger.add(values).id()),
        };
        debug!(ledger = ledger.schema().key(), ?outcome, ?policy, "form committed");

        self.clear();
        Ok(outcome)
    }
}
