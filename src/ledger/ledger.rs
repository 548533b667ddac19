use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::{
    record::{Fields, Record, RecordId},
    schema::Schema,
};

/// Ordered collection of records sharing one [`Schema`].
///
/// Insertion order is display order. Ids come from a counter owned by the
/// ledger, so they increase strictly and are never handed out twice.
#[derive(Debug)]
pub struct Ledger {
    schema: Schema,
    records: Vec<Record>,
    next_id: AtomicU64,
}

impl Ledger {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            records: Vec::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    fn allocate_id(&self) -> RecordId {
        RecordId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Appends a record built from `fields` and returns it.
    pub fn add(&mut self, fields: Fields) -> &Record {
        let id = self.allocate_id();
        debug!(ledger = self.schema.key(), %id, "adding record");
        let index = self.records.len();
        self.records.push(Record::new(id, fields));
        &self.records[index]
    }

    /// Replaces the fields of `id` without moving it. Absent ids are ignored.
    pub fn update(&mut self, id: RecordId, fields: Fields) -> Option<&Record> {
        let Some(index) = self.position(id) else {
            debug!(ledger = self.schema.key(), %id, "update skipped, record not found");
            return None;
        };
        debug!(ledger = self.schema.key(), %id, "updating record in place");
        let record = &mut self.records[index];
        record.fields = fields;
        Some(&*record)
    }

    /// Removes `id`, keeping the order of the remaining records.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let index = self.position(id)?;
        debug!(ledger = self.schema.key(), %id, "removing record");
        Some(self.records.remove(index))
    }

    pub fn find_by_id(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn snapshot(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
