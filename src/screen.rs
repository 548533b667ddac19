//! One data-entry screen: a ledger, its entry form, and the actions wired to them.

use tracing::info;

use crate::{
    errors::{ExportError, LedgerError},
    export::{export_document, ExportReceipt, Printer, Sharer},
    ledger::{Commit, EditPolicy, FormState, Ledger, Record, RecordId, Schema},
    report::{ledger_cards, Document, RecordCard, ReportRenderer},
};

#[derive(Debug)]
pub struct Screen {
    ledger: Ledger,
    form: FormState,
    policy: EditPolicy,
}

impl Screen {
    pub fn new(schema: Schema, policy: EditPolicy) -> Self {
        let form = FormState::new(&schema);
        Self {
            ledger: Ledger::new(schema),
            form,
            policy,
        }
    }

    pub fn title(&self) -> &str {
        self.ledger.schema().title()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn edit_policy(&self) -> EditPolicy {
        self.policy
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), LedgerError> {
        self.form.set(name, value)
    }

    /// Commits the form. An appended record lands at [`Screen::scroll_target`].
    pub fn save(&mut self) -> Result<Commit, LedgerError> {
        self.form.commit(&mut self.ledger, self.policy)
    }

    pub fn clear(&mut self) {
        self.form.clear();
    }

    /// Loads `id` into the form. Returns `false` when the record does not exist.
    pub fn edit(&mut self, id: RecordId) -> bool {
        match self.ledger.find_by_id(id) {
            Some(record) => {
                self.form.load_from(record);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: RecordId) -> Option<Record> {
        self.ledger.remove(id)
    }

    pub fn cards(&self) -> Vec<RecordCard> {
        ledger_cards(&self.ledger)
    }

    /// Index of the last list entry, where the view scrolls after a save.
    pub fn scroll_target(&self) -> Option<usize> {
        self.ledger.len().checked_sub(1)
    }

    pub fn render(&self, renderer: &ReportRenderer) -> Document {
        renderer.render_ledger(&self.ledger)
    }

    /// Renders the current snapshot and hands it to the collaborators.
    ///
    /// The ledger is borrowed immutably, so a failed export leaves it as it was.
    pub fn export(
        &self,
        renderer: &ReportRenderer,
        printer: &dyn Printer,
        sharer: &dyn Sharer,
    ) -> Result<ExportReceipt, ExportError> {
        info!(
            ledger = self.ledger.schema().key(),
            records = self.ledger.len(),
            "exporting ledger"
        );
        let document = self.render(renderer);
        export_document(&document, printer, sharer)
    }
}
