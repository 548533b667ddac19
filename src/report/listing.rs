//! Plain-text record cards for the on-screen list.

use crate::ledger::{Column, Ledger, Record, RecordId};

/// One entry of the scrolling record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCard {
    pub id: RecordId,
    pub lines: Vec<String>,
}

/// Renders `Header: value` lines in column order.
pub fn record_card(columns: &[Column], record: &Record) -> RecordCard {
    let lines = columns
        .iter()
        .map(|column| {
            format!(
                "{}: {}",
                column.header,
                record.fields.value_or_empty(&column.name)
            )
        })
        .collect();
    RecordCard {
        id: record.id(),
        lines,
    }
}

pub fn ledger_cards(ledger: &Ledger) -> Vec<RecordCard> {
    let columns = ledger.schema().columns();
    ledger
        .iter()
        .map(|record| record_card(columns, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Fields, Schema};

    #[test]
    fn cards_follow_schema_order_and_blank_missing_fields() {
        let mut ledger = Ledger::new(Schema::account());
        ledger.add(Fields::new().with("paid", "100").with("date", "2024-01-01"));

        let cards = ledger_cards(&ledger);
        assert_eq!(cards.len(), 1);
        assert_eq!(
            cards[0].lines,
            vec!["Date: 2024-01-01", "Sugar Mill: ", "Rent: ", "Paid: 100"]
        );
    }
}
