//! Column descriptors shared by the ledger, the entry form, and the report.

use std::{fmt, str::FromStr};

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

use super::record::Fields;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Input hint for a column. Only consulted by [`Schema::validate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    Date,
    Month,
    Amount,
}

impl ColumnKind {
    /// Front-ends show a numeric keypad for these columns.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Amount)
    }
}

/// A named field together with its display header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub header: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, header: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            header: header.into(),
            kind,
        }
    }

    pub fn text(name: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(name, header, ColumnKind::Text)
    }
}

/// Ordered field layout for one kind of ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    key: String,
    title: String,
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(key: impl Into<String>, title: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            columns,
        }
    }

    /// Sugar mill rent payments.
    pub fn account() -> Self {
        Self::new(
            "account",
            "Armec India",
            vec![
                Column::new("date", "Date", ColumnKind::Date),
                Column::text("sugarMill", "Sugar Mill"),
                Column::new("rent", "Rent", ColumnKind::Amount),
                Column::new("paid", "Paid", ColumnKind::Amount),
            ],
        )
    }

    /// Monthly labor expenses.
    pub fn labor() -> Self {
        Self::new(
            "labor",
            "Labor & Majuri",
            vec![
                Column::new("month", "Month", ColumnKind::Month),
                Column::new("expenses", "Expenses", ColumnKind::Amount),
                Column::new("cost", "Cost", ColumnKind::Amount),
            ],
        )
    }

    /// Raw product purchases.
    pub fn raw_products() -> Self {
        Self::new(
            "raw_products",
            "Raw Products",
            vec![
                Column::new("date", "Date", ColumnKind::Date),
                Column::text("product", "Product"),
                Column::new("quantity", "Quantity", ColumnKind::Amount),
                Column::new("rate", "Rate", ColumnKind::Amount),
                Column::new("amount", "Amount", ColumnKind::Amount),
            ],
        )
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Checks `fields` against the column kinds.
    ///
    /// Ledgers never call this: records are free text. Front-ends that want
    /// stricter input call it before committing a form.
    pub fn validate(&self, fields: &Fields) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();

        for name in fields.names() {
            if !self.has_column(name) {
                violations.push(Violation::new(name, ViolationKind::UnknownField));
            }
        }

        for column in &self.columns {
            let value = fields.value_or_empty(&column.name).trim();
            if value.is_empty() {
                violations.push(Violation::new(&column.name, ViolationKind::Missing));
                continue;
            }
            let kind = match column.kind {
                ColumnKind::Text => None,
                ColumnKind::Date => (!is_date(value)).then_some(ViolationKind::InvalidDate),
                ColumnKind::Month => (!is_month(value)).then_some(ViolationKind::InvalidMonth),
                ColumnKind::Amount => (!is_amount(value)).then_some(ViolationKind::InvalidAmount),
            };
            if let Some(kind) = kind {
                violations.push(Violation::new(&column.name, kind));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn is_date(value: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
}

fn is_month(value: &str) -> bool {
    Month::from_str(value).is_ok()
        || NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").is_ok()
}

fn is_amount(value: &str) -> bool {
    value
        .replace(',', "")
        .parse::<f64>()
        .map(f64::is_finite)
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    UnknownField,
    Missing,
    InvalidDate,
    InvalidMonth,
    InvalidAmount,
}

/// One problem found by [`Schema::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            ViolationKind::UnknownField => "is not part of this ledger",
            ViolationKind::Missing => "cannot be empty",
            ViolationKind::InvalidDate => "must be a date (YYYY-MM-DD or DD/MM/YYYY)",
            ViolationKind::InvalidMonth => "must be a month name or YYYY-MM",
            ViolationKind::InvalidAmount => "must be a number",
        };
        write!(f, "`{}` {}", self.field, reason)
    }
}
