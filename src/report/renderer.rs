use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::ledger::{Column, Ledger, Record};

pub const DEFAULT_STYLESHEET: &str = "table {
  width: 100%;
  border-collapse: collapse;
}
th, td {
  border: 1px solid #ddd;
  padding: 8px;
}";

/// Presentation settings embedded into every rendered document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportStyle {
    pub stylesheet: String,
    /// Emit the ledger's own heading as the document `<title>`.
    pub show_title: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            show_title: false,
        }
    }
}

/// A rendered, self-contained HTML report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
    body_rows: usize,
}

impl Document {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.html.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Number of `<tbody>` rows, one per record.
    pub fn body_row_count(&self) -> usize {
        self.body_rows
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// Turns a ledger snapshot into a printable table.
///
/// Output depends only on the style, the columns, and the records, so the same
/// input always produces the same bytes.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    style: ReportStyle,
}

impl ReportRenderer {
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ReportStyle {
        &self.style
    }

    /// Renders an untitled document.
    pub fn render(&self, columns: &[Column], records: &[Record]) -> Document {
        self.render_titled(None, columns, records)
    }

    pub fn render_titled(
        &self,
        title: Option<&str>,
        columns: &[Column],
        records: &[Record],
    ) -> Document {
        let mut html = String::new();
        let written = self.write_html(&mut html, title, columns, records);
        debug_assert!(written.is_ok(), "writing into a String cannot fail");
        Document {
            html,
            body_rows: records.len(),
        }
    }

    /// Renders the ledger's snapshot, titled with its own heading when the
    /// style asks for one.
    pub fn render_ledger(&self, ledger: &Ledger) -> Document {
        let schema = ledger.schema();
        let title = self.style.show_title.then(|| schema.title());
        self.render_titled(title, schema.columns(), ledger.snapshot())
    }

    /// Streams the document into any formatter sink.
    pub fn write_html<W: Write>(
        &self,
        out: &mut W,
        title: Option<&str>,
        columns: &[Column],
        records: &[Record],
    ) -> fmt::Result {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        if let Some(title) = title {
            writeln!(out, "<title>{}</title>", html_escape(title))?;
        }
        writeln!(out, "<style>")?;
        for line in self.style.stylesheet.lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<table>")?;

        writeln!(out, "<thead>")?;
        write!(out, "<tr>")?;
        for column in columns {
            write!(out, "<th>{}</th>", html_escape(&column.header))?;
        }
        writeln!(out, "</tr>")?;
        writeln!(out, "</thead>")?;

        writeln!(out, "<tbody>")?;
        for record in records {
            write!(out, "<tr>")?;
            for column in columns {
                let value = record.fields.value_or_empty(&column.name);
                write!(out, "<td>{}</td>", html_escape(value))?;
            }
            writeln!(out, "</tr>")?;
        }
        writeln!(out, "</tbody>")?;

        writeln!(out, "</table>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

/// Escape a string for HTML text content.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
