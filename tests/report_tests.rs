mod common;

use common::{account_entry, labor_entry};
use ledger_sheets::{
    ledger::Column,
    report::{record_card, ReportStyle},
    Fields, Ledger, ReportRenderer, Schema,
};
use regex::Regex;

fn tbody_rows(html: &str) -> usize {
    let tbody = html
        .split("<tbody>")
        .nth(1)
        .and_then(|rest| rest.split("</tbody>").next())
        .expect("tbody present");
    tbody.matches("<tr>").count()
}

#[test]
fn renders_full_account_document() {
    let mut ledger = Ledger::new(Schema::account());
    ledger.add(account_entry("2024-01-01", "A", "100", "100"));

    let document = ReportRenderer::default().render_ledger(&ledger);

    let expected = concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<style>\n",
        "table {\n",
        "  width: 100%;\n",
        "  border-collapse: collapse;\n",
        "}\n",
        "th, td {\n",
        "  border: 1px solid #ddd;\n",
        "  padding: 8px;\n",
        "}\n",
        "</style>\n",
        "</head>\n",
        "<body>\n",
        "<table>\n",
        "<thead>\n",
        "<tr><th>Date</th><th>Sugar Mill</th><th>Rent</th><th>Paid</th></tr>\n",
        "</thead>\n",
        "<tbody>\n",
        "<tr><td>2024-01-01</td><td>A</td><td>100</td><td>100</td></tr>\n",
        "</tbody>\n",
        "</table>\n",
        "</body>\n",
        "</html>\n"
    );
    assert_eq!(document.as_str(), expected);
    assert_eq!(document.body_row_count(), 1);
}

#[test]
fn rendering_is_deterministic() {
    let mut ledger = Ledger::new(Schema::labor());
    ledger.add(labor_entry("January", "10", "20"));
    ledger.add(labor_entry("February", "11", "21"));
    let renderer = ReportRenderer::default();

    let first = renderer.render_ledger(&ledger);
    let second = renderer.render_ledger(&ledger);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn empty_snapshot_renders_header_only() {
    let ledger = Ledger::new(Schema::labor());
    let document = ReportRenderer::default().render_ledger(&ledger);

    let html = document.as_str();
    assert!(html.contains("<tr><th>Month</th><th>Expenses</th><th>Cost</th></tr>"));
    assert_eq!(tbody_rows(html), 0);
    assert_eq!(document.body_row_count(), 0);
}

#[test]
fn removing_the_only_record_yields_header_only_document() {
    let mut ledger = Ledger::new(Schema::account());
    let id = ledger.add(account_entry("2024-01-01", "A", "100", "100")).id();
    ledger.remove(id);

    let html = ReportRenderer::default().render_ledger(&ledger).into_string();
    assert!(html.contains("<thead>"));
    assert_eq!(tbody_rows(&html), 0);
    assert!(!html.contains("<td>"));
}

#[test]
fn rows_follow_snapshot_order_and_cells_follow_column_order() {
    let mut ledger = Ledger::new(Schema::labor());
    ledger.add(labor_entry("March", "1", "2"));
    ledger.add(labor_entry("January", "3", "4"));

    let html = ReportRenderer::default().render_ledger(&ledger).into_string();
    let row = Regex::new(r"<tr><td>([^<]*)</td><td>([^<]*)</td><td>([^<]*)</td></tr>")
        .expect("valid regex");
    let rows: Vec<Vec<String>> = row
        .captures_iter(&html)
        .map(|caps| (1..=3).map(|idx| caps[idx].to_string()).collect())
        .collect();

    assert_eq!(
        rows,
        vec![vec!["March", "1", "2"], vec!["January", "3", "4"]]
    );
}

#[test]
fn missing_fields_render_as_empty_cells() {
    let mut ledger = Ledger::new(Schema::account());
    ledger.add(Fields::new().with("date", "2024-02-02"));

    let html = ReportRenderer::default().render_ledger(&ledger).into_string();
    assert!(html.contains("<tr><td>2024-02-02</td><td></td><td></td><td></td></tr>"));
}

#[test]
fn fields_outside_the_columns_are_ignored() {
    let mut ledger = Ledger::new(Schema::labor());
    ledger.add(labor_entry("July", "5", "6").with("note", "hidden"));

    let html = ReportRenderer::default().render_ledger(&ledger).into_string();
    assert!(!html.contains("hidden"));
}

#[test]
fn cell_markup_is_escaped() {
    let mut ledger = Ledger::new(Schema::account());
    ledger.add(account_entry("2024-01-01", "<b>Mill & Co</b>", "1", "1"));

    let html = ReportRenderer::default().render_ledger(&ledger).into_string();
    assert!(html.contains("<td>&lt;b&gt;Mill &amp; Co&lt;/b&gt;</td>"));
    assert!(!html.contains("<b>"));
}

#[test]
fn custom_columns_and_style_are_honoured() {
    let columns = vec![Column::text("paid", "Paid"), Column::text("date", "When")];
    let mut ledger = Ledger::new(Schema::account());
    ledger.add(account_entry("2024-01-01", "A", "100", "75"));

    let renderer = ReportRenderer::new(ReportStyle {
        stylesheet: "td { color: red; }".into(),
        show_title: true,
    });
    let html = renderer
        .render_titled(Some("Armec India"), &columns, ledger.snapshot())
        .into_string();

    assert!(html.contains("<title>Armec India</title>"));
    assert!(html.contains("<style>\ntd { color: red; }\n</style>"));
    assert!(html.contains("<tr><th>Paid</th><th>When</th></tr>"));
    assert!(html.contains("<tr><td>75</td><td>2024-01-01</td></tr>"));
}

#[test]
fn record_card_lists_header_value_pairs() {
    let mut ledger = Ledger::new(Schema::labor());
    let id = ledger.add(labor_entry("August", "12", "30")).id();
    let record = ledger.find_by_id(id).expect("record present");

    let card = record_card(ledger.schema().columns(), record);
    assert_eq!(card.id, id);
    assert_eq!(card.lines, vec!["Month: August", "Expenses: 12", "Cost: 30"]);
}
