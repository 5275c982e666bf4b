//! Server-side HTML for the viewer page.

pub mod table;

use std::fmt::Write;

use tx_charts::svg::escape;

use crate::pipeline::{FetchRequest, Report};

pub use table::{edges_table, transfers_table};

pub const PAGE_TITLE: &str = "Ethereum Transaction Viewer";

// Section headings
pub const TRANSACTION_DATA: &str = "Transaction Data";
pub const TRANSACTIONS_OVER_TIME: &str = "Transactions Over Time";
pub const TRANSACTION_VOLUME: &str = "Transaction Volume";
pub const MAPPING_DATA: &str = "Relational Mapping Data";
pub const MAPPING_VISUALIZATION: &str = "Relational Mapping Visualization";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem auto; max-width: 1280px; color: #222; }
form { display: grid; grid-template-columns: 14rem 1fr; gap: 0.5rem 1rem; max-width: 48rem; }
form label { align-self: center; }
form input { padding: 0.35rem; font-family: monospace; }
form button { grid-column: 2; justify-self: start; padding: 0.4rem 1.2rem; }
.notice { padding: 0.6rem 1rem; margin: 1rem 0; border-radius: 4px; }
.notice.info { background: #e8f1fb; }
.notice.warning { background: #fff4d6; }
.notice.success { background: #e3f6e8; }
.notice.error { background: #fde4e4; }
.table-wrap { max-height: 24rem; overflow: auto; border: 1px solid #ddd; }
table.data { border-collapse: collapse; font-family: monospace; font-size: 0.85rem; }
table.data th, table.data td { padding: 0.2rem 0.6rem; border-bottom: 1px solid #eee; text-align: left; white-space: nowrap; }
.chart svg { max-width: 100%; height: auto; }
"#;

/// Render the page: the form filled with `request`, then the report if any.
pub fn page(request: &FetchRequest, report: Option<&Report>) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>{PAGE_TITLE}</title><style>{STYLE}</style></head><body><h1>{PAGE_TITLE}</h1>"#
    );
    form(&mut out, request);
    if let Some(report) = report {
        results(&mut out, report);
    }
    out.push_str("</body></html>");
    out
}

fn form(out: &mut String, request: &FetchRequest) {
    out.push_str(r#"<form method="post" action="/">"#);
    field(out, "address", "Enter Ethereum Address", "text", &request.address);
    field(out, "api_key", "Enter Etherscan API Key", "text", &request.api_key);
    field(out, "neo4j_uri", "Enter Neo4j URI", "text", &request.neo4j_uri);
    field(out, "neo4j_user", "Enter Neo4j Username", "text", &request.neo4j_user);
    field(out, "neo4j_password", "Enter Neo4j Password", "password", &request.neo4j_password);
    out.push_str(r#"<button type="submit">Fetch Transactions</button></form>"#);
}

fn field(out: &mut String, name: &str, label: &str, kind: &str, value: &str) {
    let _ = write!(
        out,
        r#"<label for="{name}">{label}</label><input id="{name}" name="{name}" type="{kind}" value="{}">"#,
        escape(value)
    );
}

fn results(out: &mut String, report: &Report) {
    for notice in &report.notices {
        let _ = write!(
            out,
            r#"<div class="notice {}">{}</div>"#,
            notice.level.css_class(),
            escape(&notice.text)
        );
    }

    if !report.transfers.is_empty() {
        section(out, TRANSACTION_DATA, &transfers_table(&report.transfers));
    }
    if let Some(svg) = &report.line_svg {
        chart(out, TRANSACTIONS_OVER_TIME, svg);
    }
    if let Some(svg) = &report.bar_svg {
        chart(out, TRANSACTION_VOLUME, svg);
    }
    if let Some(rows) = &report.graph_rows {
        section(out, MAPPING_DATA, &edges_table(rows));
    }
    if let Some(svg) = &report.graph_svg {
        chart(out, MAPPING_VISUALIZATION, svg);
    }

    if let Some(e) = &report.error {
        let _ = write!(out, r#"<div class="notice error">{}</div>"#, escape(&e.to_string()));
    }
}

fn section(out: &mut String, heading: &str, body: &str) {
    let _ = write!(out, "<section><h2>{}</h2>{body}</section>", escape(heading));
}

fn chart(out: &mut String, heading: &str, svg: &str) {
    let _ = write!(
        out,
        r#"<section class="chart"><h2>{}</h2>{svg}</section>"#,
        escape(heading)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormDefaults;
    use crate::pipeline::Notice;
    use tx_viewer_shared::TransferEdge;

    #[test]
    fn test_form_is_prefilled() {
        let html = page(&FetchRequest::from_defaults(&FormDefaults::default()), None);
        assert!(html.contains(r#"value="0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae""#));
        assert!(html.contains(r#"value="bolt://localhost:7687""#));
        assert!(html.contains(r#"type="password" value="password""#));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let request = FetchRequest {
            address: r#""><script>alert(1)</script>"#.into(),
            ..Default::default()
        };
        let html = page(&request, None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_sections_follow_report() {
        let report = Report {
            notices: vec![Notice::success("done")],
            graph_rows: Some(vec![TransferEdge::new("0xa", "0xb", 1.0)]),
            graph_svg: Some("<svg></svg>".into()),
            ..Default::default()
        };
        let html = page(&FetchRequest::default(), Some(&report));

        assert!(html.contains(r#"<div class="notice success">done</div>"#));
        assert!(!html.contains(TRANSACTION_DATA));
        assert!(html.contains(MAPPING_DATA));
        assert!(html.contains(MAPPING_VISUALIZATION));
        assert!(html.find(MAPPING_DATA) < html.find(MAPPING_VISUALIZATION));
    }
}
