//! HTML tables for transfers and read-back edges.

use std::fmt::Write;

use tx_charts::svg::escape;
use tx_viewer_shared::{Transfer, TransferEdge};

const TRANSFER_HEADERS: [&str; 9] = [
    "timeStamp",
    "blockNumber",
    "hash",
    "from",
    "to",
    "value (wei)",
    "value (ETH)",
    "gasUsed",
    "isError",
];

const EDGE_HEADERS: [&str; 3] = ["from", "to", "value"];

fn header_row(out: &mut String, headers: &[&str]) {
    out.push_str("<thead><tr>");
    for header in headers {
        let _ = write!(out, "<th>{}</th>", escape(header));
    }
    out.push_str("</tr></thead>");
}

fn cell(out: &mut String, text: &str) {
    let _ = write!(out, "<td>{}</td>", escape(text));
}

/// One row per fetched transaction, in explorer order.
pub fn transfers_table(transfers: &[Transfer]) -> String {
    let mut out = String::from(r#"<div class="table-wrap"><table class="data">"#);
    header_row(&mut out, &TRANSFER_HEADERS);
    out.push_str("<tbody>");
    for transfer in transfers {
        out.push_str("<tr>");
        cell(&mut out, &transfer.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
        cell(&mut out, transfer.block_number.as_deref().unwrap_or(""));
        cell(&mut out, &transfer.hash);
        cell(&mut out, &transfer.from);
        cell(&mut out, transfer.recipient());
        cell(&mut out, &transfer.value_wei.to_string());
        cell(&mut out, &transfer.value_eth.to_string());
        cell(&mut out, transfer.gas_used.as_deref().unwrap_or(""));
        cell(&mut out, if transfer.is_error { "1" } else { "0" });
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
    out
}

/// One row per `SENT` relationship read back from the graph.
pub fn edges_table(rows: &[TransferEdge]) -> String {
    let mut out = String::from(r#"<div class="table-wrap"><table class="data">"#);
    header_row(&mut out, &EDGE_HEADERS);
    out.push_str("<tbody>");
    for row in rows {
        out.push_str("<tr>");
        cell(&mut out, &row.from);
        cell(&mut out, &row.to);
        cell(&mut out, &row.value.to_string());
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tx_viewer_shared::RawTransaction;

    #[test]
    fn test_transfers_table_rows() {
        let transfer = Transfer::try_from(RawTransaction::new(
            "0xa",
            "0xb",
            "1500000000000000000",
            "0xhash",
            "1439048640",
        ))
        .unwrap();

        let html = transfers_table(&[transfer.clone(), transfer]);
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<td>2015-08-08 15:44:00</td>"));
        assert!(html.contains("<td>1500000000000000000</td><td>1.5</td>"));
        assert!(html.contains("<th>value (wei)</th>"));
        assert!(html.contains("<th>value (ETH)</th>"));
    }

    #[test]
    fn test_edges_table_escapes_cells() {
        let html = edges_table(&[TransferEdge::new("<script>", "0xb", 2.0)]);
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("<td>2</td>"));
    }
}
