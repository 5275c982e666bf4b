//! Relationship graph of addresses and the value moved between them.

use std::collections::HashMap;

use tracing::debug;
use tx_viewer_shared::TransferEdge;

use crate::colormap::{Blues, Normalize};
use crate::layout::spring_layout;
use crate::svg::{format_tick, SvgDocument, TextStyle, AXIS_COLOR};

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;
const NODE_RADIUS: f64 = 30.0;
const NODE_COLOR: &str = "skyblue";
const EDGE_WIDTH: f64 = 2.0;
const COLORBAR_STEPS: usize = 10;

pub const COLORBAR_LABEL: &str = "Transaction Value (Ether)";
/// Edge colours encode the value summed over every transfer between a pair.
pub const COLORBAR_NOTE: &str = "total per address pair";

/// One drawn edge: all transfers between a pair of addresses, either direction.
#[derive(Debug, Clone, PartialEq)]
pub struct PairEdge {
    pub a: usize,
    pub b: usize,
    pub value: f64,
    pub transfers: usize,
}

/// Undirected address graph built from read-back rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationshipGraph {
    /// Addresses in first-seen order.
    pub nodes: Vec<String>,
    pub edges: Vec<PairEdge>,
}

impl RelationshipGraph {
    /// Collapse parallel and opposite transfers into one edge per address pair, summing values.
    pub fn from_edges(rows: &[TransferEdge]) -> Self {
        let mut graph = Self::default();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut pairs: HashMap<(usize, usize), usize> = HashMap::new();

        for row in rows {
            let from = node_index(&mut index, &mut graph.nodes, &row.from);
            let to = node_index(&mut index, &mut graph.nodes, &row.to);
            let key = (from.min(to), from.max(to));

            match pairs.get(&key) {
                Some(&edge_idx) => {
                    let edge = &mut graph.edges[edge_idx];
                    edge.value += row.value;
                    edge.transfers += 1;
                }
                None => {
                    pairs.insert(key, graph.edges.len());
                    graph.edges.push(PairEdge {
                        a: key.0,
                        b: key.1,
                        value: row.value,
                        transfers: 1,
                    });
                }
            }
        }

        graph
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn node_index<'a>(
    index: &mut HashMap<&'a str, usize>,
    nodes: &mut Vec<String>,
    address: &'a str,
) -> usize {
    *index.entry(address).or_insert_with(|| {
        nodes.push(address.to_string());
        nodes.len() - 1
    })
}

/// Shorten an address to `0x1234…abcd` for node labels.
fn short_label(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 13 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// Render the relationship graph, or `None` when there are no rows.
pub fn relationship_graph(rows: &[TransferEdge], seed: u64) -> Option<String> {
    let graph = RelationshipGraph::from_edges(rows);
    if graph.is_empty() {
        return None;
    }

    let norm = Normalize::from_values(graph.edges.iter().map(|e| e.value))?;
    let pairs: Vec<(usize, usize)> = graph.edges.iter().map(|e| (e.a, e.b)).collect();
    let layout = spring_layout(graph.nodes.len(), &pairs, seed);
    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Laid out relationship graph"
    );

    // Drawing box, leaving room for node circles and the colour bar
    let left = NODE_RADIUS + 20.0;
    let top = NODE_RADIUS + 20.0;
    let width = f64::from(WIDTH) - 200.0 - left;
    let height = f64::from(HEIGHT) - 2.0 * top;
    let place = |(x, y): (f64, f64)| {
        (
            left + (x + 1.0) / 2.0 * width,
            top + (1.0 - (y + 1.0) / 2.0) * height,
        )
    };

    let mut doc = SvgDocument::new(WIDTH, HEIGHT);

    for edge in &graph.edges {
        let color = Blues::hex(norm.apply(edge.value));
        let (x1, y1) = place(layout[edge.a]);
        if edge.a == edge.b {
            doc.raw(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{color}" stroke-width="{EDGE_WIDTH}"/>"#,
                x1,
                y1 - NODE_RADIUS,
                NODE_RADIUS * 0.6
            ));
            continue;
        }
        let (x2, y2) = place(layout[edge.b]);
        doc.raw(&format!(
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{color}" stroke-width="{EDGE_WIDTH}"><title>{} ETH total over {} transfer(s)</title></line>"#,
            format_tick(edge.value),
            edge.transfers
        ));
    }

    for (idx, address) in graph.nodes.iter().enumerate() {
        let (x, y) = place(layout[idx]);
        doc.circle(x, y, NODE_RADIUS, NODE_COLOR, Some(address));
        doc.text(
            x,
            y + 4.0,
            &short_label(address),
            TextStyle::centered(10.0).bold().color("black"),
        );
    }

    colorbar(&mut doc, &norm);
    Some(doc.finish())
}

/// Vertical colour bar on the right edge.
fn colorbar(doc: &mut SvgDocument, norm: &Normalize) {
    let x = f64::from(WIDTH) - 130.0;
    let top = 60.0;
    let bar_width = 24.0;
    let bar_height = f64::from(HEIGHT) - 120.0;

    let stops: Vec<String> = (0..=COLORBAR_STEPS)
        .map(|i| {
            let t = i as f64 / COLORBAR_STEPS as f64;
            format!(
                r#"<stop offset="{:.0}%" stop-color="{}"/>"#,
                t * 100.0,
                Blues::hex(1.0 - t)
            )
        })
        .collect();
    doc.raw(&format!(
        r#"<defs><linearGradient id="colorbar" x1="0" y1="0" x2="0" y2="1">{}</linearGradient></defs>"#,
        stops.join("")
    ));
    doc.raw(&format!(
        r#"<rect x="{x:.2}" y="{top:.2}" width="{bar_width:.2}" height="{bar_height:.2}" fill="url(#colorbar)" stroke="{AXIS_COLOR}" stroke-width="0.5"/>"#
    ));

    let labels = [(norm.max, top), (norm.min, top + bar_height)];
    for (value, y) in labels {
        doc.line(x + bar_width, y, x + bar_width + 5.0, y, AXIS_COLOR, 1.0);
        doc.text(x + bar_width + 8.0, y + 4.0, &format_tick(value), TextStyle::start(11.0));
    }

    doc.text(
        x + bar_width + 70.0,
        top + bar_height / 2.0,
        COLORBAR_LABEL,
        TextStyle::centered(13.0).rotated(-90.0),
    );
    doc.text(
        x + bar_width / 2.0,
        top + bar_height + 24.0,
        COLORBAR_NOTE,
        TextStyle::centered(11.0).color(AXIS_COLOR),
    );
}
