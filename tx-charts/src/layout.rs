//! Fruchterman-Reingold spring layout.
//!
//! Nodes repel each other with force `k²/d` and edges pull their endpoints
//! together with force `d²/k`, where `k = 1/sqrt(n)`. Positions start at
//! seeded random points in the unit square, move at most `t` per step while
//! `t` cools linearly, and are finally centred and scaled into `[-1, 1]`.
//!
//! Edges are kept as neighbour lists. Up to [`EXACT_REPULSION_LIMIT`] nodes
//! every pair repels; above it nodes are bucketed into a grid of `2k` cells
//! and only nodes in the same or adjacent cells repel, which keeps each
//! iteration linear in the number of nodes and edges.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_LAYOUT_SEED: u64 = 42;
/// Largest graph laid out with all-pairs repulsion.
pub const EXACT_REPULSION_LIMIT: usize = 500;
const ITERATIONS: usize = 50;
const MIN_DISTANCE: f64 = 0.01;
const CONVERGENCE_THRESHOLD: f64 = 1e-4;

type Point = (f64, f64);

/// Positions for `node_count` nodes joined by undirected `edges` (index pairs).
pub fn spring_layout(node_count: usize, edges: &[(usize, usize)], seed: u64) -> Vec<Point> {
    match node_count {
        0 => return Vec::new(),
        1 => return vec![(0.0, 0.0)],
        _ => {}
    }

    let neighbours = neighbour_lists(node_count, edges);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<Point> = (0..node_count)
        .map(|_| (rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let k = (1.0 / node_count as f64).sqrt();
    let mut t = extent(&pos) * 0.1;
    let dt = t / (ITERATIONS + 1) as f64;

    for _ in 0..ITERATIONS {
        let mut disp = if node_count <= EXACT_REPULSION_LIMIT {
            exact_repulsion(&pos, k)
        } else {
            grid_repulsion(&pos, k)
        };

        for (i, adjacent) in neighbours.iter().enumerate() {
            for &j in adjacent {
                let (ddx, ddy, distance) = separation(pos[i], pos[j]);
                let force = distance / k;
                disp[i].0 -= ddx * force;
                disp[i].1 -= ddy * force;
            }
        }

        let mut step_total = 0.0;
        for (p, (dx, dy)) in pos.iter_mut().zip(disp) {
            let mut length = (dx * dx + dy * dy).sqrt();
            if length < MIN_DISTANCE {
                length = 0.1;
            }
            let step = (dx * t / length, dy * t / length);
            step_total += (step.0 * step.0 + step.1 * step.1).sqrt();
            p.0 += step.0;
            p.1 += step.1;
        }
        t -= dt;

        if step_total / (node_count as f64) < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    rescale(&mut pos);
    pos
}

/// Deduplicated, self-loop free neighbour lists. Out of range indices are ignored.
fn neighbour_lists(node_count: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut neighbours = vec![Vec::new(); node_count];
    for &(a, b) in edges {
        if a < node_count && b < node_count && a != b {
            neighbours[a].push(b);
            neighbours[b].push(a);
        }
    }
    for adjacent in &mut neighbours {
        adjacent.sort_unstable();
        adjacent.dedup();
    }
    neighbours
}

fn extent(pos: &[Point]) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = pos.iter().copied().unzip();
    let span = |v: &[f64]| {
        v.iter().copied().fold(f64::MIN, f64::max) - v.iter().copied().fold(f64::MAX, f64::min)
    };
    span(&xs).max(span(&ys))
}

/// Offset from `b` to `a` and the clamped distance between them.
fn separation(a: Point, b: Point) -> (f64, f64, f64) {
    let ddx = a.0 - b.0;
    let ddy = a.1 - b.1;
    let distance = (ddx * ddx + ddy * ddy).sqrt().max(MIN_DISTANCE);
    (ddx, ddy, distance)
}

fn repel(disp: &mut Point, a: Point, b: Point, k: f64) {
    let (ddx, ddy, distance) = separation(a, b);
    let force = k * k / (distance * distance);
    disp.0 += ddx * force;
    disp.1 += ddy * force;
}

fn exact_repulsion(pos: &[Point], k: f64) -> Vec<Point> {
    let mut disp = vec![(0.0, 0.0); pos.len()];
    for (i, d) in disp.iter_mut().enumerate() {
        for (j, &other) in pos.iter().enumerate() {
            if i != j {
                repel(d, pos[i], other, k);
            }
        }
    }
    disp
}

/// Repulsion from nodes in the same or one of the eight surrounding `2k` cells.
fn grid_repulsion(pos: &[Point], k: f64) -> Vec<Point> {
    let cell_size = 2.0 * k;
    let cell_of = |p: Point| ((p.0 / cell_size).floor() as i64, (p.1 / cell_size).floor() as i64);

    let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    for (i, &p) in pos.iter().enumerate() {
        cells.entry(cell_of(p)).or_default().push(i);
    }

    let mut disp = vec![(0.0, 0.0); pos.len()];
    for (i, d) in disp.iter_mut().enumerate() {
        let (cx, cy) = cell_of(pos[i]);
        for gx in cx - 1..=cx + 1 {
            for gy in cy - 1..=cy + 1 {
                let Some(members) = cells.get(&(gx, gy)) else {
                    continue;
                };
                for &j in members {
                    if i != j {
                        repel(d, pos[i], pos[j], k);
                    }
                }
            }
        }
    }
    disp
}

/// Centre on the origin and scale so the largest coordinate magnitude is 1.
fn rescale(pos: &mut [(f64, f64)]) {
    let n = pos.len() as f64;
    let (cx, cy) = pos
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    let (cx, cy) = (cx / n, cy / n);

    let mut limit: f64 = 0.0;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        limit = limit.max(p.0.abs()).max(p.1.abs());
    }

    if limit > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= limit;
            p.1 /= limit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    #[test]
    fn test_trivial_graphs() {
        assert!(spring_layout(0, &[], 1).is_empty());
        assert_eq!(spring_layout(1, &[], 1), vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_positions_within_unit_box() {
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (5, 6)];
        let pos = spring_layout(7, &edges, DEFAULT_LAYOUT_SEED);

        assert_eq!(pos.len(), 7);
        for (x, y) in &pos {
            assert!(x.is_finite() && y.is_finite());
            assert!(x.abs() <= 1.0 + 1e-9 && y.abs() <= 1.0 + 1e-9);
        }
        let max = pos
            .iter()
            .map(|(x, y)| x.abs().max(y.abs()))
            .fold(0.0, f64::max);
        assert!((max - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let edges = vec![(0, 1), (1, 2)];
        assert_eq!(spring_layout(3, &edges, 7), spring_layout(3, &edges, 7));
    }

    #[test]
    fn test_connected_nodes_end_up_closer() {
        // a star 0-{1,2,3} plus a far isolated pair 4-5
        let edges = vec![(0, 1), (0, 2), (0, 3), (4, 5)];
        let pos = spring_layout(6, &edges, DEFAULT_LAYOUT_SEED);

        let linked: f64 = edges.iter().map(|&(a, b)| distance(pos[a], pos[b])).sum::<f64>()
            / edges.len() as f64;
        let across: Vec<f64> = (0..4)
            .flat_map(|a| (4..6).map(move |b| (a, b)))
            .map(|(a, b)| distance(pos[a], pos[b]))
            .collect();
        let unlinked = across.iter().sum::<f64>() / across.len() as f64;
        assert!(linked < unlinked);
    }

    #[test]
    fn test_neighbour_lists_dedup_and_skip_loops() {
        let neighbours = neighbour_lists(3, &[(0, 1), (1, 0), (0, 1), (2, 2), (0, 7)]);
        assert_eq!(neighbours, vec![vec![1], vec![0], vec![]]);
    }

    #[test]
    fn test_large_star_stays_finite_and_bounded() {
        let node_count = 5_000;
        let edges: Vec<(usize, usize)> = (1..node_count).map(|leaf| (0, leaf)).collect();
        let pos = spring_layout(node_count, &edges, DEFAULT_LAYOUT_SEED);

        assert_eq!(pos.len(), node_count);
        for (x, y) in &pos {
            assert!(x.is_finite() && y.is_finite());
            assert!(x.abs() <= 1.0 + 1e-9 && y.abs() <= 1.0 + 1e-9);
        }
        // the hub sits nearer the centre than the average leaf
        let hub = distance(pos[0], (0.0, 0.0));
        let leaves = pos[1..].iter().map(|&p| distance(p, (0.0, 0.0))).sum::<f64>()
            / (node_count - 1) as f64;
        assert!(hub < leaves);
    }

    #[test]
    fn test_grid_repulsion_matches_exact_for_close_nodes() {
        // every node within 2k of every other, so no pair is skipped
        let pos = vec![(0.0, 0.0), (0.01, 0.02), (0.03, 0.01)];
        let k = 0.5;
        let exact = exact_repulsion(&pos, k);
        let grid = grid_repulsion(&pos, k);
        for (a, b) in exact.iter().zip(&grid) {
            assert!((a.0 - b.0).abs() < 1e-12 && (a.1 - b.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_out_of_range_edges_ignored() {
        let pos = spring_layout(2, &[(0, 9)], DEFAULT_LAYOUT_SEED);
        assert_eq!(pos.len(), 2);
        assert!(pos.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
    }
}
