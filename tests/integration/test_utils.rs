//! Shared helpers for integration tests

use std::collections::{HashSet, VecDeque};

use helixmaze::cell::Dir;
use helixmaze::config::{Bias, Params};
use helixmaze::grid::Pos;
use helixmaze::maze::{Connectivity, Maze};

pub fn params(width: i32, height: i32, helix: i32, seed: u64, complexity: i32) -> Params {
    Params {
        width,
        height,
        helix,
        seed: seed.into(),
        complexity,
        bias: Bias::default(),
        ..Params::default()
    }
}

pub fn build(p: &Params) -> Maze {
    helixmaze::generate(p).expect("generation should succeed").0
}

/// Every position of the grid, bottom row first.
pub fn all_cells(maze: &Maze) -> Vec<Pos> {
    maze.grid().positions().collect()
}

/// Real (non-margin) cells carrying at least one connection.
pub fn visited_cells(maze: &Maze) -> Vec<Pos> {
    all_cells(maze)
        .into_iter()
        .filter(|&p| {
            let c = maze.cell(p);
            !c.is_invalid() && c.degree() > 0
        })
        .collect()
}

/// Undirected edges among real cells, each counted once.
pub fn real_edge_count(maze: &Maze) -> usize {
    let mut n = 0;
    for p in all_cells(maze) {
        if maze.cell(p).is_invalid() {
            continue;
        }
        for d in [Dir::Right, Dir::Up] {
            if let Some(q) = maze.neighbor(p, d) {
                if !maze.cell(q).is_invalid() && maze.is_connected(p, q) {
                    n += 1;
                }
            }
        }
    }
    n
}

/// Real cells reachable from `from` through carved edges, staying off margins.
pub fn reachable(maze: &Maze, from: Pos) -> HashSet<Pos> {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(p) = queue.pop_front() {
        for q in maze.links(p) {
            if !maze.cell(q).is_invalid() && seen.insert(q) {
                queue.push_back(q);
            }
        }
    }
    seen
}
