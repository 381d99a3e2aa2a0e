//! Edge conventions for the geometry stage.
//!
//! A cylinder maze can be cut two ways: a groove along every carved edge, or
//! a wall along every edge that is not carved. Both read the same
//! connectivity and neither needs to know about the other.

use serde::Serialize;

use crate::cell::Dir;
use crate::grid::Pos;
use crate::maze::Connectivity;

/// One cell edge. `to` is None where the edge faces off the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub from: Pos,
    pub dir: Dir,
    pub to: Option<Pos>,
}

/// Every edge exactly once: each cell's RIGHT and UP edges, plus any edge
/// that leaves the grid (nothing on the far side would list it).
pub fn edges<M: Connectivity + ?Sized>(maze: &M) -> Vec<Segment> {
    let mut out = Vec::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let from = Pos::new(x, y);
            for dir in Dir::ALL {
                let to = maze.neighbor(from, dir);
                if matches!(dir, Dir::Right | Dir::Up) || to.is_none() {
                    out.push(Segment { from, dir, to });
                }
            }
        }
    }
    out
}

pub trait SegmentConvention {
    fn name(&self) -> &'static str;

    fn keeps<M: Connectivity + ?Sized>(&self, maze: &M, edge: &Segment) -> bool;

    fn segments<M: Connectivity + ?Sized>(&self, maze: &M) -> Vec<Segment> {
        edges(maze)
            .into_iter()
            .filter(|e| self.keeps(maze, e))
            .collect()
    }
}

/// Cut a channel wherever the path passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Groove;

impl SegmentConvention for Groove {
    fn name(&self) -> &'static str {
        "groove"
    }

    fn keeps<M: Connectivity + ?Sized>(&self, maze: &M, edge: &Segment) -> bool {
        match edge.to {
            Some(to) => maze.is_connected(edge.from, to),
            // The entry shaft opens past the top of the grid
            None => maze.cell(edge.from).has(edge.dir),
        }
    }
}

/// Raise a barrier wherever the path does not pass. Edges between two margin
/// cells are solid material either way and are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wall;

impl SegmentConvention for Wall {
    fn name(&self) -> &'static str {
        "wall"
    }

    fn keeps<M: Connectivity + ?Sized>(&self, maze: &M, edge: &Segment) -> bool {
        let from = maze.cell(edge.from);
        match edge.to {
            Some(to) => {
                let touches_maze = !from.is_invalid() || !maze.cell(to).is_invalid();
                touches_maze && !maze.is_connected(edge.from, to)
            }
            None => !from.is_invalid() && !from.has(edge.dir),
        }
    }
}
