pub mod grow;
pub mod metrics;
pub mod query;
pub mod solution;

pub use metrics::{Difficulty, Metrics};
pub use query::Connectivity;
pub use solution::Solution;

use crate::cell::{Cell, Dir};
use crate::grid::{MazeGrid, Pos};

/// A finished maze. Immutable: generation hands it out once and nothing
/// mutates it afterwards.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: MazeGrid,
    solution: Solution,
    metrics: Metrics,
}

impl Maze {
    pub fn new(grid: MazeGrid, solution: Solution, metrics: Metrics) -> Self {
        Self {
            grid,
            solution,
            metrics,
        }
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn helix(&self) -> usize {
        self.grid.helix()
    }

    /// Exit cell first, rim cell last.
    pub fn solution_path(&self) -> &[Pos] {
        &self.solution.path
    }

    pub fn entry_cell(&self) -> Pos {
        self.solution.entry
    }

    pub fn exit_cell(&self) -> Pos {
        self.solution.exit
    }

    pub fn dead_ends(&self) -> usize {
        self.metrics.dead_ends
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl Connectivity for Maze {
    fn width(&self) -> usize {
        self.grid.width()
    }

    fn height(&self) -> usize {
        self.grid.height()
    }

    fn cell(&self, p: Pos) -> Cell {
        self.grid.cell(p)
    }

    fn neighbor(&self, p: Pos, dir: Dir) -> Option<Pos> {
        self.grid.neighbor(p, dir)
    }
}
