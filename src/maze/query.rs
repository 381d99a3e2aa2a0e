use crate::cell::{Cell, Dir};
use crate::grid::{MazeGrid, Pos};

/// Read-only view of maze connectivity. Geometry and preview code observe a
/// maze only through this trait.
pub trait Connectivity {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn cell(&self, p: Pos) -> Cell;
    fn neighbor(&self, p: Pos, dir: Dir) -> Option<Pos>;

    fn contains(&self, p: Pos) -> bool {
        p.x < self.width() && p.y < self.height()
    }

    /// True iff `a` and `b` are one (wrap-aware) step apart and that step is
    /// carved. Either argument order works.
    fn is_connected(&self, a: Pos, b: Pos) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        let (ca, cb) = (self.cell(a), self.cell(b));
        Dir::ALL.iter().any(|&d| {
            self.neighbor(a, d) == Some(b) && (ca.has(d) || cb.has(d.opposite()))
        })
    }

    /// Carved neighbours of `p`, in `Dir::ALL` order.
    fn links(&self, p: Pos) -> Vec<Pos> {
        let c = self.cell(p);
        Dir::ALL
            .iter()
            .filter(|&&d| c.has(d))
            .filter_map(|&d| self.neighbor(p, d))
            .collect()
    }
}

impl Connectivity for MazeGrid {
    fn width(&self) -> usize {
        MazeGrid::width(self)
    }

    fn height(&self) -> usize {
        MazeGrid::height(self)
    }

    fn cell(&self, p: Pos) -> Cell {
        MazeGrid::cell(self, p)
    }

    fn neighbor(&self, p: Pos, dir: Dir) -> Option<Pos> {
        MazeGrid::neighbor(self, p, dir)
    }
}
