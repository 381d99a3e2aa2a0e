use serde::Serialize;

use crate::cell::{Cell, Dir};

/// Row-major flat grid. No per-cell objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }

    pub fn filled(w: usize, h: usize, v: T) -> Self {
        Self {
            data: vec![v; w * h],
            w,
            h,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

/// Cell coordinate on the cylinder. `y = 0` is the bottom margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Normalize a column onto the cylinder, shearing the row by `helix` for every
/// turn taken across the seam. The shift is applied before the row is
/// bounds-checked; returns None if the sheared row leaves the grid.
#[inline]
pub fn wrap_helix(x: i64, y: i64, w: usize, h: usize, helix: usize) -> Option<Pos> {
    let w = w as i64;
    let turns = x.div_euclid(w);
    let wx = x.rem_euclid(w);
    let wy = y + turns * helix as i64;
    if wy < 0 || wy >= h as i64 {
        return None; // axial ends: no wrap
    }
    Some(Pos::new(wx as usize, wy as usize))
}

/// Cell flags on a helical cylinder. Rows 0 and h-1 are margin rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Grid<Cell>,
    helix: usize,
}

impl MazeGrid {
    pub fn new(w: usize, h: usize, helix: usize) -> Self {
        let mut cells = Grid::<Cell>::new(w, h);
        for x in 0..w {
            cells.set(x, 0, Cell::invalid());
            cells.set(x, h - 1, Cell::invalid());
        }
        Self { cells, helix }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cells.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cells.h
    }

    #[inline]
    pub fn helix(&self) -> usize {
        self.helix
    }

    /// Row index of the top margin.
    #[inline]
    pub fn top_margin(&self) -> usize {
        self.cells.h - 1
    }

    /// Flags at a possibly out-of-range coordinate. Anything that does not
    /// land inside the grid reads as INVALID.
    pub fn test_cell(&self, x: i64, y: i64) -> Cell {
        match wrap_helix(x, y, self.cells.w, self.cells.h, self.helix) {
            Some(p) => self.cells.get(p.x, p.y),
            None => Cell::invalid(),
        }
    }

    /// Flags of an in-range cell.
    #[inline]
    pub fn cell(&self, p: Pos) -> Cell {
        self.cells.get(p.x, p.y)
    }

    pub fn neighbor(&self, p: Pos, dir: Dir) -> Option<Pos> {
        let (dx, dy) = dir.offset();
        wrap_helix(
            p.x as i64 + dx,
            p.y as i64 + dy,
            self.cells.w,
            self.cells.h,
            self.helix,
        )
    }

    /// Set `dir` on `p` and mirror the opposite flag on the neighbour.
    /// An out-of-grid neighbour is skipped silently.
    pub fn set_connection(&mut self, p: Pos, dir: Dir) -> Option<Pos> {
        let i = self.cells.idx(p.x, p.y);
        self.cells.data[i].connect(dir);
        let n = self.neighbor(p, dir)?;
        let j = self.cells.idx(n.x, n.y);
        self.cells.data[j].connect(dir.opposite());
        Some(n)
    }

    pub fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (w, h) = (self.cells.w, self.cells.h);
        (0..h).flat_map(move |y| (0..w).map(move |x| Pos::new(x, y)))
    }
}
