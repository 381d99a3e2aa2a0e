use crate::cell::Dir;
use crate::error::GenerationError;
use crate::grid::{Grid, MazeGrid, Pos};

use super::grow::{Growth, NO_PARENT};

/// The guaranteed walk through the maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Exit cell first, rim cell last.
    pub path: Vec<Pos>,
    /// Top margin cell of the entry shaft.
    pub entry: Pos,
    pub exit: Pos,
}

/// Rebuild the walk from the start to `end` by following predecessors.
pub fn trace_path(parent: &Grid<u32>, end: Pos) -> Vec<Pos> {
    let w = parent.w;
    let mut path = vec![end];
    let mut i = parent.get(end.x, end.y);
    while i != NO_PARENT {
        let p = Pos::new(i as usize % w, i as usize / w);
        path.push(p);
        i = parent.get(p.x, p.y);
    }
    path.reverse();
    path
}

/// Cut a straight vertical shaft down through the top margin band so the
/// entry is reachable from outside the maze body.
pub fn carve_entry_shaft(grid: &mut MazeGrid, column: usize) {
    let mut y = grid.top_margin();
    while y > 0 && grid.cell(Pos::new(column, y)).is_invalid() {
        let p = Pos::new(column, y);
        grid.set_connection(p, Dir::Up);
        grid.set_connection(p, Dir::Down);
        y -= 1;
    }
}

/// Turn the best rim-reaching walk into the final solution and open the
/// entry shaft above it.
pub fn finalize(growth: &mut Growth, min_len: usize) -> Result<Solution, GenerationError> {
    let end = growth.best_end.ok_or(GenerationError::NoSolution)?;
    let path = trace_path(&growth.parent, end);
    if path.len() < min_len {
        return Err(GenerationError::Degenerate {
            len: path.len(),
            min: min_len,
        });
    }

    carve_entry_shaft(&mut growth.grid, end.x);

    Ok(Solution {
        path,
        entry: Pos::new(end.x, growth.grid.top_margin()),
        exit: growth.start,
    })
}
