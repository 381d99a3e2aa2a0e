use std::collections::VecDeque;

use tracing::debug;

use crate::cell::Dir;
use crate::config::{MAX_COMPLEXITY, ValidParams};
use crate::error::GenerationError;
use crate::grid::{Grid, MazeGrid, Pos};
use crate::rng::Rng;

/// Marks a cell with no predecessor (the start, or never carved).
pub const NO_PARENT: u32 = u32::MAX;

/// Rows counted down from the top margin (inclusive) that count as reaching
/// the rim. With a single margin row only the first maze row qualifies, which
/// keeps the solution's last cell directly under the entry shaft.
pub const RIM_BAND: usize = 2;

/// Grid state after growth: flags plus the predecessor tree used to rebuild
/// the solution without storing a path per frontier item.
pub struct Growth {
    pub grid: MazeGrid,
    pub parent: Grid<u32>,
    pub depth: Grid<u32>,
    pub start: Pos,
    /// Last cell of the longest walk that reached the rim.
    pub best_end: Option<Pos>,
    pub steps: usize,
    pub carved: usize,
}

/// Grow a spanning tree from `p.start` by weighted random carving.
///
/// Each popped frontier cell picks one unvisited neighbour, weighted by the
/// direction bias, and carves into it. The cell and its new neighbour are then
/// re-queued, each to the front with probability `complexity / 10` (long
/// winding corridors) and otherwise to the back (bushy, many dead ends).
pub fn grow_maze(p: &ValidParams, rng: &mut Rng) -> Result<Growth, GenerationError> {
    let mut grid = MazeGrid::new(p.w, p.h, p.helix);
    let mut parent = Grid::<u32>::filled(p.w, p.h, NO_PARENT);
    let mut depth = Grid::<u32>::new(p.w, p.h);
    let top = grid.top_margin();

    let mut queue = VecDeque::new();
    queue.push_back(p.start);

    let mut best_end = None;
    let mut best_len = 0usize;
    let mut steps = 0usize;
    let mut carved = 0usize;

    while let Some(cur) = queue.pop_front() {
        steps += 1;
        if steps > p.max_steps {
            return Err(GenerationError::StepBudgetExceeded { limit: p.max_steps });
        }

        // Weighted pool over strictly unvisited neighbours
        let mut pool = [(Dir::Left, cur, 0usize); 4];
        let mut n = 0;
        let mut total = 0usize;
        for dir in Dir::ALL {
            let Some(next) = grid.neighbor(cur, dir) else {
                continue;
            };
            // A one-column cylinder wraps onto itself
            if next == cur || !grid.cell(next).is_unvisited() {
                continue;
            }
            let weight = p.bias.weight(dir);
            total += weight;
            pool[n] = (dir, next, weight);
            n += 1;
        }
        if total == 0 {
            continue; // dead end
        }

        let mut r = rng.below(total);
        let mut pick = pool[0];
        for &entry in &pool[..n] {
            if r < entry.2 {
                pick = entry;
                break;
            }
            r -= entry.2;
        }
        let (dir, dest, _) = pick;

        grid.set_connection(cur, dir);
        parent.set(dest.x, dest.y, parent.idx(cur.x, cur.y) as u32);
        let len = depth.get(cur.x, cur.y) + 1;
        depth.set(dest.x, dest.y, len);
        carved += 1;

        // `len` is the length of the walk that led to `cur`
        if top - dest.y < RIM_BAND && len as usize > best_len {
            best_len = len as usize;
            best_end = Some(dest);
        }

        for item in [cur, dest] {
            if rng.chance(p.complexity as usize, MAX_COMPLEXITY as usize) {
                queue.push_front(item);
            } else {
                queue.push_back(item);
            }
        }
    }

    debug!(steps, carved, best_len, "growth finished");

    Ok(Growth {
        grid,
        parent,
        depth,
        start: p.start,
        best_end,
        steps,
        carved,
    })
}
