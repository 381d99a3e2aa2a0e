pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod maze;
pub mod render;
pub mod rng;
pub mod segments;
pub mod survey;

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use config::Params;
use error::MazeError;
use maze::Maze;
use rng::Rng;

#[derive(Clone, Debug, Serialize)]
pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Generate one maze. Identical params always give an identical maze.
pub fn generate(params: &Params) -> Result<(Maze, Vec<Timing>), MazeError> {
    generate_inner(params).inspect_err(|e| warn!(error = %e, "maze generation failed"))
}

fn generate_inner(params: &Params) -> Result<(Maze, Vec<Timing>), MazeError> {
    // Validation happens before anything is allocated
    let valid = params.validate()?;

    let mut timings = Vec::new();
    let total_start = Instant::now();
    let mut rng = Rng::new(valid.seed);

    // 1. Grow the tree
    let t = Instant::now();
    let mut growth = maze::grow::grow_maze(&valid, &mut rng)?;
    timings.push(Timing {
        name: "grow",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Extract the solution and open the entry shaft
    let t = Instant::now();
    let solution = maze::solution::finalize(&mut growth, valid.min_solution_len)?;
    timings.push(Timing {
        name: "solution",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 3. Metrics on the finished grid
    let t = Instant::now();
    let metrics = maze::metrics::measure(&growth.grid, solution.path.len(), &valid.thresholds);
    timings.push(Timing {
        name: "metrics",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    timings.push(Timing {
        name: "TOTAL",
        ms: total_ms,
    });

    info!(
        width = valid.w,
        height = valid.h,
        helix = valid.helix,
        seed = valid.seed,
        steps = growth.steps,
        solution_len = metrics.solution_len,
        dead_ends = metrics.dead_ends,
        difficulty = metrics.difficulty.name(),
        total_ms,
        "maze generated"
    );

    Ok((Maze::new(growth.grid, solution, metrics), timings))
}
