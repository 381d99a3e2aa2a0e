use std::ops::Range;

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::config::{Params, Seed};
use crate::error::ConfigError;

/// Aggregate over many seeds with otherwise identical parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SurveyReport {
    pub runs: usize,
    pub successes: usize,
    pub failures: usize,
    pub mean_solution_len: f64,
    pub mean_dead_ends: f64,
    pub longest_solution: usize,
}

/// Generate one maze per seed in `seeds`. Runs are independent (each owns its
/// own RNG), so they fan out across threads; results are folded in seed order.
pub fn survey(params: &Params, seeds: Range<u64>) -> Result<SurveyReport, ConfigError> {
    params.validate()?;

    let results: Vec<Option<(usize, usize)>> = seeds
        .into_par_iter()
        .map(|seed| {
            let p = Params {
                seed: Seed::Number(seed),
                ..params.clone()
            };
            crate::generate(&p)
                .ok()
                .map(|(maze, _)| (maze.solution_path().len(), maze.dead_ends()))
        })
        .collect();

    let runs = results.len();
    let ok: Vec<(usize, usize)> = results.into_iter().flatten().collect();
    let successes = ok.len();
    let mean = |total: usize| {
        if successes == 0 {
            0.0
        } else {
            total as f64 / successes as f64
        }
    };

    let report = SurveyReport {
        runs,
        successes,
        failures: runs - successes,
        mean_solution_len: mean(ok.iter().map(|r| r.0).sum()),
        mean_dead_ends: mean(ok.iter().map(|r| r.1).sum()),
        longest_solution: ok.iter().map(|r| r.0).max().unwrap_or(0),
    };

    info!(
        runs,
        successes,
        mean_solution_len = report.mean_solution_len,
        mean_dead_ends = report.mean_dead_ends,
        "survey finished"
    );

    Ok(report)
}
