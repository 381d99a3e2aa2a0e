use serde::Serialize;

use crate::config::DifficultyThresholds;
use crate::grid::MazeGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Fiendish,
}

impl Difficulty {
    pub fn classify(solution_len: usize, t: &DifficultyThresholds) -> Self {
        if solution_len >= t.fiendish {
            Difficulty::Fiendish
        } else if solution_len >= t.hard {
            Difficulty::Hard
        } else if solution_len >= t.medium {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Fiendish => "fiendish",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Generatable (non-margin) cells.
    pub cells: usize,
    /// Generatable cells the growth reached.
    pub visited: usize,
    pub dead_ends: usize,
    pub solution_len: usize,
    pub difficulty: Difficulty,
}

/// Non-margin cells with exactly one connection.
pub fn count_dead_ends(grid: &MazeGrid) -> usize {
    grid.cells()
        .data
        .iter()
        .filter(|c| !c.is_invalid() && c.degree() == 1)
        .count()
}

pub fn measure(grid: &MazeGrid, solution_len: usize, t: &DifficultyThresholds) -> Metrics {
    let data = &grid.cells().data;
    let cells = data.iter().filter(|c| !c.is_invalid()).count();
    let visited = data
        .iter()
        .filter(|c| !c.is_invalid() && c.degree() > 0)
        .count();

    Metrics {
        cells,
        visited,
        dead_ends: count_dead_ends(grid),
        solution_len,
        difficulty: Difficulty::classify(solution_len, t),
    }
}
