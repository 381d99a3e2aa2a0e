use serde::{Deserialize, Serialize};

use crate::cell::Dir;
use crate::error::ConfigError;
use crate::grid::Pos;
use crate::rng::hash_text;

/// Largest complexity magnitude; values beyond it saturate.
pub const MAX_COMPLEXITY: u32 = 10;

/// Exit cell used when none is given: column 0 of the first maze row. The
/// helix only shears rows across the seam, so this cell is valid for any helix.
pub const DEFAULT_START: (i64, i64) = (0, 1);

/// Queue operations allowed per cell before a run is abandoned.
const STEPS_PER_CELL: usize = 64;

/// Largest grid, margins included. Cell indices are stored as `u32` in the
/// parent grid, and three grids of this size are allocated per run.
pub const MAX_CELLS: u64 = 1 << 24;

/// Deterministic seed: a number, or text folded into one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    pub fn to_u64(&self) -> u64 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(s) => s.parse().unwrap_or_else(|_| hash_text(s)),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Number(42)
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

/// Per-direction pool weights. Asymmetric on purpose: the defaults favour
/// descending and turning left, which gives the maze its swirl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bias {
    pub left: u32,
    pub right: u32,
    pub up: u32,
    pub down: u32,
}

impl Bias {
    #[inline]
    pub fn weight(&self, dir: Dir) -> usize {
        match dir {
            Dir::Left => self.left as usize,
            Dir::Right => self.right as usize,
            Dir::Up => self.up as usize,
            Dir::Down => self.down as usize,
        }
    }
}

impl Default for Bias {
    fn default() -> Self {
        Self {
            left: 2,
            right: 1,
            up: 1,
            down: 4,
        }
    }
}

/// Solution-length cut points for difficulty classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyThresholds {
    pub medium: usize,
    pub hard: usize,
    pub fiendish: usize,
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self {
            medium: 16,
            hard: 40,
            fiendish: 96,
        }
    }
}

/// All tunable parameters for one generation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // Cylinder
    pub width: i32,
    pub height: i32,
    pub helix: i32,

    // Growth
    pub seed: Seed,
    pub complexity: i32,
    pub bias: Bias,
    pub start: Option<(i64, i64)>,

    // Acceptance
    pub min_solution_len: usize,
    pub max_steps: Option<usize>,
    pub thresholds: DifficultyThresholds,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 24,
            height: 16,
            helix: 0,
            seed: Seed::default(),
            complexity: 5,
            bias: Bias::default(),
            start: None,
            min_solution_len: 2,
            max_steps: None,
            thresholds: DifficultyThresholds::default(),
        }
    }
}

/// Parameters after validation: unsigned dimensions, a resolved start cell and
/// a numeric seed.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidParams {
    pub w: usize,
    pub h: usize,
    pub helix: usize,
    pub seed: u64,
    pub complexity: u32,
    pub bias: Bias,
    pub start: Pos,
    pub min_solution_len: usize,
    pub max_steps: usize,
    pub thresholds: DifficultyThresholds,
}

impl Params {
    pub fn validate(&self) -> Result<ValidParams, ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if self.height < 3 {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        if self.helix < 0 {
            return Err(ConfigError::NegativeHelix(self.helix));
        }
        let b = self.bias;
        if b.left == 0 || b.right == 0 || b.up == 0 || b.down == 0 {
            return Err(ConfigError::InvalidBias(format!(
                "left={} right={} up={} down={}",
                b.left, b.right, b.up, b.down
            )));
        }

        let cells = self.width as u64 * self.height as u64;
        if cells > MAX_CELLS {
            return Err(ConfigError::TooLarge { cells, max: MAX_CELLS });
        }
        let w = self.width as usize;
        let h = self.height as usize;
        let budget = STEPS_PER_CELL
            .checked_mul(w * h)
            .ok_or(ConfigError::TooLarge { cells, max: MAX_CELLS })?;
        let (sx, sy) = self.start.unwrap_or(DEFAULT_START);
        // The first and last rows are margins, so the start must sit between them.
        if sx < 0 || sx >= w as i64 || sy < 1 || sy >= h as i64 - 1 {
            return Err(ConfigError::StartOutOfRange { x: sx, y: sy });
        }

        Ok(ValidParams {
            w,
            h,
            helix: self.helix as usize,
            seed: self.seed.to_u64(),
            complexity: self.complexity.unsigned_abs().min(MAX_COMPLEXITY),
            bias: b,
            start: Pos::new(sx as usize, sy as usize),
            min_solution_len: self.min_solution_len,
            max_steps: self.max_steps.unwrap_or(budget),
            thresholds: self.thresholds,
        })
    }
}
