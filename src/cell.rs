use serde::Serialize;

/// Per-cell flag byte. Zero means unvisited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell(pub u8);

impl Cell {
    pub const LEFT: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const UP: u8 = 4;
    pub const DOWN: u8 = 8;
    pub const INVALID: u8 = 16;

    pub const CONNECTIONS: u8 = Self::LEFT | Self::RIGHT | Self::UP | Self::DOWN;

    pub const fn invalid() -> Self {
        Cell(Self::INVALID)
    }

    #[inline]
    pub fn is_unvisited(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_invalid(self) -> bool {
        self.0 & Self::INVALID != 0
    }

    #[inline]
    pub fn has(self, dir: Dir) -> bool {
        self.0 & dir.flag() != 0
    }

    /// Number of connection flags set (0..=4).
    #[inline]
    pub fn degree(self) -> u32 {
        (self.0 & Self::CONNECTIONS).count_ones()
    }

    #[inline]
    pub fn connect(&mut self, dir: Dir) {
        self.0 |= dir.flag();
    }
}

/// Step direction on the cylinder. `Up` moves toward the top margin (larger y).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    /// Fixed iteration order used by growth; changing it changes every maze.
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

    #[inline]
    pub fn flag(self) -> u8 {
        match self {
            Dir::Left => Cell::LEFT,
            Dir::Right => Cell::RIGHT,
            Dir::Up => Cell::UP,
            Dir::Down => Cell::DOWN,
        }
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }

    #[inline]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
            Dir::Up => (0, 1),
            Dir::Down => (0, -1),
        }
    }
}
