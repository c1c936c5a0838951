//! Grid geometry: bounded board, obstacles, distance metrics

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Grid cell coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by stepping one square in a direction
    pub fn step(&self, dir: Direction) -> Pos {
        let (dx, dy) = dir.vector();
        Pos::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance: max of the axis deltas
    pub fn chebyshev(&self, other: Pos) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Straight-line distance
    pub fn euclidean(&self, other: Pos) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Cardinal movement directions. y grows southward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit vector (dx, dy)
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Enumeration order for move generation; also the tie-break order.
pub const CARDINALS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Bounded board with impassable cells. Immutable per search invocation.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    obstacles: FxHashSet<Pos>,
}

impl Board {
    pub fn new(width: i32, height: i32, obstacles: impl IntoIterator<Item = Pos>) -> Self {
        Self {
            width,
            height,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Board with no obstacles
    pub fn open(width: i32, height: i32) -> Self {
        Self::new(width, height, [])
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True iff the cell is on the board and passable.
    /// Extents are inclusive: valid cells span 0..=width and 0..=height.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.x <= self.width
            && pos.y >= 0
            && pos.y <= self.height
            && !self.obstacles.contains(&pos)
    }

    pub fn is_obstacle(&self, pos: Pos) -> bool {
        self.obstacles.contains(&pos)
    }
}
