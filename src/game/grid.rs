use rand::Rng;

use super::command::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The fixed square coordinate space snakes and food occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    count: usize,
}

impl Grid {
    /// Create a grid with `count` cells along each axis
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Number of cells along each axis
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total number of cells in the grid
    pub fn area(&self) -> usize {
        self.count * self.count
    }

    /// The center cell, where the player starts
    pub fn center(&self) -> Position {
        let mid = (self.count / 2) as i32;
        Position::new(mid, mid)
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        let n = self.count as i32;
        pos.x >= 0 && pos.x < n && pos.y >= 0 && pos.y < n
    }

    /// Sample a uniformly random position on the grid
    pub fn random_position<R: Rng>(&self, rng: &mut R) -> Position {
        let x = rng.gen_range(0..self.count) as i32;
        let y = rng.gen_range(0..self.count) as i32;
        Position::new(x, y)
    }
}
