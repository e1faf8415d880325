use super::command::Direction;
use super::grid::{Grid, Position};

/// Why an advance was rejected; both end the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The new head would leave the grid
    WallCollision,
    /// The new head would land on the snake's own body
    SelfCollision,
}

/// The player-controlled snake
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnake {
    /// Body segments, with head at index 0; never empty
    body: Vec<Position>,
    /// Direction applied on the most recent advance
    direction: Direction,
    /// Legal turn stored for the next advance (last write wins)
    pending_turn: Option<Direction>,
    /// Set when food is consumed; the next advance keeps the tail
    grow_pending: bool,
}

impl PlayerSnake {
    /// Create a player snake at `start`, facing right
    pub fn new(start: Position) -> Self {
        Self {
            body: vec![start],
            direction: Direction::Right,
            pending_turn: None,
            grow_pending: false,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Request a turn, applied on the next advance.
    ///
    /// A 180-degree reversal of the applied direction is ignored. Repeated
    /// calls between advances overwrite each other: only the most recent
    /// legal turn takes effect.
    pub fn turn(&mut self, new_direction: Direction) {
        if !self.direction.is_opposite(new_direction) {
            self.pending_turn = Some(new_direction);
        }
    }

    /// Set the pending-growth flag; idempotent
    pub fn mark_growth(&mut self) {
        self.grow_pending = true;
    }

    pub fn growth_pending(&self) -> bool {
        self.grow_pending
    }

    /// Step the snake one cell in its direction.
    ///
    /// The tail cell is vacated this tick unless growth is pending, so it
    /// only counts as a self-collision target when the body is about to
    /// grow. On success returns the new head position.
    pub fn advance(&mut self, grid: &Grid) -> Result<Position, MoveError> {
        if let Some(turn) = self.pending_turn.take() {
            self.direction = turn;
        }

        let new_head = self.head().moved_in_direction(self.direction);

        if !grid.contains(new_head) {
            return Err(MoveError::WallCollision);
        }

        let blocked = if self.grow_pending {
            &self.body[..]
        } else {
            &self.body[..self.body.len() - 1]
        };
        if blocked.contains(&new_head) {
            return Err(MoveError::SelfCollision);
        }

        self.body.insert(0, new_head);
        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop();
        }

        Ok(new_head)
    }
}

/// The AI-controlled snake that greedily chases the player's head
#[derive(Debug, Clone, PartialEq)]
pub struct PursuerSnake {
    /// Single segment; the pursuer never grows
    body: Vec<Position>,
    direction: Direction,
    /// Cells per tick; 0.5 means one step every other tick
    speed: f32,
    /// Fractional progress toward the next step
    accumulator: f32,
}

impl PursuerSnake {
    /// Create a pursuer at `start`, stepping `speed` cells per tick
    pub fn new(start: Position, speed: f32) -> Self {
        Self {
            body: vec![start],
            direction: Direction::Right,
            speed,
            accumulator: 0.0,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Check if a position lies on the pursuer's body
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advance toward the target head at the configured sub-tick speed.
    ///
    /// Ticks where the accumulator stays below one whole cell are no-op
    /// successes. A moving tick picks the axis with the larger absolute
    /// distance to the target (ties go horizontal) and steps toward it.
    /// The pursuer ignores its own body and never grows; only walls stop it.
    pub fn advance(&mut self, grid: &Grid, target: Position) -> Result<(), MoveError> {
        self.accumulator += self.speed;
        if self.accumulator < 1.0 {
            return Ok(());
        }
        self.accumulator -= 1.0;

        let head = self.head();
        let dx = target.x - head.x;
        let dy = target.y - head.y;

        if dx != 0 || dy != 0 {
            self.direction = if dx.abs() >= dy.abs() {
                if dx > 0 {
                    Direction::Right
                } else {
                    Direction::Left
                }
            } else if dy > 0 {
                Direction::Down
            } else {
                Direction::Up
            };
        }

        let new_head = head.moved_in_direction(self.direction);
        if !grid.contains(new_head) {
            return Err(MoveError::WallCollision);
        }

        self.body.insert(0, new_head);
        self.body.pop();

        Ok(())
    }
}
