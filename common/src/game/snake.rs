use std::collections::{HashSet, VecDeque};

use super::error::GameError;
use super::types::{CollisionKind, Direction, GridSize, MovementMode, Position};

const INITIAL_LENGTH: i32 = 3;

/// Body index 0 is the active end: the segment that moves every tick. It is
/// the head while moving forward and the former tail after an odd number of
/// meals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    grow_next: bool,
    reversed: bool,
}

impl Snake {
    pub fn new(grid: &GridSize) -> Self {
        let center = grid.center();
        let body = (0..INITIAL_LENGTH)
            .map(|offset| Position::new(center.x - offset, center.y))
            .collect();

        Self {
            body,
            direction: Direction::Right,
            grow_next: false,
            reversed: false,
        }
    }

    pub fn from_segments(segments: &[Position], direction: Direction) -> Result<Self, GameError> {
        if segments.is_empty() {
            return Err(GameError::InvalidSnakeBody("body must not be empty".to_string()));
        }

        let mut seen = HashSet::with_capacity(segments.len());
        for segment in segments {
            if !seen.insert(*segment) {
                return Err(GameError::InvalidSnakeBody(format!(
                    "segment ({}, {}) appears twice",
                    segment.x, segment.y
                )));
            }
        }

        if let Some(pair) = segments
            .windows(2)
            .find(|pair| Direction::from_delta(pair[1].x - pair[0].x, pair[1].y - pair[0].y).is_none())
        {
            return Err(GameError::InvalidSnakeBody(format!(
                "segments ({}, {}) and ({}, {}) are not adjacent",
                pair[0].x, pair[0].y, pair[1].x, pair[1].y
            )));
        }

        Ok(Self {
            body: segments.iter().copied().collect(),
            direction,
            grow_next: false,
            reversed: false,
        })
    }

    /// Returns false when the turn was rejected as a 180 degree reversal.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn advance(&mut self) {
        let next = self.active_end().step(self.direction);
        self.body.push_front(next);

        if self.grow_next {
            self.grow_next = false;
        } else {
            self.body.pop_back();
        }
    }

    pub fn collision(&self, grid: &GridSize) -> Option<CollisionKind> {
        let active = self.active_end();
        if !grid.contains(active) {
            return Some(CollisionKind::Wall);
        }
        if self.body.iter().skip(1).any(|segment| *segment == active) {
            return Some(CollisionKind::SelfCollision);
        }
        None
    }

    pub fn check_terminal_collision(&self, grid: &GridSize) -> bool {
        self.collision(grid).is_some()
    }

    /// Flips the snake so the other end starts moving, and schedules growth.
    pub fn eat(&mut self) {
        self.reversed = !self.reversed;
        self.body.make_contiguous().reverse();
        self.direction = self.direction.opposite();
        self.grow_next = true;
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn segments(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }

    pub fn active_end(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail_end(&self) -> Position {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn grows_next(&self) -> bool {
        self.grow_next
    }

    pub fn movement_mode(&self) -> MovementMode {
        if self.reversed {
            MovementMode::Reverse
        } else {
            MovementMode::Forward
        }
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    pub(crate) fn has_unique_segments(&self) -> bool {
        self.occupied_cells().len() == self.body.len()
    }
}
