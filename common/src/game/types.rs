use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector in screen coordinates (y grows downwards).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Only the four unit vectors map to a direction; anything else is rejected.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        let (x, y) = self.delta();
        let (ox, oy) = other.delta();
        x == -ox && y == -oy
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    /// The 40x30 board the game is played on.
    pub const STANDARD: GridSize = GridSize {
        width: 40,
        height: 30,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Wall,
    SelfCollision,
}

/// Which end of the snake is currently leading. Rendering hint only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementMode {
    Forward,
    Reverse,
}

impl MovementMode {
    pub fn label(self) -> &'static str {
        match self {
            MovementMode::Forward => "FORWARD MODE",
            MovementMode::Reverse => "REVERSE MODE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    Eaten {
        points: u32,
    },
    /// `eaten` carries the points when food was eaten on the same tick.
    GameOver {
        reason: CollisionKind,
        eaten: Option<u32>,
    },
    /// The session is already over; nothing moved.
    Idle,
}

impl TickResult {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TickResult::GameOver { .. })
    }

    pub fn points(&self) -> u32 {
        match self {
            TickResult::Eaten { points } => *points,
            TickResult::GameOver {
                eaten: Some(points),
                ..
            } => *points,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_delta_accepts_only_unit_vectors() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(direction));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(2, 0), None);
        assert_eq!(Direction::from_delta(0, -2), None);
    }

    #[test]
    fn test_opposite_is_negated_vector() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(direction.opposite().delta(), (-dx, -dy));
            assert!(direction.is_opposite(&direction.opposite()));
            assert!(!direction.is_opposite(&direction));
        }
    }

    #[test]
    fn test_grid_contains_bounds() {
        let grid = GridSize::new(4, 3);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(3, 2)));
        assert!(!grid.contains(Position::new(4, 0)));
        assert!(!grid.contains(Position::new(0, 3)));
        assert!(!grid.contains(Position::new(-1, 1)));
        assert!(!grid.contains(Position::new(1, -1)));
        assert_eq!(grid.cell_count(), 12);
    }

    #[test]
    fn test_standard_grid_center() {
        assert_eq!(GridSize::STANDARD.center(), Position::new(20, 15));
    }

    #[test]
    fn test_tick_result_points() {
        assert_eq!(TickResult::Continue.points(), 0);
        assert_eq!(TickResult::Eaten { points: 7 }.points(), 7);
        let over = TickResult::GameOver {
            reason: CollisionKind::Wall,
            eaten: Some(3),
        };
        assert_eq!(over.points(), 3);
        assert!(over.is_game_over());
    }
}
