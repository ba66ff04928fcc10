use serde::Serialize;

use crate::debug_log;
use super::error::GameError;
use super::food::{FOOD_VALUES, Food, RandomSource};
use super::snake::Snake;
use super::types::{Direction, GridSize, MovementMode, Phase, Position, TickResult};

const MIN_GRID_WIDTH: i32 = 4;
const MIN_GRID_HEIGHT: i32 = 1;

/// Everything a renderer needs for one frame. Food is absent once the snake
/// covers the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub body: Vec<Position>,
    pub reversed: bool,
    pub mode: MovementMode,
    pub direction: Direction,
    pub food_position: Option<Position>,
    pub food_value: Option<u32>,
    pub score: u32,
    pub high_score: u32,
    pub phase: Phase,
    pub ticks: u64,
}

#[derive(Clone, Debug)]
pub struct GameState {
    grid: GridSize,
    snake: Snake,
    food: Food,
    score: u32,
    high_score: u32,
    phase: Phase,
    ticks: u64,
    foods_eaten: u32,
    board_filled: bool,
}

impl GameState {
    pub fn new<R: RandomSource>(grid: GridSize, rng: &mut R) -> Result<Self, GameError> {
        if grid.width < MIN_GRID_WIDTH || grid.height < MIN_GRID_HEIGHT {
            return Err(GameError::GridTooSmall {
                width: grid.width,
                height: grid.height,
            });
        }

        let snake = Snake::new(&grid);
        let food = Food::spawn(&grid, &snake.occupied_cells(), rng)?;

        Ok(Self {
            grid,
            snake,
            food,
            score: 0,
            high_score: 0,
            phase: Phase::Playing,
            ticks: 0,
            foods_eaten: 0,
            board_filled: false,
        })
    }

    /// Starts a session from an arranged board instead of the centered default.
    pub fn with_snake(grid: GridSize, snake: Snake, food: Food) -> Result<Self, GameError> {
        if grid.width <= 0 || grid.height <= 0 {
            return Err(GameError::GridTooSmall {
                width: grid.width,
                height: grid.height,
            });
        }
        if let Some(outside) = snake.body().find(|segment| !grid.contains(**segment)) {
            return Err(GameError::InvalidSnakeBody(format!(
                "segment ({}, {}) is outside the grid",
                outside.x, outside.y
            )));
        }
        if !grid.contains(food.position) || snake.occupies(food.position) {
            return Err(GameError::InvalidFood(format!(
                "cell ({}, {}) is not a free grid cell",
                food.position.x, food.position.y
            )));
        }
        if !FOOD_VALUES.contains(&food.value) {
            return Err(GameError::InvalidFood(format!("value {} is out of range", food.value)));
        }

        Ok(Self {
            grid,
            snake,
            food,
            score: 0,
            high_score: 0,
            phase: Phase::Playing,
            ticks: 0,
            foods_eaten: 0,
            board_filled: false,
        })
    }

    pub fn apply_input(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.snake.set_direction(direction)
    }

    /// Advances one step: move, eat, then check for a terminal collision.
    ///
    /// A `NoSpaceAvailable` error means the snake covers the whole board; the
    /// session is over at that point and the phase has already been switched.
    pub fn tick<R: RandomSource>(&mut self, rng: &mut R) -> Result<TickResult, GameError> {
        if self.phase != Phase::Playing {
            return Ok(TickResult::Idle);
        }

        let length_before = self.snake.len();
        let grew = self.snake.grows_next();

        self.snake.advance();
        self.ticks += 1;

        debug_assert_eq!(
            self.snake.len(),
            if grew { length_before + 1 } else { length_before }
        );
        debug_assert!(!self.snake.grows_next());

        let mut eaten = None;
        if self.snake.active_end() == self.food.position {
            let points = self.food.value;
            self.snake.eat();
            self.score += points;
            self.foods_eaten += 1;
            eaten = Some(points);

            if let Err(e) = self
                .food
                .respawn(&self.grid, &self.snake.occupied_cells(), rng)
            {
                self.board_filled = true;
                self.end_session();
                return Err(e);
            }
        }

        if let Some(reason) = self.snake.collision(&self.grid) {
            self.end_session();
            debug_log!(
                "tick {}: {:?} at ({}, {})",
                self.ticks,
                reason,
                self.snake.active_end().x,
                self.snake.active_end().y
            );
            return Ok(TickResult::GameOver { reason, eaten });
        }

        debug_assert!(self.snake.has_unique_segments());

        Ok(match eaten {
            Some(points) => TickResult::Eaten { points },
            None => TickResult::Continue,
        })
    }

    pub fn restart<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let snake = Snake::new(&self.grid);
        let food = Food::spawn(&self.grid, &snake.occupied_cells(), rng)?;

        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.ticks = 0;
        self.foods_eaten = 0;
        self.board_filled = false;
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Ends the current game as if it had hit something: the phase switches to
    /// GameOver and the score counts towards the high score. A driver that
    /// abandons a live game calls this before `restart`.
    pub fn end_session(&mut self) {
        self.phase = Phase::GameOver;
        self.high_score = self.high_score.max(self.score);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            body: self.snake.segments(),
            reversed: self.snake.is_reversed(),
            mode: self.snake.movement_mode(),
            direction: self.snake.direction(),
            food_position: (!self.board_filled).then_some(self.food.position),
            food_value: (!self.board_filled).then_some(self.food.value),
            score: self.score,
            high_score: self.high_score,
            phase: self.phase,
            ticks: self.ticks,
        }
    }

    pub fn grid(&self) -> &GridSize {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// After a filled board this is the last food eaten, under the snake.
    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn is_board_filled(&self) -> bool {
        self.board_filled
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// High score as a HUD shows it: a run that is beating the record counts
    /// before it ends.
    pub fn display_high_score(&self) -> u32 {
        self.high_score.max(self.score)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn foods_eaten(&self) -> u32 {
        self.foods_eaten
    }
}
