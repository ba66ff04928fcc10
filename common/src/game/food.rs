use std::collections::HashSet;
use std::ops::{Range, RangeInclusive};

use super::error::GameError;
use super::types::{GridSize, Position};

pub const FOOD_VALUES: RangeInclusive<u32> = 1..=9;

/// Uniform integer source used for food placement.
pub trait RandomSource {
    fn next_in_range(&mut self, range: Range<i32>) -> i32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub value: u32,
}

impl Food {
    pub fn new(position: Position, value: u32) -> Result<Self, GameError> {
        if !FOOD_VALUES.contains(&value) {
            return Err(GameError::InvalidFood(format!(
                "value {} is outside {}..={}",
                value,
                FOOD_VALUES.start(),
                FOOD_VALUES.end()
            )));
        }
        Ok(Self { position, value })
    }

    pub fn spawn<R: RandomSource>(
        grid: &GridSize,
        occupied: &HashSet<Position>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut food = Self {
            position: Position::new(0, 0),
            value: *FOOD_VALUES.start(),
        };
        food.respawn(grid, occupied, rng)?;
        Ok(food)
    }

    pub fn generate_position<R: RandomSource>(grid: &GridSize, rng: &mut R) -> Position {
        let x = rng.next_in_range(0..grid.width);
        let y = rng.next_in_range(0..grid.height);
        Position::new(x, y)
    }

    /// Rejection-samples a free cell. Fails without touching the food when the
    /// grid is completely covered.
    pub fn respawn<R: RandomSource>(
        &mut self,
        grid: &GridSize,
        occupied: &HashSet<Position>,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let occupied_in_grid = occupied.iter().filter(|pos| grid.contains(**pos)).count();
        if occupied_in_grid >= grid.cell_count() {
            return Err(GameError::NoSpaceAvailable);
        }

        let position = loop {
            let candidate = Self::generate_position(grid, rng);
            if !occupied.contains(&candidate) {
                break candidate;
            }
        };

        self.position = position;
        self.value =
            rng.next_in_range(*FOOD_VALUES.start() as i32..*FOOD_VALUES.end() as i32 + 1) as u32;
        Ok(())
    }
}
