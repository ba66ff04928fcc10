use serde::{Deserialize, Serialize};

use crate::session_rng::SessionRng;
use super::game_state::GameState;
use super::types::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutopilotKind {
    Greedy,
    Random,
}

impl std::str::FromStr for AutopilotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(AutopilotKind::Greedy),
            "random" => Ok(AutopilotKind::Random),
            other => Err(format!("Unknown autopilot '{}', expected greedy or random", other)),
        }
    }
}

/// Picks the next input for a headless session.
pub struct Autopilot;

impl Autopilot {
    pub fn choose(kind: AutopilotKind, state: &GameState, rng: &mut SessionRng) -> Option<Direction> {
        if !state.is_playing() {
            return None;
        }

        match kind {
            AutopilotKind::Greedy => Self::greedy_move(state, rng),
            AutopilotKind::Random => Some(Self::random_safe_move(state, rng)),
        }
    }

    fn greedy_move(state: &GameState, rng: &mut SessionRng) -> Option<Direction> {
        let snake = state.snake();
        let active = snake.active_end();
        let target = state.food().position;

        let best = Self::valid_directions(snake.direction())
            .into_iter()
            .filter(|&dir| Self::is_safe_position(active.step(dir), state))
            .min_by_key(|&dir| active.step(dir).manhattan_distance(target));

        best.or_else(|| Some(Self::random_safe_move(state, rng)))
    }

    fn random_safe_move(state: &GameState, rng: &mut SessionRng) -> Direction {
        let snake = state.snake();
        let active = snake.active_end();

        let safe_directions: Vec<Direction> = Self::valid_directions(snake.direction())
            .into_iter()
            .filter(|&dir| Self::is_safe_position(active.step(dir), state))
            .collect();

        if safe_directions.is_empty() {
            snake.direction()
        } else {
            safe_directions[rng.random_range(0..safe_directions.len())]
        }
    }

    fn valid_directions(current: Direction) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .collect()
    }

    // The tail cell is vacated on the same tick unless the snake is growing.
    fn is_safe_position(pos: Position, state: &GameState) -> bool {
        let snake = state.snake();
        if !state.grid().contains(pos) {
            return false;
        }
        if !snake.occupies(pos) {
            return true;
        }
        pos == snake.tail_end() && !snake.grows_next() && snake.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Food, GridSize, Snake};

    fn arranged(segments: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameState {
        let body: Vec<Position> = segments.iter().map(|&(x, y)| Position::new(x, y)).collect();
        let snake = Snake::from_segments(&body, direction).unwrap();
        let food = Food::new(Position::new(food.0, food.1), 3).unwrap();
        GameState::with_snake(GridSize::new(10, 10), snake, food).unwrap()
    }

    #[test]
    fn test_greedy_heads_for_food() {
        let state = arranged(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (5, 1));
        let mut rng = SessionRng::new(1);
        assert_eq!(
            Autopilot::choose(AutopilotKind::Greedy, &state, &mut rng),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_greedy_skips_cells_outside_grid() {
        // Right leaves the grid, so only Up and Down are considered.
        let state = arranged(&[(9, 5), (8, 5), (7, 5)], Direction::Right, (9, 9));
        let mut rng = SessionRng::new(1);
        assert_eq!(
            Autopilot::choose(AutopilotKind::Greedy, &state, &mut rng),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_never_picks_opposite_or_unsafe() {
        let state = arranged(&[(0, 0), (1, 0), (1, 1), (0, 1)], Direction::Left, (5, 5));
        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            for kind in [AutopilotKind::Greedy, AutopilotKind::Random] {
                let choice = Autopilot::choose(kind, &state, &mut rng).unwrap();
                assert_ne!(choice, Direction::Right);
                // Left and Up hit the wall; Down reaches (0,1), the tail cell that is vacated.
                assert_eq!(choice, Direction::Down);
            }
        }
    }

    #[test]
    fn test_keeps_direction_when_boxed_in() {
        let state = arranged(&[(0, 0), (1, 0), (1, 1), (0, 1), (0, 2)], Direction::Left, (5, 5));
        let mut rng = SessionRng::new(3);
        assert_eq!(
            Autopilot::choose(AutopilotKind::Random, &state, &mut rng),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_no_choice_after_game_over() {
        let mut state = arranged(&[(0, 5), (1, 5)], Direction::Left, (5, 5));
        let mut rng = SessionRng::new(2);
        state.tick(&mut rng).unwrap();
        assert!(!state.is_playing());
        assert_eq!(Autopilot::choose(AutopilotKind::Greedy, &state, &mut rng), None);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Greedy".parse::<AutopilotKind>(), Ok(AutopilotKind::Greedy));
        assert_eq!("random".parse::<AutopilotKind>(), Ok(AutopilotKind::Random));
        assert!("smart".parse::<AutopilotKind>().is_err());
    }
}
