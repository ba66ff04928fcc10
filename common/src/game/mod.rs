mod autopilot;
mod error;
mod food;
mod game_state;
mod snake;
mod types;

pub use autopilot::{Autopilot, AutopilotKind};
pub use error::GameError;
pub use food::{FOOD_VALUES, Food, RandomSource};
pub use game_state::{GameSnapshot, GameState};
pub use snake::Snake;
pub use types::{CollisionKind, Direction, GridSize, MovementMode, Phase, Position, TickResult};
