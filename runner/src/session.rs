use std::time::Duration;

use common::game::{Autopilot, AutopilotKind, GameError, GameSnapshot, GameState, GridSize, TickResult};
use common::{SessionRng, debug_log, log};
use tokio::time::{Interval, interval};

/// 10 ticks per second, the classic arcade pace.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct SessionSettings {
    pub games: u32,
    pub max_ticks_per_game: u64,
    pub autopilot: AutopilotKind,
    pub realtime: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Collision,
    BoardFilled,
    TickLimit,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub score: u32,
    pub ticks: u64,
    pub foods_eaten: u32,
    pub snake_length: usize,
    pub end: GameEnd,
}

#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub games: Vec<GameRecord>,
    pub high_score: u32,
    pub final_snapshot: GameSnapshot,
}

impl SessionSummary {
    pub fn total_ticks(&self) -> u64 {
        self.games.iter().map(|g| g.ticks).sum()
    }

    pub fn total_foods(&self) -> u32 {
        self.games.iter().map(|g| g.foods_eaten).sum()
    }
}

pub struct SnakeSession;

impl SnakeSession {
    pub async fn run(settings: &SessionSettings, rng: &mut SessionRng) -> Result<SessionSummary, GameError> {
        let mut state = GameState::new(GridSize::STANDARD, rng)?;
        let mut pacer = settings.realtime.then(|| interval(TICK_INTERVAL));
        let mut games = Vec::with_capacity(settings.games as usize);

        log!(
            "Session started: {} game(s), autopilot {:?}, seed {}",
            settings.games,
            settings.autopilot,
            rng.seed()
        );

        for game_index in 0..settings.games {
            if game_index > 0 {
                state.restart(rng)?;
                log!("Game {} restarted, high score {:04}", game_index + 1, state.high_score());
            }

            let end = Self::play_game(&mut state, settings, rng, &mut pacer).await?;
            let record = GameRecord {
                score: state.score(),
                ticks: state.ticks(),
                foods_eaten: state.foods_eaten(),
                snake_length: state.snake().len(),
                end,
            };
            log!(
                "Game {} finished ({:?}): score {:04}, {} food, length {}, {} ticks",
                game_index + 1,
                record.end,
                record.score,
                record.foods_eaten,
                record.snake_length,
                record.ticks
            );
            games.push(record);
        }

        Ok(SessionSummary {
            games,
            high_score: state.high_score(),
            final_snapshot: state.snapshot(),
        })
    }

    async fn play_game(
        state: &mut GameState,
        settings: &SessionSettings,
        rng: &mut SessionRng,
        pacer: &mut Option<Interval>,
    ) -> Result<GameEnd, GameError> {
        loop {
            if let Some(timer) = pacer.as_mut() {
                timer.tick().await;
            }

            if state.ticks() >= settings.max_ticks_per_game {
                log!("Tick limit {} reached", settings.max_ticks_per_game);
                state.end_session();
                return Ok(GameEnd::TickLimit);
            }

            if let Some(direction) = Autopilot::choose(settings.autopilot, state, rng)
                && state.apply_input(direction)
            {
                debug_log!("tick {}: heading {:?}", state.ticks() + 1, direction);
            }

            match state.tick(rng) {
                Ok(result) if result.is_game_over() => {
                    log!(
                        "Game over at tick {}: {:?} (ate {} this tick)",
                        state.ticks(),
                        result,
                        result.points()
                    );
                    return Ok(GameEnd::Collision);
                }
                Ok(TickResult::Idle) => return Ok(GameEnd::Collision),
                Ok(result) if result.points() > 0 => {
                    log!(
                        "Ate {} at tick {}. Score: {:04}, mode: {}",
                        result.points(),
                        state.ticks(),
                        state.score(),
                        state.snake().movement_mode().label()
                    );
                }
                Ok(_) => {}
                Err(GameError::NoSpaceAvailable) => {
                    log!("Board filled at tick {}. Score: {:04}", state.ticks(), state.score());
                    return Ok(GameEnd::BoardFilled);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
