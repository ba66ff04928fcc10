pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::game::AutopilotKind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "reverse_snake_config.yaml";

const MAX_GAMES: u32 = 10_000;
const MAX_TICKS_PER_GAME: u64 = 1_000_000;

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub games: u32,
    pub max_ticks_per_game: u64,
    pub autopilot: AutopilotKind,
    pub seed: Option<u64>,
    pub realtime: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("games must be greater than 0".to_string());
        }
        if self.games > MAX_GAMES {
            return Err(format!("games must not exceed {}", MAX_GAMES));
        }
        if self.max_ticks_per_game == 0 {
            return Err("max_ticks_per_game must be greater than 0".to_string());
        }
        if self.max_ticks_per_game > MAX_TICKS_PER_GAME {
            return Err(format!("max_ticks_per_game must not exceed {}", MAX_TICKS_PER_GAME));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            games: 3,
            max_ticks_per_game: 5_000,
            autopilot: AutopilotKind::Greedy,
            seed: None,
            realtime: false,
        }
    }
}

/// Command line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub games: Option<u32>,
    pub max_ticks_per_game: Option<u64>,
    pub autopilot: Option<AutopilotKind>,
    pub seed: Option<u64>,
    pub realtime: bool,
}

impl Config {
    pub fn with_overrides(&self, overrides: &Overrides) -> Result<Config, String> {
        let merged = Config {
            games: overrides.games.unwrap_or(self.games),
            max_ticks_per_game: overrides.max_ticks_per_game.unwrap_or(self.max_ticks_per_game),
            autopilot: overrides.autopilot.unwrap_or(self.autopilot),
            seed: overrides.seed.or(self.seed),
            realtime: self.realtime || overrides.realtime,
        };
        merged.validate()?;
        Ok(merged)
    }
}
