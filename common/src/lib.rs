pub mod config;
pub mod game;
pub mod logger;
pub mod session_rng;

pub use session_rng::SessionRng;
