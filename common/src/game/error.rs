#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NoSpaceAvailable,
    GridTooSmall { width: i32, height: i32 },
    InvalidSnakeBody(String),
    InvalidFood(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::NoSpaceAvailable => write!(f, "No free cell left to place food"),
            GameError::GridTooSmall { width, height } => {
                write!(f, "Grid {}x{} is too small for a new snake", width, height)
            }
            GameError::InvalidSnakeBody(reason) => write!(f, "Invalid snake body: {}", reason),
            GameError::InvalidFood(reason) => write!(f, "Invalid food: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}
