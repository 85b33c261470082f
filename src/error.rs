/// The crate's error taxonomy, split into user errors (caller supplied
/// something invalid; state is untouched) and internal errors (an invariant
/// broke; the hand is aborted and no silent repair is attempted).
///
/// A plain enum with a hand-rolled `Display`/`std::error::Error`, mirroring
/// how this codebase keeps a concrete enum at its library seam and reserves
/// `anyhow` for process-boundary context (CLI bins, HTTP handlers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    GameNotFound,
    NotYourTurn { expected: Option<usize>, got: usize },
    InvalidAction { reason: String },
    BadAmount { reason: String },
    InsufficientFunds { have: crate::Chips, need: crate::Chips },
    GameOver,
    InternalConsistency { detail: String },
}

impl GameError {
    /// `true` for bugs, not bad input — callers should treat these as 5xx.
    pub fn is_internal(&self) -> bool {
        matches!(self, GameError::InternalConsistency { .. })
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GameError::GameNotFound => write!(f, "game not found"),
            GameError::NotYourTurn { expected, got } => match expected {
                Some(e) => write!(f, "seat {got} acted out of turn (expected seat {e})"),
                None => write!(f, "seat {got} acted but no seat may act right now"),
            },
            GameError::InvalidAction { reason } => write!(f, "invalid action: {reason}"),
            GameError::BadAmount { reason } => write!(f, "bad amount: {reason}"),
            GameError::InsufficientFunds { have, need } => {
                write!(f, "insufficient funds: have {have}, need {need}")
            }
            GameError::GameOver => write!(f, "game is over"),
            GameError::InternalConsistency { detail } => {
                write!(f, "internal consistency violation: {detail}")
            }
        }
    }
}

impl std::error::Error for GameError {}

pub type GameResult<T> = std::result::Result<T, GameError>;
