use std::fmt;

/// Main error type for the battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// A caller passed an argument that can never be valid here
    Argument(ArgumentError),
    /// An operation was invoked while the engine was not in a state to accept it
    State(StateError),
}

/// Precondition violations on the engine's public queueing/query surface.
///
/// These are caller errors: the decision-maker should re-derive legal
/// actions from the read-only query surface before retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The player index is not one of the two battling sides
    UnknownPlayer(usize),
    /// The active combatant does not know the requested move (and it is not the fallback)
    UnknownMove(String),
    /// The switch target index is outside the team's bounds
    SwitchIndexOutOfBounds { index: usize, team_size: usize },
    /// A team was constructed with an illegal size (must be 1-6)
    InvalidTeamSize(usize),
    /// The action failed validation against the current battle state
    InvalidTurn(String),
}

/// Errors related to the engine's round lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Round resolution requires exactly one queued action per player
    RoundNotReady { queued: usize },
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::Argument(err) => write!(f, "Invalid argument: {}", err),
            BattleError::State(err) => write!(f, "Invalid state: {}", err),
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::UnknownPlayer(index) => write!(f, "unknown player index: {}", index),
            ArgumentError::UnknownMove(name) => write!(f, "combatant does not know move: {}", name),
            ArgumentError::SwitchIndexOutOfBounds { index, team_size } => {
                write!(f, "switch index {} out of bounds for team of {}", index, team_size)
            }
            ArgumentError::InvalidTeamSize(size) => {
                write!(f, "team must have 1-6 members, got {}", size)
            }
            ArgumentError::InvalidTurn(details) => {
                write!(f, "turn is not valid for the current battle state: {}", details)
            }
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::RoundNotReady { queued } => {
                write!(f, "round needs two queued actions, found {}", queued)
            }
        }
    }
}

impl std::error::Error for BattleError {}
impl std::error::Error for ArgumentError {}
impl std::error::Error for StateError {}

impl From<ArgumentError> for BattleError {
    fn from(err: ArgumentError) -> Self {
        BattleError::Argument(err)
    }
}

impl From<StateError> for BattleError {
    fn from(err: StateError) -> Self {
        BattleError::State(err)
    }
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;
