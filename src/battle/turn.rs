use serde::{Deserialize, Serialize};

/// A pending action for one player: either use a move or switch to a
/// teammate. At most one per player is held at a time; queueing a second
/// action for the same player replaces the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Move { player: usize, move_name: String },
    Switch { player: usize, target: usize },
}

impl Turn {
    pub fn player(&self) -> usize {
        match self {
            Turn::Move { player, .. } => *player,
            Turn::Switch { player, .. } => *player,
        }
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, Turn::Switch { .. })
    }
}
