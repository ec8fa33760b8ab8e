use crate::pokemon::StatusCondition;
use crate::stats::Stat;
use serde::{Deserialize, Serialize};

/// Everything observable that happens while a round plays out.
///
/// Events are the engine's only output channel: state changes are recorded
/// here as they happen, in order. Each event may render to a narration
/// line via [`BattleEvent::format`]; events that return `None` are real
/// state changes that the classic narration keeps quiet about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// An attacker committed to a move (announced even when it then misses).
    MoveUsed { attacker: String, move_name: String },
    MoveMissed,
    /// The type matchup for a damaging hit, announced when notable.
    TypeEffectiveness { multiplier: f64 },
    DamageDealt {
        target: String,
        amount: u16,
        source: String,
    },
    /// A damaging hit resolved to zero damage (immunity).
    NoEffect { target: String },
    PokemonWithdrawn { player: usize, name: String },
    PokemonSentOut { player: usize, name: String },
    PokemonFainted { name: String },
    /// Silent: a status condition landed.
    StatusInflicted {
        target: String,
        status: StatusCondition,
    },
    /// Silent: a stat stage moved.
    StatStageChanged {
        target: String,
        stat: Stat,
        delta: i8,
    },
    /// Diagnostic: a queued move name has no registry entry.
    MoveNotFound { name: String },
}

impl BattleEvent {
    /// Render this event as a narration line, or `None` for events the
    /// narration stays silent on.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::MoveUsed {
                attacker,
                move_name,
            } => Some(format!("{} used {}!", attacker, move_name)),
            BattleEvent::MoveMissed => Some("But it missed!".to_string()),
            BattleEvent::TypeEffectiveness { multiplier } => {
                if *multiplier > 1.0 {
                    Some("It was super effective!".to_string())
                } else if *multiplier > 0.0 && *multiplier < 1.0 {
                    Some("It was not very effective...".to_string())
                } else {
                    None
                }
            }
            BattleEvent::DamageDealt {
                target,
                amount,
                source,
            } => Some(format!("{} took {} damage from {}!", target, amount, source)),
            BattleEvent::NoEffect { target } => {
                Some(format!("It has no effect on {}!", target))
            }
            BattleEvent::PokemonWithdrawn { player, name } => {
                Some(format!("Player {} withdrew {}.", player + 1, name))
            }
            BattleEvent::PokemonSentOut { player, name } => {
                Some(format!("Player {} sent out {}!", player + 1, name))
            }
            BattleEvent::PokemonFainted { name } => Some(format!("{} fainted!", name)),
            BattleEvent::StatusInflicted { .. } => None,
            BattleEvent::StatStageChanged { .. } => None,
            BattleEvent::MoveNotFound { name } => {
                Some(format!("Error: Move {} not found in registry!", name))
            }
        }
    }
}

/// Ordered record of one round. Every event is kept, formattable or not,
/// so tests and tools can inspect exactly what happened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Narration lines for the round, in event order, silent events
    /// dropped.
    pub fn format_log(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }
}
