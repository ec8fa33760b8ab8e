//! Deterministic two-player turn battle engine.
//!
//! Two sides of up to six combatants queue one action per round (a move
//! or a switch); the engine validates, orders, and resolves both actions,
//! emitting an ordered event log that renders as classic battle
//! narration. All randomness flows through one seedable handle so entire
//! battles replay bit-for-bit from a seed.

// --- MODULE DECLARATIONS ---
pub mod ai;
pub mod battle;
pub mod errors;
pub mod move_data;
pub mod pokemon;
pub mod prefab_teams;
pub mod species;
pub mod stats;
pub mod types;

// --- PUBLIC API RE-EXPORTS ---
// The types most callers need, importable straight from the crate root.

// Battle core.
pub use battle::engine::BattleEngine;
pub use battle::events::{BattleEvent, EventBus};
pub use battle::rng::BattleRng;
pub use battle::side::Side;
pub use battle::turn::Turn;

// Combatants and data definitions.
pub use move_data::{
    EffectTarget, MoveCategory, MoveData, MoveEffect, MoveKind, MoveRegistry, STRUGGLE,
};
pub use pokemon::{MoveSlot, PokemonInst, StatusCondition};
pub use species::PokemonSpecies;
pub use stats::{Stat, StatStages, Stats};
pub use types::{Type, TypeChart};

// Decision-making seam.
pub use ai::strategies::{RandomStrategy, Strategy};
pub use ai::{BattleBot, BattleContext};

// Error taxonomy.
pub use errors::{ArgumentError, BattleError, BattleResult, StateError};
