use crate::ai::BattleContext;
use crate::battle::turn::Turn;
use crate::move_data::STRUGGLE;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// A decision policy for one seat. Strategies see only the read view and
/// return a candidate turn; the engine still validates whatever comes
/// back.
pub trait Strategy {
    fn decide_turn(&mut self, context: &BattleContext) -> Turn;

    /// Replacement pick after the active combatant faints. The default
    /// sends out the first healthy teammate.
    fn decide_forced_switch(&mut self, context: &BattleContext) -> Turn {
        let target = context.valid_switch_targets().into_iter().next().unwrap_or(0);
        Turn::Switch {
            player: context.player(),
            target,
        }
    }
}

/// Picks uniformly among the currently usable moves. Never switches
/// voluntarily. Carries its own RNG so bot behavior can be seeded
/// independently of the engine's rolls.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(rand::rng().random()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        RandomStrategy::new()
    }
}

impl Strategy for RandomStrategy {
    fn decide_turn(&mut self, context: &BattleContext) -> Turn {
        let options = context.valid_moves();
        let move_name = options
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| STRUGGLE.to_string());
        Turn::Move {
            player: context.player(),
            move_name,
        }
    }
}
