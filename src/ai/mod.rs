pub mod strategies;

use crate::battle::engine::BattleEngine;
use crate::battle::turn::Turn;
use crate::errors::BattleResult;
use crate::move_data::STRUGGLE;
use crate::pokemon::PokemonInst;
use strategies::Strategy;

/// Read-only view of the battle from one player's seat.
///
/// Everything a decision-maker is allowed to see: both active combatants,
/// both full teams, the turn number, and which actions are currently
/// legal. Strategies take this instead of the engine so they cannot
/// mutate state or peek at the RNG.
pub struct BattleContext<'a> {
    engine: &'a BattleEngine,
    player: usize,
}

impl<'a> BattleContext<'a> {
    /// View the battle from one seat. Panics on a player index outside
    /// the two battling sides; seats are fixed at battle start.
    pub fn new(engine: &'a BattleEngine, player: usize) -> Self {
        assert!(player < 2, "player index out of range: {}", player);
        BattleContext { engine, player }
    }

    pub fn player(&self) -> usize {
        self.player
    }

    pub fn turn_number(&self) -> u32 {
        self.engine.turn_number()
    }

    pub fn my_active(&self) -> &PokemonInst {
        self.engine.sides()[self.player].active()
    }

    pub fn opponent_active(&self) -> &PokemonInst {
        self.engine.sides()[1 - self.player].active()
    }

    pub fn my_team(&self) -> &[PokemonInst] {
        self.engine.sides()[self.player].team()
    }

    pub fn opponent_team(&self) -> &[PokemonInst] {
        self.engine.sides()[1 - self.player].team()
    }

    pub fn needs_switch(&self) -> bool {
        self.engine.sides()[self.player].needs_switch()
    }

    /// Move names currently legal to queue. Slots with PP remaining are
    /// listed; with nothing left to spend, the fallback stands alone.
    pub fn valid_moves(&self) -> Vec<String> {
        let usable: Vec<String> = self
            .my_active()
            .move_slots()
            .iter()
            .filter(|slot| slot.pp > 0)
            .map(|slot| slot.name.clone())
            .collect();
        if usable.is_empty() {
            vec![STRUGGLE.to_string()]
        } else {
            usable
        }
    }

    /// Team indices currently legal as switch targets: in range, not the
    /// active slot, not fainted.
    pub fn valid_switch_targets(&self) -> Vec<usize> {
        let side = &self.engine.sides()[self.player];
        (0..side.team_size())
            .filter(|&i| {
                i != side.active_index()
                    && side.pokemon(i).map(|p| !p.is_fainted()).unwrap_or(false)
            })
            .collect()
    }

    pub fn is_valid_turn(&self, turn: &Turn) -> bool {
        self.engine.is_valid_turn(turn)
    }
}

/// One player's automated seat: a strategy plus the player index it plays.
/// Each round it builds a context, asks the strategy for an action, and
/// queues it on the engine.
pub struct BattleBot {
    strategy: Box<dyn Strategy>,
    player: usize,
}

impl BattleBot {
    pub fn new(strategy: Box<dyn Strategy>, player: usize) -> Self {
        BattleBot { strategy, player }
    }

    pub fn player(&self) -> usize {
        self.player
    }

    /// Decide and queue this round's action. When the seat owes a
    /// replacement for a fainted active combatant, the strategy's forced
    /// switch path is used instead of its normal decision.
    pub fn queue_turn(&mut self, engine: &mut BattleEngine) -> BattleResult<()> {
        let turn = {
            let context = BattleContext::new(engine, self.player);
            if context.needs_switch() {
                self.strategy.decide_forced_switch(&context)
            } else {
                self.strategy.decide_turn(&context)
            }
        };
        match turn {
            Turn::Move { move_name, .. } => engine.queue_move(self.player, &move_name),
            Turn::Switch { target, .. } => engine.queue_switch(self.player, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::strategies::RandomStrategy;
    use super::*;
    use crate::battle::rng::BattleRng;
    use crate::move_data::MoveRegistry;
    use crate::species::PokemonSpecies;
    use crate::stats::Stats;
    use crate::types::{Type, TypeChart};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn plain_species(speed: u16) -> PokemonSpecies {
        PokemonSpecies::new(
            "Drone",
            vec![Type::Normal],
            Stats::new(50, 50, 50, 50, 50, speed),
        )
    }

    fn make_pokemon(speed: u16, move_names: &[&str], moves: &MoveRegistry) -> PokemonInst {
        let mut pokemon = plain_species(speed).instantiate(50);
        for name in move_names {
            pokemon.learn_move(moves.get(name).expect("test move must exist"));
        }
        pokemon
    }

    fn engine(
        team1: Vec<PokemonInst>,
        team2: Vec<PokemonInst>,
        outcomes: Vec<u8>,
    ) -> BattleEngine {
        BattleEngine::new(
            &team1,
            &team2,
            Arc::new(MoveRegistry::standard()),
            Arc::new(TypeChart::standard()),
            BattleRng::scripted(outcomes),
        )
        .expect("valid test teams")
    }

    #[test]
    fn valid_moves_falls_back_to_struggle_when_pp_is_gone() {
        let moves = MoveRegistry::standard();
        let mut drained = make_pokemon(50, &["Tackle", "Growl"], &moves);
        for _ in 0..40 {
            drained.spend_pp("Tackle");
            drained.spend_pp("Growl");
        }
        let other = make_pokemon(50, &["Tackle"], &moves);
        let engine = engine(vec![drained], vec![other], vec![]);

        let context = BattleContext::new(&engine, 0);
        assert_eq!(context.valid_moves(), vec![STRUGGLE.to_string()]);
        // The opponent's seat still sees its own usable move.
        let context = BattleContext::new(&engine, 1);
        assert_eq!(context.valid_moves(), vec!["Tackle".to_string()]);
    }

    #[test]
    fn valid_switch_targets_skip_active_and_fainted_slots() {
        let moves = MoveRegistry::standard();
        let mut fainted = make_pokemon(50, &["Tackle"], &moves);
        fainted.take_damage(u16::MAX);
        let team1 = vec![
            make_pokemon(50, &["Tackle"], &moves),
            fainted,
            make_pokemon(50, &["Tackle"], &moves),
        ];
        let team2 = vec![make_pokemon(50, &["Tackle"], &moves)];
        let engine = engine(team1, team2, vec![]);

        let context = BattleContext::new(&engine, 0);
        assert_eq!(context.valid_switch_targets(), vec![2]);
        let context = BattleContext::new(&engine, 1);
        assert!(context.valid_switch_targets().is_empty());
    }

    #[test]
    fn bot_queues_a_replacement_when_its_active_faints() {
        let moves = MoveRegistry::standard();
        let team1 = vec![make_pokemon(90, &["Tackle"], &moves)];
        let mut fodder = make_pokemon(10, &["Tackle"], &moves);
        fodder.set_hp(1);
        let team2 = vec![fodder, make_pokemon(10, &["Tackle"], &moves)];
        // Round 1: one variance draw kills the fodder. Round 2: the bot's
        // switch resolves first, then one more Tackle connects.
        let mut engine = engine(team1, team2, vec![50, 50]);
        let mut bot = BattleBot::new(Box::new(RandomStrategy::seeded(0)), 1);

        engine.queue_move(0, "Tackle").unwrap();
        bot.queue_turn(&mut engine).unwrap();
        engine.play_out_turns().unwrap();
        assert!(engine.sides()[1].needs_switch());

        engine.queue_move(0, "Tackle").unwrap();
        bot.queue_turn(&mut engine).unwrap();
        engine.play_out_turns().unwrap();

        assert!(!engine.sides()[1].needs_switch());
        assert_eq!(engine.sides()[1].active_index(), 1);
    }
}
