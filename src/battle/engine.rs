use crate::battle::damage::calculate_damage;
use crate::battle::events::{BattleEvent, EventBus};
use crate::battle::rng::BattleRng;
use crate::battle::side::Side;
use crate::battle::turn::Turn;
use crate::errors::{ArgumentError, BattleResult, StateError};
use crate::move_data::{EffectTarget, MoveEffect, MoveKind, MoveRegistry, STRUGGLE};
use crate::pokemon::PokemonInst;
use crate::stats::Stat;
use crate::types::TypeChart;
use std::sync::Arc;

const PLAYER_COUNT: usize = 2;

/// The deterministic battle core.
///
/// Owns both sides' battle state and the RNG; shares the move registry
/// and type chart read-only with whoever is picking actions. A round is
/// driven by queueing one [`Turn`] per player, then calling
/// [`play_out_turns`](BattleEngine::play_out_turns), which resolves both
/// actions in order and returns the round's events.
#[derive(Debug, Clone)]
pub struct BattleEngine {
    sides: [Side; 2],
    pending: [Option<Turn>; 2],
    turn_number: u32,
    moves: Arc<MoveRegistry>,
    type_chart: Arc<TypeChart>,
    rng: BattleRng,
}

impl BattleEngine {
    /// Start a battle between two rosters. Rosters are cloned; each side's
    /// slot 0 starts active. Teams must have 1 to 6 members.
    pub fn new(
        team1: &[PokemonInst],
        team2: &[PokemonInst],
        moves: Arc<MoveRegistry>,
        type_chart: Arc<TypeChart>,
        rng: BattleRng,
    ) -> BattleResult<Self> {
        let sides = [Side::new(team1)?, Side::new(team2)?];
        Ok(BattleEngine {
            sides,
            pending: [None, None],
            turn_number: 1,
            moves,
            type_chart,
            rng,
        })
    }

    // --- Read queries ---

    pub fn sides(&self) -> &[Side; 2] {
        &self.sides
    }

    pub fn side(&self, player: usize) -> BattleResult<&Side> {
        self.sides
            .get(player)
            .ok_or_else(|| ArgumentError::UnknownPlayer(player).into())
    }

    pub fn active_pokemon(&self, player: usize) -> BattleResult<&PokemonInst> {
        Ok(self.side(player)?.active())
    }

    pub fn team(&self, player: usize) -> BattleResult<&[PokemonInst]> {
        Ok(self.side(player)?.team())
    }

    /// 1-based round counter; increments after each completed round.
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn move_registry(&self) -> &MoveRegistry {
        &self.moves
    }

    pub fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }

    /// The battle ends as soon as either team is fully fainted.
    pub fn is_finished(&self) -> bool {
        self.sides.iter().any(Side::is_wiped)
    }

    // --- Queueing ---

    /// Queue a move for a player. A known move with zero PP is silently
    /// replaced by Struggle, which is always available and never runs out.
    /// Unknown names (other than Struggle) are rejected.
    pub fn queue_move(&mut self, player: usize, move_name: &str) -> BattleResult<()> {
        let active = self.active_pokemon(player)?;

        let mut name = move_name;
        if name != STRUGGLE && active.remaining_pp(name) == Some(0) {
            name = STRUGGLE;
        }
        if name != STRUGGLE && !active.knows_move(name) {
            return Err(ArgumentError::UnknownMove(name.to_string()).into());
        }

        self.queue(Turn::Move {
            player,
            move_name: name.to_string(),
        })
    }

    /// Queue a switch to a team slot for a player.
    pub fn queue_switch(&mut self, player: usize, target: usize) -> BattleResult<()> {
        let side = self.side(player)?;
        if target >= side.team_size() {
            return Err(ArgumentError::SwitchIndexOutOfBounds {
                index: target,
                team_size: side.team_size(),
            }
            .into());
        }
        self.queue(Turn::Switch { player, target })
    }

    fn queue(&mut self, turn: Turn) -> BattleResult<()> {
        if !self.is_valid_turn(&turn) {
            return Err(ArgumentError::InvalidTurn(format!("{:?}", turn)).into());
        }
        // Re-queueing replaces the player's earlier choice.
        let player = turn.player();
        self.pending[player] = Some(turn);
        Ok(())
    }

    /// Whether a turn would be legal to queue right now.
    ///
    /// A switch must target a healthy, non-active teammate. A move needs a
    /// healthy attacker with no replacement owed, and a registered move
    /// the attacker knows (Struggle is exempt from being known).
    pub fn is_valid_turn(&self, turn: &Turn) -> bool {
        let Some(side) = self.sides.get(turn.player()) else {
            return false;
        };
        match turn {
            Turn::Switch { target, .. } => match side.pokemon(*target) {
                Some(candidate) => *target != side.active_index() && !candidate.is_fainted(),
                None => false,
            },
            Turn::Move { move_name, .. } => {
                !side.active().is_fainted()
                    && !side.needs_switch()
                    && self.moves.contains(move_name)
                    && (move_name == STRUGGLE || side.active().knows_move(move_name))
            }
        }
    }

    // --- Round resolution ---

    /// Resolve one full round from the two queued turns, in order:
    /// switches first, then moves by priority, then by effective speed,
    /// with an exact tie broken by a coin flip. Returns the round's events
    /// and advances the turn counter. Fails without side effects unless
    /// both players have queued.
    pub fn play_out_turns(&mut self) -> BattleResult<EventBus> {
        let queued = self.pending.iter().flatten().count();
        if queued < PLAYER_COUNT {
            return Err(StateError::RoundNotReady { queued }.into());
        }
        let first_choice = self.pending[0].take().unwrap_or_else(|| unreachable!());
        let second_choice = self.pending[1].take().unwrap_or_else(|| unreachable!());

        let (first, second) = if self.acts_first(&first_choice, &second_choice) {
            (first_choice, second_choice)
        } else {
            (second_choice, first_choice)
        };

        let mut bus = EventBus::new();
        for turn in [first, second] {
            match turn {
                Turn::Switch { player, target } => self.play_switch(player, target, &mut bus),
                Turn::Move { player, move_name } => self.play_move(player, &move_name, &mut bus),
            }
        }

        self.turn_number += 1;
        Ok(bus)
    }

    /// Ordering between player 0's and player 1's choices. Switches beat
    /// moves; two switches resolve player 0 first. Between moves: higher
    /// priority, then higher effective speed, then a coin flip. A move
    /// missing from the registry orders at priority 0 and is diagnosed at
    /// execution.
    fn acts_first(&mut self, first: &Turn, second: &Turn) -> bool {
        if first.is_switch() {
            return true;
        }
        if second.is_switch() {
            return false;
        }

        let priority_of = |turn: &Turn| match turn {
            Turn::Move { move_name, .. } => {
                self.moves.get(move_name).map(|m| m.priority).unwrap_or(0)
            }
            Turn::Switch { .. } => 0,
        };
        let (p0, p1) = (priority_of(first), priority_of(second));
        if p0 != p1 {
            return p0 > p1;
        }

        let s0 = self.sides[0].active().effective_stat(Stat::Speed);
        let s1 = self.sides[1].active().effective_stat(Stat::Speed);
        if s0 != s1 {
            return s0 > s1;
        }

        self.rng.coin_flip("speed tie")
    }

    fn play_switch(&mut self, player: usize, target: usize, bus: &mut EventBus) {
        let side = &mut self.sides[player];
        bus.push(BattleEvent::PokemonWithdrawn {
            player,
            name: side.active().nickname().to_string(),
        });
        side.switch_active(target);
        bus.push(BattleEvent::PokemonSentOut {
            player,
            name: side.active().nickname().to_string(),
        });
    }

    fn play_move(&mut self, player: usize, move_name: &str, bus: &mut EventBus) {
        let BattleEngine {
            sides,
            moves,
            type_chart,
            rng,
            ..
        } = self;
        let (attacker_side, defender_side) = split_sides(sides, player);

        // A faint earlier in the round cancels the action outright: no
        // announcement, no PP spent.
        if attacker_side.active().is_fainted() || defender_side.active().is_fainted() {
            return;
        }

        let Some(move_data) = moves.get(move_name) else {
            bus.push(BattleEvent::MoveNotFound {
                name: move_name.to_string(),
            });
            return;
        };

        let hit = move_data.always_hits()
            || rng.percent("accuracy roll") < move_data.accuracy.unwrap_or(100);
        if !hit {
            bus.push(BattleEvent::MoveUsed {
                attacker: attacker_side.active().nickname().to_string(),
                move_name: move_name.to_string(),
            });
            bus.push(BattleEvent::MoveMissed);
            return;
        }

        // A miss costs nothing; PP is only spent once the move connects,
        // and Struggle has no pool to spend from.
        if move_name != STRUGGLE {
            attacker_side.active_mut().spend_pp(move_name);
        }
        bus.push(BattleEvent::MoveUsed {
            attacker: attacker_side.active().nickname().to_string(),
            move_name: move_name.to_string(),
        });

        match move_data.kind {
            MoveKind::Damaging { category, power } => {
                let outcome = calculate_damage(
                    attacker_side.active(),
                    defender_side.active(),
                    move_data,
                    category,
                    power,
                    type_chart,
                    rng,
                );
                bus.push(BattleEvent::TypeEffectiveness {
                    multiplier: outcome.effectiveness,
                });
                if outcome.amount > 0 {
                    defender_side.active_mut().take_damage(outcome.amount);
                    bus.push(BattleEvent::DamageDealt {
                        target: defender_side.active().nickname().to_string(),
                        amount: outcome.amount,
                        source: move_name.to_string(),
                    });
                } else {
                    bus.push(BattleEvent::NoEffect {
                        target: defender_side.active().nickname().to_string(),
                    });
                }
                if let Some(effect) = move_data.effect {
                    apply_effect(&effect, attacker_side, defender_side, rng, bus);
                }
            }
            MoveKind::Status => {
                if let Some(effect) = move_data.effect {
                    apply_effect(&effect, attacker_side, defender_side, rng, bus);
                }
            }
        }

        check_faint(defender_side, bus);
        check_faint(attacker_side, bus);
    }
}

/// Split the side array into (acting, defending) mutable halves.
fn split_sides(sides: &mut [Side; 2], attacker: usize) -> (&mut Side, &mut Side) {
    let [side0, side1] = sides;
    if attacker == 0 {
        (side0, side1)
    } else {
        (side1, side0)
    }
}

/// Roll an on-hit effect's chance and apply it. Status infliction is
/// refused when the target already carries a condition; the event is
/// recorded only when something actually changed.
fn apply_effect(
    effect: &MoveEffect,
    attacker_side: &mut Side,
    defender_side: &mut Side,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) {
    match effect {
        MoveEffect::InflictStatus { status, chance } => {
            if rng.percent("status effect chance") < *chance {
                let defender = defender_side.active_mut();
                if defender.try_set_status(*status) {
                    bus.push(BattleEvent::StatusInflicted {
                        target: defender.nickname().to_string(),
                        status: *status,
                    });
                }
            }
        }
        MoveEffect::ChangeStat {
            stat,
            stages,
            target,
            chance,
        } => {
            if rng.percent("stat effect chance") < *chance {
                let recipient = match target {
                    EffectTarget::User => attacker_side.active_mut(),
                    EffectTarget::Opponent => defender_side.active_mut(),
                };
                recipient.modify_stat(*stat, *stages);
                bus.push(BattleEvent::StatStageChanged {
                    target: recipient.nickname().to_string(),
                    stat: *stat,
                    delta: *stages,
                });
            }
        }
    }
}

fn check_faint(side: &mut Side, bus: &mut EventBus) {
    if side.active().is_fainted() && !side.needs_switch() {
        side.set_needs_switch(true);
        bus.push(BattleEvent::PokemonFainted {
            name: side.active().nickname().to_string(),
        });
    }
}
