use crate::pokemon::StatusCondition;
use crate::stats::Stat;
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the universal fallback move. It is substituted when the
/// requested move has no PP left, is always allowed without being known,
/// and never spends PP itself.
pub const STRUGGLE: &str = "Struggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
}

/// Closed set of move behaviors. The move set is fixed, so behavior is
/// resolved by pattern match rather than dynamic dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// No damage; only the on-hit effect fires.
    Status,
    /// Computes and applies damage before any on-hit effect.
    Damaging { category: MoveCategory, power: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTarget {
    User,
    Opponent,
}

/// Optional on-hit effect attached to a move. Fires after damage has been
/// applied, with the listed percent chance drawn from the engine's RNG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MoveEffect {
    /// Try to inflict a status condition on the defender. Refused when the
    /// defender already has one.
    InflictStatus { status: StatusCondition, chance: u8 },
    /// Shift a stat stage on the user or the opponent.
    ChangeStat {
        stat: Stat,
        stages: i8,
        target: EffectTarget,
        chance: u8,
    },
}

/// Immutable definition of one move. Owned by the registry and referenced
/// by name from combatants' move slots; never copied per combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub move_type: Type,
    /// Accuracy percentage. `None` is the always-hits sentinel; values of
    /// 100 or more also bypass the accuracy roll.
    pub accuracy: Option<u8>,
    pub max_pp: u8,
    /// Higher priority resolves first, before speed is consulted.
    pub priority: i8,
    pub kind: MoveKind,
    pub effect: Option<MoveEffect>,
}

impl MoveData {
    /// A damaging move with default priority and no effect.
    pub fn damaging(
        name: &str,
        move_type: Type,
        category: MoveCategory,
        power: u16,
        accuracy: Option<u8>,
        max_pp: u8,
    ) -> Self {
        MoveData {
            name: name.to_string(),
            move_type,
            accuracy,
            max_pp,
            priority: 0,
            kind: MoveKind::Damaging { category, power },
            effect: None,
        }
    }

    /// A non-damaging move with default priority and no effect.
    pub fn status(name: &str, move_type: Type, accuracy: Option<u8>, max_pp: u8) -> Self {
        MoveData {
            name: name.to_string(),
            move_type,
            accuracy,
            max_pp,
            priority: 0,
            kind: MoveKind::Status,
            effect: None,
        }
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_effect(mut self, effect: MoveEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// True when the accuracy roll is bypassed entirely.
    pub fn always_hits(&self) -> bool {
        match self.accuracy {
            None => true,
            Some(accuracy) => accuracy >= 100,
        }
    }
}

/// Name-keyed arena of move definitions.
///
/// Built explicitly at startup (no global statics) and shared read-only
/// between the engine and decision-makers. Tests can build reduced
/// registries with only the moves they exercise.
#[derive(Debug, Clone, Default)]
pub struct MoveRegistry {
    moves: HashMap<String, MoveData>,
}

impl MoveRegistry {
    pub fn new() -> Self {
        MoveRegistry {
            moves: HashMap::new(),
        }
    }

    pub fn register(&mut self, move_data: MoveData) {
        self.moves.insert(move_data.name.clone(), move_data);
    }

    /// Pure lookup by name; queried every round, never cached by the engine.
    pub fn get(&self, name: &str) -> Option<&MoveData> {
        self.moves.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.moves.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The full standard move table.
    pub fn standard() -> Self {
        use MoveCategory::{Physical, Special};
        use Type::*;

        let mut registry = MoveRegistry::new();

        // Plain damaging moves and always-hit status moves
        registry.register(MoveData::damaging("Alluring Voice", Fairy, Special, 80, Some(100), 10));
        registry.register(MoveData::damaging("Aqua Tail", Water, Physical, 90, Some(90), 10));
        registry.register(MoveData::damaging("Branch Poke", Grass, Physical, 40, Some(100), 40));
        registry.register(MoveData::status("Burning Bulwark", Fire, None, 10));
        registry.register(MoveData::damaging("Cut", Normal, Physical, 50, Some(95), 30));
        registry.register(MoveData::status("Dragon Cheer", Dragon, None, 15));
        registry.register(MoveData::damaging("Dragon Claw", Dragon, Physical, 80, Some(100), 15));
        registry.register(MoveData::damaging("Dragon Pulse", Dragon, Special, 85, Some(100), 10));
        registry.register(MoveData::damaging("Drill Peck", Flying, Physical, 80, Some(100), 20));
        registry.register(MoveData::damaging("Egg Bomb", Normal, Physical, 100, Some(75), 10));
        registry.register(MoveData::damaging("Fairy Wind", Fairy, Special, 40, Some(100), 30));
        registry.register(MoveData::status("Hard Press", Steel, Some(100), 10));
        registry.register(MoveData::damaging("Horn Attack", Normal, Physical, 65, Some(100), 25));
        registry.register(MoveData::damaging("Hydro Pump", Water, Special, 110, Some(80), 5));
        registry.register(MoveData::damaging("Hyper Voice", Normal, Special, 90, Some(100), 10));
        registry.register(MoveData::damaging("Land's Wrath", Ground, Physical, 90, Some(100), 10));
        registry.register(MoveData::damaging("Mega Kick", Normal, Physical, 120, Some(75), 5));
        registry.register(MoveData::damaging("Mega Punch", Normal, Physical, 80, Some(85), 20));
        registry.register(MoveData::damaging("Megahorn", Bug, Physical, 120, Some(85), 10));
        registry.register(MoveData::damaging("Mighty Cleave", Rock, Physical, 95, Some(100), 5));
        registry.register(MoveData::damaging("Peck", Flying, Physical, 35, Some(100), 35));
        registry.register(MoveData::damaging("Pound", Normal, Physical, 40, Some(100), 35));
        registry.register(MoveData::damaging("Power Gem", Rock, Special, 80, Some(100), 20));
        registry.register(MoveData::damaging("Power Whip", Grass, Physical, 120, Some(85), 10));
        registry.register(MoveData::damaging("Rock Throw", Rock, Physical, 50, Some(90), 15));
        registry.register(MoveData::damaging("Scratch", Normal, Physical, 40, Some(100), 35));
        registry.register(MoveData::damaging("Seed Bomb", Grass, Physical, 80, Some(100), 15));
        registry.register(MoveData::damaging("Slam", Normal, Physical, 80, Some(75), 20));
        registry.register(MoveData::damaging("Strength", Normal, Physical, 80, Some(100), 15));
        registry.register(MoveData::damaging("Supercell Slam", Electric, Physical, 100, Some(95), 15));
        registry.register(MoveData::damaging("Tackle", Normal, Physical, 40, Some(100), 35));
        registry.register(MoveData::damaging("Temper Flare", Fire, Physical, 75, Some(100), 10));
        registry.register(MoveData::damaging("Tera Starstorm", Normal, Special, 120, Some(100), 5));
        registry.register(MoveData::damaging("Vine Whip", Grass, Physical, 45, Some(100), 25));
        registry.register(MoveData::damaging("Vise Grip", Normal, Physical, 55, Some(100), 30));
        registry.register(MoveData::damaging("Water Gun", Water, Special, 40, Some(100), 25));
        registry.register(MoveData::damaging("Wing Attack", Flying, Physical, 60, Some(100), 35));
        registry.register(MoveData::damaging("X-Scissor", Bug, Physical, 80, Some(100), 15));

        // Priority moves
        registry.register(
            MoveData::damaging("Accelerock", Rock, Physical, 40, Some(100), 20).with_priority(1),
        );
        registry.register(
            MoveData::damaging("Aqua Jet", Water, Physical, 40, Some(100), 20).with_priority(1),
        );
        registry.register(
            MoveData::damaging("Bullet Punch", Steel, Physical, 40, Some(100), 30).with_priority(1),
        );
        registry.register(
            MoveData::damaging("Extreme Speed", Normal, Physical, 80, Some(100), 5).with_priority(2),
        );
        registry.register(
            MoveData::damaging("Ice Shard", Ice, Physical, 40, Some(100), 30).with_priority(1),
        );
        registry.register(
            MoveData::damaging("Jet Punch", Water, Physical, 60, Some(100), 15).with_priority(1),
        );
        registry.register(
            MoveData::damaging("Mach Punch", Fighting, Physical, 40, Some(100), 30).with_priority(1),
        );
        registry.register(
            MoveData::damaging("Quick Attack", Normal, Physical, 40, Some(100), 30).with_priority(1),
        );
        registry.register(
            MoveData::damaging("Shadow Sneak", Ghost, Physical, 40, Some(100), 30).with_priority(1),
        );
        registry.register(
            MoveData::damaging("Vacuum Wave", Fighting, Special, 40, Some(100), 30).with_priority(1),
        );

        // Moves with secondary effects
        registry.register(
            MoveData::damaging("Ember", Fire, Special, 40, Some(100), 25).with_effect(
                MoveEffect::InflictStatus {
                    status: StatusCondition::Burn,
                    chance: 10,
                },
            ),
        );
        registry.register(
            MoveData::status("Growl", Normal, Some(100), 40).with_effect(MoveEffect::ChangeStat {
                stat: Stat::Attack,
                stages: -1,
                target: EffectTarget::Opponent,
                chance: 100,
            }),
        );

        // The fallback. Max PP of 0 is deliberate: the engine never spends
        // PP for it, so it stays usable forever.
        registry.register(MoveData::damaging(STRUGGLE, Normal, Physical, 50, Some(100), 0));

        registry
    }
}
