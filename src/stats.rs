use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const MAX_STAGE: i8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
}

/// Concrete stat values for one combatant (or a species' base line).
///
/// Accuracy and evasion have no stored value; they exist only as stage
/// targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl Stats {
    pub fn new(hp: u16, attack: u16, defense: u16, special_attack: u16, special_defense: u16, speed: u16) -> Self {
        Stats {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
            Stat::Accuracy | Stat::Evasion => 0,
        }
    }

    /// Derive the concrete stat line for a species at a given level.
    ///
    /// Non-HP: floor(2 * base * level / 100) + 5
    /// HP:     floor(2 * base * level / 100) + level + 10
    ///
    /// Values are fixed for the lifetime of a combatant; there is no
    /// leveling during battle.
    pub fn at_level(base: &Stats, level: u8) -> Stats {
        Stats {
            hp: calc_hp(base.hp, level),
            attack: calc_stat(base.attack, level),
            defense: calc_stat(base.defense, level),
            special_attack: calc_stat(base.special_attack, level),
            special_defense: calc_stat(base.special_defense, level),
            speed: calc_stat(base.speed, level),
        }
    }
}

fn calc_stat(base: u16, level: u8) -> u16 {
    ((2 * base as u32 * level as u32) / 100 + 5) as u16
}

fn calc_hp(base: u16, level: u8) -> u16 {
    ((2 * base as u32 * level as u32) / 100 + level as u32 + 10) as u16
}

/// Stage multiplier for a stat stage in [-6, +6].
///
/// (2 + stage) / 2 for non-negative stages, 2 / (2 - stage) for negative
/// ones: +1 is x1.5, -1 is x0.666...
pub fn stage_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-MAX_STAGE, MAX_STAGE);
    if stage >= 0 {
        (2.0 + stage as f64) / 2.0
    } else {
        2.0 / (2.0 - stage as f64)
    }
}

/// Temporary in-battle stat stage modifiers (+2 Attack, -1 Speed, etc.).
///
/// Stages are clamped to [-6, +6]; repeated modification saturates at the
/// bounds rather than wrapping. Reset only between battles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatStages {
    stages: HashMap<Stat, i8>,
}

impl StatStages {
    pub fn new() -> Self {
        StatStages {
            stages: HashMap::new(),
        }
    }

    /// Current stage for a stat (0 when untouched).
    pub fn get(&self, stat: Stat) -> i8 {
        self.stages.get(&stat).copied().unwrap_or(0)
    }

    /// Apply a stage change, clamped into [-6, +6].
    pub fn modify(&mut self, stat: Stat, delta: i8) {
        let current = self.get(stat);
        let next = (current + delta).clamp(-MAX_STAGE, MAX_STAGE);
        self.stages.insert(stat, next);
    }

    /// Multiplier currently in effect for a stat.
    pub fn multiplier(&self, stat: Stat) -> f64 {
        stage_multiplier(self.get(stat))
    }
}
