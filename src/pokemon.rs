use crate::move_data::MoveData;
use crate::species::PokemonSpecies;
use crate::stats::{Stat, StatStages, Stats};
use crate::types::Type;
use serde::{Deserialize, Serialize};

/// Major status conditions. A combatant holds at most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCondition {
    Burn,
    Freeze,
    Paralyze,
    Poison,
    Sleep,
}

/// One learned move: a registry key paired with the PP remaining for this
/// combatant. The move definition itself lives in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub name: String,
    pub pp: u8,
    pub max_pp: u8,
}

impl MoveSlot {
    /// Create a slot with full PP.
    pub fn new(move_data: &MoveData) -> Self {
        MoveSlot {
            name: move_data.name.clone(),
            pp: move_data.max_pp,
            max_pp: move_data.max_pp,
        }
    }

    /// Spend one PP. Never goes below zero.
    pub fn spend(&mut self) {
        self.pp = self.pp.saturating_sub(1);
    }
}

/// The mutable combatant acted upon in battle.
///
/// Stats are derived once from species and level at creation and never
/// change afterwards; battle state (HP, stages, status, PP) does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    species_name: String,
    nickname: String,
    level: u8,
    types: Vec<Type>,
    current_hp: u16,
    stats: Stats,
    stages: StatStages,
    status: Option<StatusCondition>,
    move_slots: Vec<MoveSlot>,
}

impl PokemonInst {
    /// Create a combatant from species data at a level, with full HP.
    pub fn new(species: &PokemonSpecies, level: u8) -> Self {
        let stats = Stats::at_level(&species.base_stats, level);
        PokemonInst {
            species_name: species.name.clone(),
            nickname: species.name.clone(),
            level,
            types: species.types.clone(),
            current_hp: stats.hp,
            stats,
            stages: StatStages::new(),
            status: None,
            move_slots: Vec::new(),
        }
    }

    pub fn species_name(&self) -> &str {
        &self.species_name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn set_nickname(&mut self, nickname: &str) {
        self.nickname = nickname.to_string();
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    // --- HP ---

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Apply damage, clamping HP at zero.
    pub fn take_damage(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Restore HP, clamping at max.
    pub fn heal(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp());
    }

    /// Force current HP to a value (clamped to max). Mostly for tests and
    /// roster setup.
    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp());
    }

    // --- Stats ---

    /// Unmodified stat line derived at creation.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// A stat after stage multipliers, truncated to an integer.
    /// Use this for damage and speed comparisons.
    pub fn effective_stat(&self, stat: Stat) -> u16 {
        (self.stats.get(stat) as f64 * self.stages.multiplier(stat)) as u16
    }

    /// Adjust a stat stage; saturates at the -6/+6 bounds.
    pub fn modify_stat(&mut self, stat: Stat, delta: i8) {
        self.stages.modify(stat, delta);
    }

    pub fn stat_stage(&self, stat: Stat) -> i8 {
        self.stages.get(stat)
    }

    pub fn is_faster_than(&self, other: &PokemonInst) -> bool {
        self.effective_stat(Stat::Speed) > other.effective_stat(Stat::Speed)
    }

    // --- Status conditions ---

    pub fn status(&self) -> Option<StatusCondition> {
        self.status
    }

    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    /// Set a status condition only if none is present. Returns whether the
    /// condition was applied.
    pub fn try_set_status(&mut self, status: StatusCondition) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(status);
        true
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // --- Moves ---

    /// Add a move to this combatant's slots with full PP.
    pub fn learn_move(&mut self, move_data: &MoveData) {
        self.move_slots.push(MoveSlot::new(move_data));
    }

    pub fn move_slots(&self) -> &[MoveSlot] {
        &self.move_slots
    }

    pub fn knows_move(&self, name: &str) -> bool {
        self.move_slots.iter().any(|slot| slot.name == name)
    }

    /// PP remaining for a known move, or None when the move isn't known.
    pub fn remaining_pp(&self, name: &str) -> Option<u8> {
        self.move_slots
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.pp)
    }

    /// Spend one PP on a known move. No-op for unknown names.
    pub fn spend_pp(&mut self, name: &str) {
        if let Some(slot) = self.move_slots.iter_mut().find(|slot| slot.name == name) {
            slot.spend();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_data::{MoveCategory, MoveData};
    use crate::stats::Stats;
    use pretty_assertions::assert_eq;

    fn test_species() -> PokemonSpecies {
        PokemonSpecies::new(
            "Testmon",
            vec![Type::Normal],
            Stats::new(50, 60, 50, 60, 50, 70),
        )
    }

    fn tackle() -> MoveData {
        MoveData::damaging("Tackle", Type::Normal, MoveCategory::Physical, 40, Some(100), 35)
    }

    #[test]
    fn created_at_full_hp() {
        let mon = test_species().instantiate(50);
        assert_eq!(mon.current_hp(), mon.max_hp());
        assert!(!mon.is_fainted());
    }

    #[test]
    fn damage_clamps_at_zero_and_heal_at_max() {
        let mut mon = test_species().instantiate(50);
        let max = mon.max_hp();

        mon.take_damage(max + 500);
        assert_eq!(mon.current_hp(), 0);
        assert!(mon.is_fainted());

        mon.heal(u16::MAX);
        assert_eq!(mon.current_hp(), max);
    }

    #[test]
    fn oversized_heal_from_nonzero_hp_clamps_at_max() {
        let mut mon = test_species().instantiate(50);
        let max = mon.max_hp();

        // A huge heal on a barely-scratched combatant must not wrap the
        // HP sum around; it clamps at max like any other heal.
        mon.take_damage(1);
        mon.heal(u16::MAX);
        assert_eq!(mon.current_hp(), max);
    }

    #[test]
    fn effective_stat_applies_stage_multiplier() {
        let mut mon = test_species().instantiate(50);
        let base_attack = mon.stats().attack;

        mon.modify_stat(Stat::Attack, 1);
        assert_eq!(mon.effective_stat(Stat::Attack), (base_attack as f64 * 1.5) as u16);

        mon.modify_stat(Stat::Attack, -2); // back to -1 overall
        assert_eq!(
            mon.effective_stat(Stat::Attack),
            (base_attack as f64 * (2.0 / 3.0)) as u16
        );
    }

    #[test]
    fn pp_accounting_never_goes_negative() {
        let mut mon = test_species().instantiate(50);
        let move_data = tackle();
        mon.learn_move(&move_data);

        for _ in 0..40 {
            mon.spend_pp("Tackle");
        }
        assert_eq!(mon.remaining_pp("Tackle"), Some(0));
        assert_eq!(mon.remaining_pp("Splash"), None);
    }

    #[test]
    fn status_refuses_overwrite() {
        let mut mon = test_species().instantiate(50);
        assert!(mon.try_set_status(StatusCondition::Burn));
        assert!(!mon.try_set_status(StatusCondition::Sleep));
        assert_eq!(mon.status(), Some(StatusCondition::Burn));

        mon.clear_status();
        assert!(mon.try_set_status(StatusCondition::Sleep));
    }
}
