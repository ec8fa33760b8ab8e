use crate::battle::rng::BattleRng;
use crate::move_data::{MoveCategory, MoveData};
use crate::pokemon::PokemonInst;
use crate::stats::Stat;
use crate::types::TypeChart;

/// The result of one damaging hit. The effectiveness multiplier is kept
/// so the engine can narrate the matchup and detect immunity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    pub amount: u16,
    pub effectiveness: f64,
}

/// Damage for one hit of a damaging move.
///
/// Base damage uses the classic level formula with the category's
/// attack and defense stats (after stage multipliers):
///
///   base = floor((2 * level / 5 + 2) * power * attack / defense / 50) + 2
///
/// then one combined multiplier is applied and the result truncated:
///
///   amount = trunc(base * stab * effectiveness * variance)
///
/// STAB is 1.5 when the attacker shares the move's type. Variance is a
/// fresh roll in [0.85, 1.0) for every hit, including immune ones, so a
/// battle's roll sequence does not depend on the matchup.
pub fn calculate_damage(
    attacker: &PokemonInst,
    defender: &PokemonInst,
    move_data: &MoveData,
    category: MoveCategory,
    power: u16,
    chart: &TypeChart,
    rng: &mut BattleRng,
) -> DamageOutcome {
    let (attack, defense) = match category {
        MoveCategory::Physical => (
            attacker.effective_stat(Stat::Attack),
            defender.effective_stat(Stat::Defense),
        ),
        MoveCategory::Special => (
            attacker.effective_stat(Stat::SpecialAttack),
            defender.effective_stat(Stat::SpecialDefense),
        ),
    };

    let level = attacker.level() as f64;
    let base = ((2.0 * level / 5.0 + 2.0) * power as f64 * attack as f64 / defense as f64 / 50.0)
        .floor()
        + 2.0;

    let stab = if attacker.types().contains(&move_data.move_type) {
        1.5
    } else {
        1.0
    };
    let effectiveness = chart.effectiveness(move_data.move_type, defender.types());
    let variance = rng.damage_variance("damage variance");

    DamageOutcome {
        amount: (base * stab * effectiveness * variance) as u16,
        effectiveness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::PokemonSpecies;
    use crate::stats::Stats;
    use crate::types::Type;
    use pretty_assertions::assert_eq;

    fn fire_attacker() -> PokemonInst {
        PokemonSpecies::new(
            "Charmander",
            vec![Type::Fire],
            Stats::new(39, 52, 43, 60, 50, 65),
        )
        .instantiate(32)
    }

    fn grass_defender() -> PokemonInst {
        PokemonSpecies::new(
            "Bulbasaur",
            vec![Type::Grass, Type::Poison],
            Stats::new(45, 49, 49, 65, 65, 45),
        )
        .instantiate(31)
    }

    fn ember() -> MoveData {
        MoveData::damaging("Ember", Type::Fire, MoveCategory::Special, 40, Some(100), 25)
    }

    fn expected_amount(
        level: u8,
        power: u16,
        attack: u16,
        defense: u16,
        stab: f64,
        effectiveness: f64,
        variance: f64,
    ) -> u16 {
        let level = level as f64;
        let base = ((2.0 * level / 5.0 + 2.0) * power as f64 * attack as f64 / defense as f64
            / 50.0)
            .floor()
            + 2.0;
        (base * stab * effectiveness * variance) as u16
    }

    #[test]
    fn stab_and_effectiveness_multiply_into_one_truncation() {
        let attacker = fire_attacker();
        let defender = grass_defender();
        let chart = TypeChart::standard();
        // Percentile 0 pins variance at exactly 0.85.
        let mut rng = BattleRng::scripted(vec![0]);

        let outcome = calculate_damage(
            &attacker,
            &defender,
            &ember(),
            MoveCategory::Special,
            40,
            &chart,
            &mut rng,
        );

        assert_eq!(outcome.effectiveness, 2.0);
        let expected = expected_amount(
            attacker.level(),
            40,
            attacker.effective_stat(Stat::SpecialAttack),
            defender.effective_stat(Stat::SpecialDefense),
            1.5,
            2.0,
            0.85,
        );
        assert_eq!(outcome.amount, expected);
        assert!(outcome.amount > 0);
    }

    #[test]
    fn immunity_yields_zero_damage_but_still_rolls_variance() {
        let attacker = fire_attacker();
        let ghost = PokemonSpecies::new(
            "Gastly",
            vec![Type::Ghost, Type::Poison],
            Stats::new(30, 35, 30, 100, 35, 80),
        )
        .instantiate(30);
        let tackle =
            MoveData::damaging("Tackle", Type::Normal, MoveCategory::Physical, 40, Some(100), 35);
        let chart = TypeChart::standard();
        let mut rng = BattleRng::scripted(vec![50]);

        let outcome = calculate_damage(
            &attacker,
            &ghost,
            &tackle,
            MoveCategory::Physical,
            40,
            &chart,
            &mut rng,
        );

        assert_eq!(outcome.amount, 0);
        assert_eq!(outcome.effectiveness, 0.0);
    }

    #[test]
    fn stage_drop_reduces_physical_damage() {
        let mut weakened = fire_attacker();
        let defender = grass_defender();
        let tackle =
            MoveData::damaging("Tackle", Type::Normal, MoveCategory::Physical, 40, Some(100), 35);
        let chart = TypeChart::standard();

        let mut rng = BattleRng::scripted(vec![0]);
        let before = calculate_damage(
            &weakened,
            &defender,
            &tackle,
            MoveCategory::Physical,
            40,
            &chart,
            &mut rng,
        );

        weakened.modify_stat(Stat::Attack, -2);
        let mut rng = BattleRng::scripted(vec![0]);
        let after = calculate_damage(
            &weakened,
            &defender,
            &tackle,
            MoveCategory::Physical,
            40,
            &chart,
            &mut rng,
        );

        assert!(after.amount < before.amount);
    }
}
