use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Elemental types for combatants and moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Steel,
    Dark,
    Fairy,
}

/// Attacker-type x defender-type multiplier table.
///
/// Built once from the three effectiveness groups (2.0 / 0.5 / 0.0); any
/// pair with no registered interaction is neutral (1.0). The table is
/// read-only after construction and can be shared across battles.
#[derive(Debug, Clone)]
pub struct TypeChart {
    chart: HashMap<(Type, Type), f64>,
}

impl TypeChart {
    /// Build the standard chart covering all 18 types.
    pub fn standard() -> Self {
        use Type::*;

        let mut chart = TypeChart {
            chart: HashMap::new(),
        };

        // Super effective (2.0x)
        chart.register(Fire, 2.0, &[Grass, Ice, Bug, Steel]);
        chart.register(Water, 2.0, &[Fire, Ground, Rock]);
        chart.register(Grass, 2.0, &[Water, Ground, Rock]);
        chart.register(Electric, 2.0, &[Water, Flying]);
        chart.register(Ice, 2.0, &[Grass, Ground, Flying, Dragon]);
        chart.register(Fighting, 2.0, &[Normal, Ice, Rock, Dark, Steel]);
        chart.register(Poison, 2.0, &[Grass, Fairy]);
        chart.register(Ground, 2.0, &[Fire, Electric, Poison, Rock, Steel]);
        chart.register(Flying, 2.0, &[Grass, Fighting, Bug]);
        chart.register(Psychic, 2.0, &[Fighting, Poison]);
        chart.register(Bug, 2.0, &[Grass, Psychic, Dark]);
        chart.register(Rock, 2.0, &[Fire, Ice, Flying, Bug]);
        chart.register(Ghost, 2.0, &[Psychic, Ghost]);
        chart.register(Dragon, 2.0, &[Dragon]);
        chart.register(Steel, 2.0, &[Ice, Rock, Fairy]);
        chart.register(Dark, 2.0, &[Psychic, Ghost]);
        chart.register(Fairy, 2.0, &[Fighting, Dragon, Dark]);

        // Not very effective (0.5x)
        chart.register(Normal, 0.5, &[Rock, Steel]);
        chart.register(Fire, 0.5, &[Fire, Water, Rock, Dragon]);
        chart.register(Water, 0.5, &[Water, Grass, Dragon]);
        chart.register(Grass, 0.5, &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel]);
        chart.register(Electric, 0.5, &[Electric, Grass, Dragon]);
        chart.register(Ice, 0.5, &[Fire, Water, Ice, Steel]);
        chart.register(Fighting, 0.5, &[Poison, Flying, Psychic, Bug, Fairy]);
        chart.register(Poison, 0.5, &[Poison, Ground, Rock, Ghost]);
        chart.register(Ground, 0.5, &[Grass, Bug]);
        chart.register(Flying, 0.5, &[Electric, Rock, Steel]);
        chart.register(Psychic, 0.5, &[Psychic, Steel]);
        chart.register(Bug, 0.5, &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy]);
        chart.register(Rock, 0.5, &[Fighting, Ground, Steel]);
        chart.register(Ghost, 0.5, &[Dark]);
        chart.register(Dragon, 0.5, &[Steel]);
        chart.register(Steel, 0.5, &[Fire, Water, Electric, Steel]);
        chart.register(Dark, 0.5, &[Fighting, Dark, Fairy]);
        chart.register(Fairy, 0.5, &[Fire, Poison, Steel]);

        // Immunities (0.0x)
        chart.register(Normal, 0.0, &[Ghost]);
        chart.register(Electric, 0.0, &[Ground]);
        chart.register(Fighting, 0.0, &[Ghost]);
        chart.register(Poison, 0.0, &[Steel]);
        chart.register(Ground, 0.0, &[Flying]);
        chart.register(Psychic, 0.0, &[Dark]);
        chart.register(Ghost, 0.0, &[Normal]);
        chart.register(Dragon, 0.0, &[Fairy]);

        chart
    }

    /// Create an empty chart where every matchup is neutral. Useful for
    /// tests that want full control over registered interactions.
    pub fn neutral() -> Self {
        TypeChart {
            chart: HashMap::new(),
        }
    }

    /// Register one multiplier for an attacking type against several defending types.
    pub fn register(&mut self, attacker: Type, multiplier: f64, defenders: &[Type]) {
        for &defender in defenders {
            self.chart.insert((attacker, defender), multiplier);
        }
    }

    /// Multiplier for a single attacker/defender pairing (1.0 when unregistered).
    pub fn multiplier(&self, attacker: Type, defender: Type) -> f64 {
        self.chart.get(&(attacker, defender)).copied().unwrap_or(1.0)
    }

    /// Combined effectiveness against a possibly multi-typed defender: the
    /// product of the per-type multipliers, so dual weaknesses compound to
    /// 4.0x and a single immunity zeroes the total.
    pub fn effectiveness(&self, attacker: Type, defender_types: &[Type]) -> f64 {
        defender_types
            .iter()
            .map(|&defender| self.multiplier(attacker, defender))
            .product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unregistered_pairs_are_neutral() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier(Type::Normal, Type::Normal), 1.0);
        assert_eq!(chart.multiplier(Type::Fire, Type::Electric), 1.0);
    }

    #[test]
    fn registered_groups_apply() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier(Type::Fire, Type::Grass), 2.0);
        assert_eq!(chart.multiplier(Type::Grass, Type::Fire), 0.5);
        assert_eq!(chart.multiplier(Type::Electric, Type::Ground), 0.0);
    }

    #[test]
    fn dual_typed_defender_multiplies() {
        let chart = TypeChart::standard();
        // Ice is super effective against both Grass and Flying.
        assert_eq!(
            chart.effectiveness(Type::Ice, &[Type::Grass, Type::Flying]),
            4.0
        );
        // Fire resisted by Water but boosted by Grass cancels out.
        assert_eq!(
            chart.effectiveness(Type::Fire, &[Type::Water, Type::Grass]),
            1.0
        );
    }

    #[test]
    fn immunity_zeroes_the_total() {
        let chart = TypeChart::standard();
        // Ground can't touch Flying no matter the second type.
        assert_eq!(
            chart.effectiveness(Type::Ground, &[Type::Flying, Type::Fire]),
            0.0
        );
    }

    #[test]
    fn neutral_chart_is_all_ones() {
        let chart = TypeChart::neutral();
        assert_eq!(chart.effectiveness(Type::Fire, &[Type::Grass, Type::Ice]), 1.0);
    }
}
