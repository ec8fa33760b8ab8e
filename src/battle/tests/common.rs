use crate::battle::engine::BattleEngine;
use crate::battle::rng::BattleRng;
use crate::move_data::MoveRegistry;
use crate::pokemon::PokemonInst;
use crate::species::PokemonSpecies;
use crate::stats::Stats;
use crate::types::{Type, TypeChart};
use std::sync::Arc;

/// Builder for test combatants with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new(runner(50), 50)
///     .with_moves(&["Tackle"])
///     .with_hp(1)
///     .build(&MoveRegistry::standard());
/// ```
pub struct TestPokemonBuilder {
    species: PokemonSpecies,
    level: u8,
    move_names: Vec<String>,
    nickname: Option<String>,
    hp: Option<u16>,
}

impl TestPokemonBuilder {
    pub fn new(species: PokemonSpecies, level: u8) -> Self {
        TestPokemonBuilder {
            species,
            level,
            move_names: Vec::new(),
            nickname: None,
            hp: None,
        }
    }

    pub fn with_moves(mut self, names: &[&str]) -> Self {
        self.move_names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nickname = Some(nickname.to_string());
        self
    }

    /// Starting HP below max, for engineering faints.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn build(self, moves: &MoveRegistry) -> PokemonInst {
        let mut pokemon = self.species.instantiate(self.level);
        if let Some(nickname) = &self.nickname {
            pokemon.set_nickname(nickname);
        }
        for name in &self.move_names {
            let move_data = moves
                .get(name)
                .unwrap_or_else(|| panic!("move not in test registry: {}", name));
            pokemon.learn_move(move_data);
        }
        if let Some(hp) = self.hp {
            pokemon.set_hp(hp);
        }
        pokemon
    }
}

/// A plain Normal-type species whose base speed is the only knob that
/// matters; everything else is a flat 50 line.
pub fn runner(base_speed: u16) -> PokemonSpecies {
    PokemonSpecies::new(
        "Runner",
        vec![Type::Normal],
        Stats::new(50, 50, 50, 50, 50, base_speed),
    )
}

pub fn gastly() -> PokemonSpecies {
    PokemonSpecies::new(
        "Gastly",
        vec![Type::Ghost, Type::Poison],
        Stats::new(30, 35, 30, 100, 35, 80),
    )
}

/// Engine over the standard registry and type chart, with every RNG draw
/// scripted.
pub fn scripted_engine(
    team1: &[PokemonInst],
    team2: &[PokemonInst],
    outcomes: Vec<u8>,
) -> BattleEngine {
    scripted_engine_with(MoveRegistry::standard(), team1, team2, outcomes)
}

/// Same, but over a reduced custom registry.
pub fn scripted_engine_with(
    moves: MoveRegistry,
    team1: &[PokemonInst],
    team2: &[PokemonInst],
    outcomes: Vec<u8>,
) -> BattleEngine {
    BattleEngine::new(
        team1,
        team2,
        Arc::new(moves),
        Arc::new(TypeChart::standard()),
        BattleRng::scripted(outcomes),
    )
    .expect("test teams must be valid")
}
