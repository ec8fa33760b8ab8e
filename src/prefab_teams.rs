//! Built-in species and demo rosters for the console front end and for
//! end-to-end tests. Real data lives in the caller's hands; these are a
//! small starter set with canonical base stat lines.

use crate::errors::{ArgumentError, BattleResult};
use crate::move_data::MoveRegistry;
use crate::pokemon::PokemonInst;
use crate::species::PokemonSpecies;
use crate::stats::Stats;
use crate::types::Type;

pub fn charmander() -> PokemonSpecies {
    PokemonSpecies::new(
        "Charmander",
        vec![Type::Fire],
        Stats::new(39, 52, 43, 60, 50, 65),
    )
}

pub fn bulbasaur() -> PokemonSpecies {
    PokemonSpecies::new(
        "Bulbasaur",
        vec![Type::Grass, Type::Poison],
        Stats::new(45, 49, 49, 65, 65, 45),
    )
}

pub fn squirtle() -> PokemonSpecies {
    PokemonSpecies::new(
        "Squirtle",
        vec![Type::Water],
        Stats::new(44, 48, 65, 50, 64, 43),
    )
}

pub fn pikachu() -> PokemonSpecies {
    PokemonSpecies::new(
        "Pikachu",
        vec![Type::Electric],
        Stats::new(35, 55, 40, 50, 50, 90),
    )
}

/// Build a combatant from a species at a level, teaching it the named
/// moves from the registry. Unknown move names are an error rather than a
/// silently empty slot.
pub fn build_pokemon(
    species: &PokemonSpecies,
    level: u8,
    move_names: &[&str],
    moves: &MoveRegistry,
) -> BattleResult<PokemonInst> {
    let mut pokemon = species.instantiate(level);
    for name in move_names {
        let move_data = moves
            .get(name)
            .ok_or_else(|| ArgumentError::UnknownMove(name.to_string()))?;
        pokemon.learn_move(move_data);
    }
    Ok(pokemon)
}

/// The classic starter matchup: each roster carries a Charmander at
/// level 32 with Ember and Tackle plus a Bulbasaur at level 31 with
/// Vine Whip and Tackle, leading with opposite members.
pub fn demo_teams(moves: &MoveRegistry) -> BattleResult<(Vec<PokemonInst>, Vec<PokemonInst>)> {
    let charmander = build_pokemon(&charmander(), 32, &["Ember", "Tackle"], moves)?;
    let bulbasaur = build_pokemon(&bulbasaur(), 31, &["Vine Whip", "Tackle"], moves)?;

    let player_team = vec![charmander.clone(), bulbasaur.clone()];
    let opponent_team = vec![bulbasaur, charmander];
    Ok((player_team, opponent_team))
}
