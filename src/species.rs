use crate::pokemon::PokemonInst;
use crate::stats::Stats;
use crate::types::Type;
use serde::{Deserialize, Serialize};

/// Immutable species definition: name, typing, and the base stat line
/// from which concrete stats are derived at a given level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub name: String,
    pub types: Vec<Type>,
    pub base_stats: Stats,
}

impl PokemonSpecies {
    pub fn new(name: &str, types: Vec<Type>, base_stats: Stats) -> Self {
        PokemonSpecies {
            name: name.to_string(),
            types,
            base_stats,
        }
    }

    /// Create an individual of this species at a level, with derived stats
    /// and full HP. Moves are learned afterwards from the registry.
    pub fn instantiate(&self, level: u8) -> PokemonInst {
        PokemonInst::new(self, level)
    }
}
