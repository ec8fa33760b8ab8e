use crate::errors::ArgumentError;
use crate::pokemon::PokemonInst;
use serde::{Deserialize, Serialize};

pub const MAX_TEAM_SIZE: usize = 6;

/// One player's half of the battle: their team, which member is active,
/// and whether a faint has left them owing a replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Side {
    team: Vec<PokemonInst>,
    active: usize,
    needs_switch: bool,
}

impl Side {
    /// Build a side from a roster. The roster is cloned so the caller's
    /// copies are untouched by battle. Team slot 0 starts active.
    pub(crate) fn new(roster: &[PokemonInst]) -> Result<Self, ArgumentError> {
        if roster.is_empty() || roster.len() > MAX_TEAM_SIZE {
            return Err(ArgumentError::InvalidTeamSize(roster.len()));
        }
        Ok(Side {
            team: roster.to_vec(),
            active: 0,
            needs_switch: false,
        })
    }

    pub fn active(&self) -> &PokemonInst {
        &self.team[self.active]
    }

    pub(crate) fn active_mut(&mut self) -> &mut PokemonInst {
        &mut self.team[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn team(&self) -> &[PokemonInst] {
        &self.team
    }

    pub fn team_size(&self) -> usize {
        self.team.len()
    }

    pub fn pokemon(&self, index: usize) -> Option<&PokemonInst> {
        self.team.get(index)
    }

    /// True once every team member has fainted; the battle is lost.
    pub fn is_wiped(&self) -> bool {
        self.team.iter().all(|p| p.is_fainted())
    }

    pub fn needs_switch(&self) -> bool {
        self.needs_switch
    }

    pub(crate) fn set_needs_switch(&mut self, value: bool) {
        self.needs_switch = value;
    }

    /// Make a team slot active. Index validation happens at queue time;
    /// switching also settles any replacement debt from a faint.
    pub(crate) fn switch_active(&mut self, index: usize) {
        self.active = index;
        self.needs_switch = false;
    }
}
