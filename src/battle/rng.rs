use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// All randomness the engine consumes, behind one seam.
///
/// A seeded source makes a whole battle reproducible from a single u64;
/// a scripted source replays a fixed list of percentile outcomes so tests
/// can force hits, misses, ties, and effect procs exactly.
#[derive(Debug, Clone)]
pub struct BattleRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Seeded(StdRng),
    Scripted { outcomes: Vec<u8>, next: usize },
}

impl BattleRng {
    /// A battle seeded from OS entropy.
    pub fn new() -> Self {
        BattleRng::seeded(rand::rng().random())
    }

    /// A fully reproducible battle: same seed, same rolls.
    pub fn seeded(seed: u64) -> Self {
        BattleRng {
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    /// Replay the given percentile outcomes in order. Each value must be
    /// in [0, 100); drawing past the end panics with the reason for the
    /// draw, so a test that under-provisions fails loudly.
    pub fn scripted(outcomes: Vec<u8>) -> Self {
        BattleRng {
            source: RngSource::Scripted { outcomes, next: 0 },
        }
    }

    /// Draw a percentile roll in [0, 100). The reason string names what
    /// the roll decides and appears in the panic message when a scripted
    /// source runs dry.
    pub fn percent(&mut self, reason: &str) -> u8 {
        match &mut self.source {
            RngSource::Seeded(rng) => rng.random_range(0..100),
            RngSource::Scripted { outcomes, next } => {
                let value = *outcomes.get(*next).unwrap_or_else(|| {
                    panic!(
                        "scripted rng exhausted after {} draws; needed a roll for: {}",
                        outcomes.len(),
                        reason
                    )
                });
                *next += 1;
                value
            }
        }
    }

    /// Even-odds flip, used to break exact speed ties.
    pub fn coin_flip(&mut self, reason: &str) -> bool {
        self.percent(reason) < 50
    }

    /// Damage variance multiplier in [0.85, 1.0), derived from one
    /// percentile roll so scripted tests can pin damage exactly.
    pub fn damage_variance(&mut self, reason: &str) -> f64 {
        0.85 + self.percent(reason) as f64 * 0.0015
    }
}

impl Default for BattleRng {
    fn default() -> Self {
        BattleRng::new()
    }
}
