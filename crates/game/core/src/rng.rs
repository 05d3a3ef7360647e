//! RNG oracle for the battle's chance rolls.
//!
//! Escape attempts and the rogue's critical strike are fair coin flips. Rolls
//! are derived from a battle seed so a battle can be replayed exactly, which
//! is also what makes battles testable.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Fair coin flip: `true` on heads.
    fn coin_flip(&self, seed: u64) -> bool {
        self.next_u32(seed) % 2 == 0
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. Same seed always produces the same output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Which chance roll within a round a seed is computed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollKind {
    Escape,
    CriticalStrike,
}

impl RollKind {
    const fn context(self) -> u64 {
        match self {
            Self::Escape => 0,
            Self::CriticalStrike => 1,
        }
    }
}

/// Compute a deterministic seed for one roll.
///
/// # Arguments
///
/// * `battle_seed` - Base seed chosen when the battle starts
/// * `round` - Current value of the battle's turn counter
/// * `kind` - Which roll of the round this is
pub fn compute_seed(battle_seed: u64, round: u32, kind: RollKind) -> u64 {
    let mut hash = battle_seed;

    hash ^= u64::from(round).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= kind.context().wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Chance rolls for one battle round.
///
/// Each roll kind is drawn from its own seed, so a round's escape roll and
/// critical strike roll are independent.
#[derive(Clone, Copy)]
pub struct RoundRoller<'a> {
    rng: &'a dyn RngOracle,
    battle_seed: u64,
    round: u32,
}

impl<'a> RoundRoller<'a> {
    pub fn new(rng: &'a dyn RngOracle, battle_seed: u64, round: u32) -> Self {
        Self {
            rng,
            battle_seed,
            round,
        }
    }

    pub fn coin_flip(&self, kind: RollKind) -> bool {
        self.rng
            .coin_flip(compute_seed(self.battle_seed, self.round, kind))
    }
}
