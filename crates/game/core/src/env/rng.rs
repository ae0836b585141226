//! Seed-addressed randomness for wormhole jumps.
//!
//! A session picks its seed once, when the world is built. Every draw derives
//! its own seed from that session seed, the nonce of the action making the
//! draw and the [`Draw`] being made, so replaying a session's actions with the
//! same seed lands every wormhole jump on the same cell.

/// Independent random values an action may ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Draw {
    /// Destination column (x) of a wormhole jump.
    WormholeColumn,
    /// Destination row (y) of a wormhole jump.
    WormholeRow,
}

impl Draw {
    fn salt(self) -> u64 {
        match self {
            Draw::WormholeColumn => 0,
            Draw::WormholeRow => 1,
        }
    }
}

/// Source of random values, addressed by seed rather than by internal state.
///
/// Implementations must return the same value for the same seed.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Value in `0..bound`. Empty and single-value bounds yield 0.
    fn below(&self, seed: u64, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        self.next_u32(seed) % bound
    }
}

/// Default oracle: one PCG-XSH-RR step per seed.
///
/// <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        xorshifted.rotate_right((state >> 59) as u32)
    }
}

/// Seed for one draw of one action.
///
/// `nonce` counts executed actions, so two jumps from the same wormhole at
/// different points of a session land on different cells.
pub fn draw_seed(session_seed: u64, nonce: u64, draw: Draw) -> u64 {
    let mut hash = session_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= draw.salt().wrapping_mul(0x85ebca6b);

    // murmur3 finalizer
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
