//! Mersenne Twister MT19937 engine (64-bit), after Matsumoto-Nishimura:
//!
//! https://en.wikipedia.org/wiki/Mersenne_Twister
//!
//! Carries the same two stream-compatibility departures as the 32-bit
//! engine (twist at construction, regeneration at M), and one more: the
//! upper/lower masks split the word at bit 63 instead of the textbook
//! MT19937-64 split at bit 31, so this stream differs from the textbook
//! stream from the first output.

pub const W: u32 = 64;
pub const N: usize = 312;
pub const M: usize = 156;

pub const A: u64 = 0xb502_6f5a_a966_19e9;

pub const U: u32 = 29;
pub const D: u64 = 0x5555_5555_5555_5555;

pub const S: u32 = 17;
pub const B: u64 = 0x71d6_7fff_eda6_0000;

pub const T: u32 = 37;
pub const C: u64 = 0xfff7_eee0_0000_0000;

pub const L: u32 = 43;

pub const F: u64 = 0x5851_f42d_4c95_7f2d;

pub const LOWER_MASK: u64 = 0x7fff_ffff_ffff_ffff;
pub const UPPER_MASK: u64 = 0x8000_0000_0000_0000;

/// Canonical default seed
pub const DEFAULT_SEED: u64 = 5489;

/// MT19937 PRNG (64-bit)
pub struct Mt19937 {
    state: [u64; N],
    index: usize,
}

impl Mt19937 {
    /// Create an initialized MT19937 PRNG
    ///
    /// Seeds the state array with the standard recurrence
    /// `xi = f * (xi-1 ^ (xi-1 >> (w-2))) + i`, then runs one full twist
    /// pass so the buffer is output-ready.
    pub fn new(seed: u64) -> Self {
        let mut state = [0_u64; N];
        state[0] = seed;

        for i in 1..N {
            state[i] = F
                .wrapping_mul(state[i - 1] ^ (state[i - 1] >> (W - 2)))
                .wrapping_add(i as u64);
        }

        let mut rng = Self {
            state: state,
            index: 0,
        };
        rng.generate();

        rng
    }

    /// Extract the tempered word under the cursor
    ///
    /// Regenerates the whole buffer once the cursor reaches M, so only
    /// the first M words of each twist pass are ever consumed.
    pub fn extract_number(&mut self) -> u64 {
        if self.index >= M {
            self.generate();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        y ^= (y >> U) & D;
        y ^= (y << S) & B;
        y ^= (y << T) & C;

        y ^ (y >> L)
    }

    /// Recompute the full state array via the twist recurrence
    fn generate(&mut self) {
        let mut bits: u64;

        for i in 0..(N - M) {
            bits = (self.state[i] & UPPER_MASK) | (self.state[i + 1] & LOWER_MASK);
            self.state[i] = self.state[i + M] ^ (bits >> 1) ^ ((bits & 1) * A);
        }
        for i in (N - M)..(N - 1) {
            bits = (self.state[i] & UPPER_MASK) | (self.state[i + 1] & LOWER_MASK);
            self.state[i] = self.state[i - (N - M)] ^ (bits >> 1) ^ ((bits & 1) * A);
        }
        bits = (self.state[N - 1] & UPPER_MASK) | (self.state[0] & LOWER_MASK);
        self.state[N - 1] = self.state[M - 1] ^ (bits >> 1) ^ ((bits & 1) * A);

        self.index = 0;
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
