//! Mersenne Twister MT19937 engine (32-bit), after Matsumoto-Nishimura:
//!
//! https://en.wikipedia.org/wiki/Mersenne_Twister
//!
//! Two deliberate departures from the textbook engine, both load-bearing
//! for stream compatibility: the full twist pass runs once at
//! construction, and the buffer is regenerated when the cursor reaches
//! the recurrence offset M rather than N. The first M outputs match the
//! textbook stream for the same seed; later outputs do not.

pub const W: u32 = 32;
pub const N: usize = 624;
pub const M: usize = 397;

pub const A: u32 = 0x9908_b0df;

pub const U: u32 = 11;
pub const D: u32 = 0xffff_ffff;

pub const S: u32 = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: u32 = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: u32 = 18;

pub const F: u32 = 0x6c07_8965;

pub const LOWER_MASK: u32 = 0x7fff_ffff;
pub const UPPER_MASK: u32 = 0x8000_0000;

/// Canonical default seed
pub const DEFAULT_SEED: u32 = 5489;

/// MT19937 PRNG (32-bit)
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Create an initialized MT19937 PRNG
    ///
    /// Seeds the state array with the standard recurrence
    /// `xi = f * (xi-1 ^ (xi-1 >> (w-2))) + i`, then runs one full twist
    /// pass so the buffer is output-ready.
    pub fn new(seed: u32) -> Self {
        let mut state = [0_u32; N];
        state[0] = seed;

        for i in 1..N {
            state[i] = F
                .wrapping_mul(state[i - 1] ^ (state[i - 1] >> (W - 2)))
                .wrapping_add(i as u32);
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
    pub fn extract_number(&mut self) -> u32 {
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
    ///
    /// Each word combines its own upper bit with the next word's lower
    /// bits, xors with the word M places ahead (wrapping), and with A
    /// when the combined value is odd.
    fn generate(&mut self) {
        let mut bits: u32;

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
