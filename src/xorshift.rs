//! Xorshift generator family
//!
//! Marsaglia-style shift-register generators. The scalar variants return
//! the raw state (except `xorshift64s`, which scrambles it first); xorwow
//! carries a five-word state struct instead of a single integer.

/// Increment added to the xorwow counter on every draw
pub const COUNTER_INCREMENT: u32 = 362437;

/// 32-bit xorshift, shift triple 13/17/5
pub fn xorshift32(state: &mut u32) -> u32 {
    *state ^= *state << 13;
    *state ^= *state >> 17;
    *state ^= *state << 5;

    *state
}

/// 64-bit xorshift, shift triple 13/7/17
pub fn xorshift64(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;

    *state
}

/// xorshift64*, shift triple 12/25/27 with a final multiply
///
/// The output is the scrambled state, not the raw state; the multiplier
/// never feeds back into the shift register.
pub fn xorshift64s(state: &mut u64) -> u64 {
    const MIX: u64 = 0x2545_f491_4f6c_dd1d;

    *state ^= *state >> 12;
    *state ^= *state << 25;
    *state ^= *state >> 27;

    state.wrapping_mul(MIX)
}

/// xorwow state: four shift-register words plus a Weyl-style counter
///
/// The registers must not all be zero. The counter advances by
/// `COUNTER_INCREMENT` on every draw, independent of the registers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xorwow {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub w: u32,
    pub counter: u32,
}

impl Xorwow {
    /// Build a state from four register words, counter at zero
    pub fn new(x: u32, y: u32, z: u32, w: u32) -> Self {
        Self {
            x,
            y,
            z,
            w,
            counter: 0,
        }
    }
}

/// xorwow step: rotate the registers, xorshift the evicted word, and add
/// the advanced counter to the result
pub fn xorwow(state: &mut Xorwow) -> u32 {
    let mut t = state.w;
    let s = state.x;

    state.w = state.z;
    state.z = state.y;
    state.y = s;

    t ^= t >> 2;
    t ^= t << 1;
    t ^= s ^ (s << 4);
    state.x = t;

    state.counter = state.counter.wrapping_add(COUNTER_INCREMENT);

    t.wrapping_add(state.counter)
}
