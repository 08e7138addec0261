//! Generic sampling wrapper over a generator driver
//!
//! Binds a piece of generator state to a driver function and derives
//! bounded, ranged, truncated, and unit-interval draws from the raw
//! output stream. Every derived draw advances the state through the
//! driver once per raw output consumed.

use num::traits::{AsPrimitive, PrimInt, Unsigned, WrappingAdd, WrappingNeg, WrappingSub};

use crate::lcg;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// Bounded draw over an empty range
    ZeroRange,
}

/// Sampler binding a generator state to a driver
///
/// The driver is any `FnMut(&mut S) -> O` over an unsigned primitive
/// output, so the scalar generators bind directly as fn pointers and
/// the Mersenne engines bind through an adapter closure.
pub struct Random<S, D> {
    state: S,
    driver: D,
}

impl<S, O, D> Random<S, D>
where
    O: PrimInt + Unsigned + WrappingAdd + WrappingNeg + WrappingSub + AsPrimitive<f64>,
    D: FnMut(&mut S) -> O,
{
    /// Bind an initial state to a driver
    pub fn new(state: S, driver: D) -> Self {
        Self {
            state: state,
            driver: driver,
        }
    }

    /// Current generator state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Replace the generator state, keeping the driver
    pub fn set_state(&mut self, state: S) {
        self.state = state;
    }

    /// Advance the state and produce the next raw output word
    pub fn generate(&mut self) -> O {
        (self.driver)(&mut self.state)
    }

    /// Uniform draw over `[0, 2^(m+1))`, keeping the top `m + 1` bits of
    /// the next raw output
    ///
    /// `m` must be less than the output width.
    pub fn rand2m(&mut self, m: u8) -> O {
        let width = core::mem::size_of::<O>() * 8;

        self.generate() >> (width - (m as usize + 1))
    }

    /// Unbiased uniform draw over `[0, range)` by rejection sampling
    ///
    /// The threshold is `2^W mod range`, computed as the wrapping
    /// negation of `range` reduced by `range`; raw outputs below it are
    /// discarded so the surviving values reduce without modulo bias.
    /// Expected iterations are constant (rejection probability is below
    /// one half for every range).
    pub fn bounded_rand(&mut self, range: O) -> Result<O, Error> {
        if range == O::zero() {
            return Err(Error::ZeroRange);
        }

        let threshold = range.wrapping_neg() % range;

        loop {
            let r = self.generate();
            if r >= threshold {
                return Ok(r % range);
            }
        }
    }

    /// Uniform draw over `[a, b)`
    ///
    /// The range width is computed with wrapping arithmetic, matching
    /// the unsigned wraparound of the underlying bounded draw.
    pub fn randrange(&mut self, a: O, b: O) -> Result<O, Error> {
        Ok(self.bounded_rand(b.wrapping_sub(&a))?.wrapping_add(&a))
    }

    /// Next raw output scaled to the unit interval
    ///
    /// With `interval` set to the output type's maximum the result lies
    /// in `[0, 1]`, the upper edge reachable only by the maximal draw.
    pub fn unit(&mut self, interval: O) -> f64 {
        let scale: f64 = interval.as_();

        self.generate().as_() / scale
    }
}

impl Random<u64, fn(&mut u64) -> u32> {
    /// Sampler over the default `lcg_xor_rot` driver
    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed, lcg::lcg_xor_rot)
    }
}

/// Draw a 64-bit sampler seed from the thread-local entropy source
pub fn entropy_seed() -> u64 {
    use rand::{thread_rng, Rng};

    thread_rng().gen()
}
