//! Linear-congruential generator family
//!
//! Each driver advances a 64-bit state in place and derives a 32-bit
//! output from it. Constants are part of each algorithm's identity, not
//! tunable parameters; all arithmetic wraps at the state width.

/// Multiplicative congruential step with a variable-width output shift
///
/// The top three bits of the updated state select a shift between 22
/// and 29, the state keeps the shifted value, and its low 32 bits are
/// the output.
pub fn lcg_0(state: &mut u64) -> u32 {
    const A: u64 = 25214903917;
    const B: u64 = 11;

    *state = A.wrapping_mul(*state).wrapping_add(B);

    let shift = 29 - (*state >> 61) as u32;
    *state >>= shift;

    *state as u32
}

/// Lehmer's minimal standard generator, modulus `2^31 - 1`
pub fn minstd_rand(state: &mut u64) -> u32 {
    const A: u64 = 48271;
    const M: u64 = 0x7fff_ffff;

    *state = A.wrapping_mul(*state) % M;

    *state as u32
}

/// `java.util.Random`-style 48-bit congruential step
///
/// The updated state is masked with `a - 1` (the mask as written, not a
/// full 48-bit mask), and the low 32 bits are the output.
pub fn java_util_random(state: &mut u64) -> u32 {
    const A: u64 = 0x5_deec_e66d;
    const B: u64 = 11;

    *state = A.wrapping_mul(*state).wrapping_add(B);
    *state &= A - 1;

    *state as u32
}

/// Congruential step with xorshift-multiply mixing and a data-dependent
/// rotate, in the PCG style
///
/// The output derives from the pre-update state: xorshift by 18 and 27,
/// scramble with a fixed odd multiplier, fold to the upper word, then
/// rotate right by the pre-update state's top five bits. Using the old
/// state for both the mix and the rotation amount is part of the
/// contract; the new state only feeds the next call.
pub fn lcg_xor_rot(state: &mut u64) -> u32 {
    const A: u64 = 1144453172214656471;
    const B: u64 = 17;
    const MIX: u64 = 0x2545_f491_4f6c_dd1d;

    let t_state = *state;
    *state = A.wrapping_mul(*state).wrapping_add(B);

    let mut xorshifted = t_state;
    xorshifted ^= xorshifted >> 18;
    xorshifted ^= xorshifted >> 27;
    xorshifted = xorshifted.wrapping_mul(MIX) >> 32;

    let rot = (t_state >> 59) as u32;

    (xorshifted as u32).rotate_right(rot)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 0xdead_beef;

    #[test]
    fn check_lcg_0() {
        let mut state = SEED;
        let expected = [
            3664492233_u32,
            309383852,
            281094693,
            1687137912,
            3941211037,
            2606698237,
        ];

        for exp in expected.iter() {
            assert_eq!(lcg_0(&mut state), *exp);
        }
    }

    #[test]
    fn check_minstd_rand() {
        let mut state = SEED;
        let expected = [
            2068214664_u32,
            422780561,
            503362590,
            1185599732,
            1792954469,
            1966715352,
        ];

        for exp in expected.iter() {
            assert_eq!(minstd_rand(&mut state), *exp);
            // state never escapes the modulus
            assert!(state < 0x7fff_ffff);
        }
    }

    #[test]
    fn check_java_util_random() {
        let mut state = SEED;
        let expected = [
            247989324_u32,
            3691250788,
            214214156,
            2531811876,
            2588680268,
            3295412324,
        ];

        for exp in expected.iter() {
            assert_eq!(java_util_random(&mut state), *exp);
        }
    }

    #[test]
    fn check_lcg_xor_rot() {
        let mut state = SEED;
        let expected = [
            2380962238_u32,
            2999631658,
            3044150064,
            3333905749,
            1252003426,
            3464261842,
        ];

        for exp in expected.iter() {
            assert_eq!(lcg_xor_rot(&mut state), *exp);
        }
    }
}
