#![no_std]

pub mod lcg;
pub mod mersenne;
pub mod sampler;
pub mod stats;
pub mod xorshift;
