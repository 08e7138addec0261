pub mod mt19937;
pub mod mt19937_64;
