//! Lattice engines.

pub mod binomial;

pub use binomial::binomial_price;
