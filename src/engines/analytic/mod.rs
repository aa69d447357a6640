//! Closed-form reference pricers used as oracles for the transform engines.

pub mod black_scholes;
pub mod merton;

pub use black_scholes::bs_price;
pub use merton::merton_jump_price;
