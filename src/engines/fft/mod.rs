//! Carr-Madan FFT pricing: characteristic functions, the damped-transform
//! kernel, and the DFT primitive.
//!
//! References: Carr and Madan (1999), Hull (11th ed.) Ch. 19 for the damping
//! and inversion forms.
//!
//! Numerical considerations: choose the damping factor, frequency spacing,
//! and transform size together — damping controls integrability of the call
//! transform, spacing trades frequency resolution against strike coverage,
//! and the size bounds both truncation error and cost.
//!
//! When to use: FFT pricing pays off when a whole strike slice is needed
//! under a characteristic-function model; use the closed form or the lattice
//! for a handful of strikes under log-normal dynamics.

mod fft_core;

pub mod carr_madan;
pub mod char_fn;

pub use carr_madan::{
    CarrMadanConfig, DEFAULT_ALPHA, DEFAULT_ETA, DEFAULT_GRID_SIZE, carr_madan_at_strikes,
    carr_madan_curve, interpolate_curve,
};
pub use char_fn::{CharacteristicFn, LogNormalCf, MertonJumpCf};
pub use fft_core::{dft_forward, dft_inverse};
