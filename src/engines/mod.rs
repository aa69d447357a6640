//! Pricing engines: closed forms, the Carr-Madan FFT kernel, and a CRR lattice.

pub mod analytic;
pub mod fft;
pub mod tree;
