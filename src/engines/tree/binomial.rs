//! Cox-Ross-Rubinstein binomial lattice for European vanillas.
//!
//! References: Cox, Ross, and Rubinstein (1979); Hull (11th ed.) Ch. 13 for
//! the backward-induction recursion.
//!
//! Numerical considerations: convergence in step count oscillates around the
//! closed form at first- to second-order; deep ITM/OTM strikes want more
//! depth.
//!
//! When to use: the lattice is the cross-check and intuition tool here — the
//! closed form is exact for these payoffs and the FFT kernel covers whole
//! strike slices.

use crate::core::{ModelParams, OptionType, PricingError};

#[inline]
fn intrinsic(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

/// Prices a European vanilla on a CRR lattice with `steps` time steps.
pub fn binomial_price(
    option_type: OptionType,
    params: &ModelParams,
    strike: f64,
    steps: usize,
) -> Result<f64, PricingError> {
    params.validate()?;
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::Configuration(
            "strike must be finite and > 0".to_string(),
        ));
    }
    if steps == 0 {
        return Err(PricingError::Configuration(
            "lattice steps must be > 0".to_string(),
        ));
    }
    if params.vol <= 0.0 {
        return Err(PricingError::Configuration(
            "lattice requires vol > 0".to_string(),
        ));
    }

    let dt = params.maturity / steps as f64;
    let up = (params.vol * dt.sqrt()).exp();
    let down = 1.0 / up;
    let growth = (params.rate * dt).exp();
    let p = (growth - down) / (up - down);
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(PricingError::Numerical(
            "risk-neutral probability is outside [0, 1]".to_string(),
        ));
    }

    let disc = (-params.rate * dt).exp();
    let disc_p = disc * p;
    let disc_1mp = disc * (1.0 - p);

    // Terminal nodes via the multiplicative recurrence
    // spot * u^j * d^(steps - j) = spot * d^steps * (u/d)^j.
    let ratio = up / down;
    let mut values = vec![0.0_f64; steps + 1];
    let mut node = params.spot * down.powi(steps as i32);
    for value in values.iter_mut() {
        *value = intrinsic(option_type, node, strike);
        node *= ratio;
    }

    for step in (0..steps).rev() {
        for j in 0..=step {
            values[j] = disc_p * values[j + 1] + disc_1mp * values[j];
        }
    }

    Ok(values[0])
}
