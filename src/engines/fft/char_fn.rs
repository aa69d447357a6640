use num_complex::Complex;

use crate::core::{ModelParams, PricingError};

/// Characteristic function of the log-price at maturity,
/// `phi(u) = E[e^{i u ln S_T}]` under the risk-neutral measure.
///
/// Implementations are bound to fixed model parameters at construction and
/// must be evaluable at complex `u`: the pricing kernel calls `evaluate` at
/// `u - i (alpha + 1)`, so the moment-generating function has to exist along
/// the damping strip. Pathological parameter sets may yield non-finite
/// values; those are returned as-is.
pub trait CharacteristicFn {
    /// Evaluates `phi(u)` at a complex frequency argument.
    fn evaluate(&self, u: Complex<f64>) -> Complex<f64>;
}

/// Risk-neutral log-normal (Black-Scholes) characteristic function.
///
/// `ln S_T ~ N(ln S0 + (r - sigma^2/2) T, sigma^2 T)`, so
/// `phi(u) = exp(i u (ln S0 + (r - sigma^2/2) T) - sigma^2 u^2 T / 2)`.
/// The Ito drift correction keeps the discounted spot a martingale,
/// which put-call parity of the resulting prices relies on.
#[derive(Debug, Clone, Copy)]
pub struct LogNormalCf {
    ln_spot: f64,
    rate: f64,
    vol: f64,
    maturity: f64,
}

impl LogNormalCf {
    /// Binds the characteristic function to a parameter set.
    pub fn new(params: &ModelParams) -> Self {
        Self {
            ln_spot: params.spot.ln(),
            rate: params.rate,
            vol: params.vol,
            maturity: params.maturity,
        }
    }
}

impl CharacteristicFn for LogNormalCf {
    fn evaluate(&self, u: Complex<f64>) -> Complex<f64> {
        let i = Complex::new(0.0, 1.0);
        let var = self.vol * self.vol;
        let drift = self.ln_spot + (self.rate - 0.5 * var) * self.maturity;
        (i * u * drift - 0.5 * var * u * u * self.maturity).exp()
    }
}

/// Merton jump-diffusion characteristic function.
///
/// Log-normal diffusion plus compound-Poisson log-normal jumps with intensity
/// `jump_intensity`, log-jump mean `jump_mean`, and log-jump volatility
/// `jump_vol`. The drift carries the compensator `-lambda * kappa_bar`,
/// `kappa_bar = e^{mu_J + sigma_J^2 / 2} - 1`, so the discounted spot stays a
/// martingale.
#[derive(Debug, Clone, Copy)]
pub struct MertonJumpCf {
    ln_spot: f64,
    rate: f64,
    vol: f64,
    maturity: f64,
    jump_intensity: f64,
    jump_mean: f64,
    jump_vol: f64,
}

impl MertonJumpCf {
    /// Binds the characteristic function to a parameter set plus jump inputs.
    pub fn new(
        params: &ModelParams,
        jump_intensity: f64,
        jump_mean: f64,
        jump_vol: f64,
    ) -> Result<Self, PricingError> {
        if !jump_intensity.is_finite() || jump_intensity < 0.0 {
            return Err(PricingError::Configuration(
                "jump intensity must be finite and >= 0".to_string(),
            ));
        }
        if !jump_mean.is_finite() {
            return Err(PricingError::Configuration(
                "jump mean must be finite".to_string(),
            ));
        }
        if !jump_vol.is_finite() || jump_vol < 0.0 {
            return Err(PricingError::Configuration(
                "jump vol must be finite and >= 0".to_string(),
            ));
        }
        Ok(Self {
            ln_spot: params.spot.ln(),
            rate: params.rate,
            vol: params.vol,
            maturity: params.maturity,
            jump_intensity,
            jump_mean,
            jump_vol,
        })
    }

    /// Expected relative jump size `kappa_bar = E[e^J] - 1`.
    pub fn compensator(&self) -> f64 {
        (self.jump_mean + 0.5 * self.jump_vol * self.jump_vol).exp() - 1.0
    }
}

impl CharacteristicFn for MertonJumpCf {
    fn evaluate(&self, u: Complex<f64>) -> Complex<f64> {
        let i = Complex::new(0.0, 1.0);
        let var = self.vol * self.vol;
        let drift = self.ln_spot
            + (self.rate - 0.5 * var - self.jump_intensity * self.compensator()) * self.maturity;
        let diffusion = i * u * drift - 0.5 * var * u * u * self.maturity;
        let jump_var = self.jump_vol * self.jump_vol;
        let jump_cf = (i * u * self.jump_mean - 0.5 * jump_var * u * u).exp() - 1.0;
        (diffusion + self.jump_intensity * self.maturity * jump_cf).exp()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn params() -> ModelParams {
        ModelParams::new(100.0, 0.05, 0.2, 1.0)
    }

    #[test]
    fn lognormal_cf_is_one_at_zero() {
        let cf = LogNormalCf::new(&params());
        let one = cf.evaluate(Complex::new(0.0, 0.0));
        assert_relative_eq!(one.re, 1.0, epsilon = 1e-12);
        assert!(one.im.abs() < 1e-12);
    }

    #[test]
    fn lognormal_cf_prices_the_forward() {
        // phi(-i) = E[S_T] = S0 e^{rT} under the martingale drift.
        let p = params();
        let cf = LogNormalCf::new(&p);
        let fwd = cf.evaluate(Complex::new(0.0, -1.0));
        assert_relative_eq!(fwd.re, p.forward(), epsilon = 1e-9);
        assert!(fwd.im.abs() < 1e-9);
    }

    #[test]
    fn merton_cf_is_one_at_zero_and_prices_the_forward() {
        let p = params();
        let cf = MertonJumpCf::new(&p, 0.3, -0.1, 0.15).unwrap();
        let one = cf.evaluate(Complex::new(0.0, 0.0));
        assert_relative_eq!(one.re, 1.0, epsilon = 1e-12);

        let fwd = cf.evaluate(Complex::new(0.0, -1.0));
        assert_relative_eq!(fwd.re, p.forward(), epsilon = 1e-8);
    }

    #[test]
    fn merton_without_jumps_collapses_to_lognormal() {
        let p = params();
        let merton = MertonJumpCf::new(&p, 0.0, -0.1, 0.15).unwrap();
        let lognormal = LogNormalCf::new(&p);
        for k in 0..20 {
            let u = Complex::new(0.5 * k as f64, -2.5);
            let diff = merton.evaluate(u) - lognormal.evaluate(u);
            assert!(diff.norm() < 1e-12);
        }
    }

    #[test]
    fn merton_constructor_rejects_bad_jump_inputs() {
        let p = params();
        assert!(MertonJumpCf::new(&p, -0.1, 0.0, 0.1).is_err());
        assert!(MertonJumpCf::new(&p, 0.1, f64::NAN, 0.1).is_err());
        assert!(MertonJumpCf::new(&p, 0.1, 0.0, -0.1).is_err());
    }
}
