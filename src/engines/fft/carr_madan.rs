use std::f64::consts::PI;

use num_complex::Complex;

use super::char_fn::CharacteristicFn;
use super::fft_core::dft_forward;
use crate::core::PricingError;

/// Default transform size.
pub const DEFAULT_GRID_SIZE: usize = 4096;
/// Default damping factor.
pub const DEFAULT_ALPHA: f64 = 1.5;
/// Default frequency-grid spacing.
pub const DEFAULT_ETA: f64 = 0.25;

/// Carr-Madan transform configuration.
///
/// `alpha` must be chosen so the moment-generating function of the log-price
/// exists at `alpha + 1`; too large a value degrades the integrand, and the
/// kernel cannot detect that. `eta` trades frequency resolution against
/// strike coverage (the strike range is proportional to `1/eta`). `n` may be
/// any positive size; powers of two are fastest.
#[derive(Debug, Clone, Copy)]
pub struct CarrMadanConfig {
    /// Damping factor, `alpha > 0`.
    pub alpha: f64,
    /// Frequency-grid spacing, `eta > 0`.
    pub eta: f64,
    /// Transform size.
    pub n: usize,
}

impl Default for CarrMadanConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            eta: DEFAULT_ETA,
            n: DEFAULT_GRID_SIZE,
        }
    }
}

impl CarrMadanConfig {
    /// Builds a configuration from explicit numerics.
    pub fn new(alpha: f64, eta: f64, n: usize) -> Self {
        Self { alpha, eta, n }
    }

    /// Log-strike spacing implied by the transform setup, `2 pi / (N eta)`.
    pub fn lambda(self) -> f64 {
        2.0 * PI / (self.n as f64 * self.eta)
    }

    /// Checks the kernel preconditions.
    pub fn validate(self) -> Result<(), PricingError> {
        if self.n == 0 {
            return Err(PricingError::Configuration(
                "transform size must be > 0".to_string(),
            ));
        }
        if !self.eta.is_finite() || self.eta <= 0.0 {
            return Err(PricingError::Configuration(
                "eta must be finite and > 0".to_string(),
            ));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(PricingError::Configuration(
                "alpha must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Damped call-transform integrand at frequency `u`:
/// `psi(u) = e^{-rT} phi(u - i(alpha + 1)) / (alpha^2 + alpha - u^2 + i(2 alpha + 1) u)`.
#[inline]
fn damped_transform<C: CharacteristicFn>(
    cf: &C,
    u: f64,
    discount: f64,
    alpha: f64,
) -> Complex<f64> {
    let shifted = Complex::new(u, -(alpha + 1.0));
    let denom = Complex::new(alpha * alpha + alpha - u * u, (2.0 * alpha + 1.0) * u);
    discount * cf.evaluate(shifted) / denom
}

/// Composite Simpson weight for grid index `k`:
/// `1/3, 4/3, 2/3, 4/3, ...` per Carr and Madan (1999), Eq. (24).
#[inline]
fn simpson_weight(k: usize) -> f64 {
    let parity = if k % 2 == 0 { -1.0 } else { 1.0 };
    let head = if k == 0 { 1.0 } else { 0.0 };
    (3.0 + parity - head) / 3.0
}

/// Prices a full strike slice by Carr-Madan FFT inversion in `O(N log N)`.
///
/// Returns `n` `(strike, call_price)` pairs with strictly increasing strikes
/// on the log-strike grid `b_k = lambda k - pi/eta`. The inverted real part
/// is emitted unclamped: non-finite or negative values from a pathological
/// setup are the caller's to inspect.
pub fn carr_madan_curve<C: CharacteristicFn>(
    cf: &C,
    rate: f64,
    maturity: f64,
    config: CarrMadanConfig,
) -> Result<Vec<(f64, f64)>, PricingError> {
    config.validate()?;
    if !maturity.is_finite() || maturity <= 0.0 {
        return Err(PricingError::Configuration(
            "maturity must be finite and > 0".to_string(),
        ));
    }

    let lambda = config.lambda();
    let a = PI / config.eta;
    let discount = (-rate * maturity).exp();

    let mut buf = vec![Complex::new(0.0, 0.0); config.n];
    for (k, x) in buf.iter_mut().enumerate() {
        let u = config.eta * k as f64;
        let psi = damped_transform(cf, u, discount, config.alpha);
        // e^{-i a u_k} with a = pi/eta reduces to the alternating sign (-1)^k.
        let phase = Complex::new(0.0, -a * u).exp();
        *x = psi * phase * (simpson_weight(k) * config.eta);
    }

    dft_forward(&mut buf);

    let mut curve = Vec::with_capacity(config.n);
    for (k, z) in buf.into_iter().enumerate() {
        let b = lambda * k as f64 - a;
        let price = (-config.alpha * b).exp() / PI * z.re;
        curve.push((b.exp(), price));
    }

    Ok(curve)
}

/// Interpolates call prices from a sorted strike slice, linear in log-strike,
/// flat beyond the grid ends.
pub fn interpolate_curve(curve: &[(f64, f64)], strikes: &[f64]) -> Vec<(f64, f64)> {
    if curve.is_empty() {
        return strikes.iter().map(|&k| (k, 0.0)).collect();
    }
    let (first_k, first_p) = curve[0];
    let (last_k, last_p) = curve[curve.len() - 1];

    strikes
        .iter()
        .map(|&k| {
            if k <= first_k {
                return (k, first_p);
            }
            if k >= last_k {
                return (k, last_p);
            }
            let hi = curve.partition_point(|&(grid_k, _)| grid_k < k);
            let (k0, p0) = curve[hi - 1];
            let (k1, p1) = curve[hi];
            let w = (k.ln() - k0.ln()) / (k1.ln() - k0.ln());
            (k, p0 + w * (p1 - p0))
        })
        .collect()
}

/// Prices at caller-supplied strikes by interpolating the FFT strike slice.
pub fn carr_madan_at_strikes<C: CharacteristicFn>(
    cf: &C,
    rate: f64,
    maturity: f64,
    strikes: &[f64],
    config: CarrMadanConfig,
) -> Result<Vec<(f64, f64)>, PricingError> {
    let curve = carr_madan_curve(cf, rate, maturity, config)?;
    Ok(interpolate_curve(&curve, strikes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ModelParams;
    use crate::engines::fft::LogNormalCf;

    #[test]
    fn simpson_weights_follow_the_composite_rule() {
        assert!((simpson_weight(0) - 1.0 / 3.0).abs() < 1e-15);
        assert!((simpson_weight(1) - 4.0 / 3.0).abs() < 1e-15);
        assert!((simpson_weight(2) - 2.0 / 3.0).abs() < 1e-15);
        assert!((simpson_weight(3) - 4.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn curve_is_sorted_in_strike() {
        let params = ModelParams::new(100.0, 0.02, 0.2, 1.0);
        let cf = LogNormalCf::new(&params);
        let curve = carr_madan_curve(&cf, 0.02, 1.0, CarrMadanConfig::default()).unwrap();
        assert_eq!(curve.len(), DEFAULT_GRID_SIZE);
        assert!(curve.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn interpolation_respects_endpoints() {
        let grid = vec![(90.0, 12.0), (100.0, 7.0), (110.0, 4.0)];
        let px = interpolate_curve(&grid, &[80.0, 95.0, 120.0]);
        assert_eq!(px[0].1, 12.0);
        assert_eq!(px[2].1, 4.0);
        assert!(px[1].1 < 12.0 && px[1].1 > 7.0);
    }

    #[test]
    fn invalid_configuration_is_rejected_up_front() {
        let params = ModelParams::new(100.0, 0.05, 0.2, 1.0);
        let cf = LogNormalCf::new(&params);

        let zero_eta = CarrMadanConfig::new(1.5, 0.0, 64);
        assert!(carr_madan_curve(&cf, 0.05, 1.0, zero_eta).is_err());

        let zero_alpha = CarrMadanConfig::new(0.0, 0.25, 64);
        assert!(carr_madan_curve(&cf, 0.05, 1.0, zero_alpha).is_err());

        let empty = CarrMadanConfig::new(1.5, 0.25, 0);
        assert!(carr_madan_curve(&cf, 0.05, 1.0, empty).is_err());

        let ok = CarrMadanConfig::new(1.5, 0.25, 64);
        assert!(carr_madan_curve(&cf, 0.05, 0.0, ok).is_err());
    }
}
