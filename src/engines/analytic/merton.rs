use crate::core::{ModelParams, OptionType, PricingError};
use crate::engines::analytic::black_scholes::bs_price;

// Poisson tail mass beyond this many terms is far below pricing tolerance for
// realistic intensities (lambda' T of a few at most).
const MAX_TERMS: usize = 80;

/// Merton (1976) jump-diffusion European price via the Poisson-mixture series.
///
/// Conditioning on `n` jumps reduces each term to a log-normal price with
/// `sigma_n^2 = sigma^2 + n sigma_J^2 / T` and
/// `r_n = r - lambda kappa_bar + n (mu_J + sigma_J^2 / 2) / T`, weighted by a
/// Poisson distribution of intensity `lambda' = lambda (1 + kappa_bar)`.
/// Serves as the independent oracle for the jump-diffusion FFT path.
pub fn merton_jump_price(
    option_type: OptionType,
    params: &ModelParams,
    strike: f64,
    jump_intensity: f64,
    jump_mean: f64,
    jump_vol: f64,
) -> Result<f64, PricingError> {
    params.validate()?;
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::Configuration(
            "strike must be finite and > 0".to_string(),
        ));
    }
    if !jump_intensity.is_finite() || jump_intensity < 0.0 {
        return Err(PricingError::Configuration(
            "jump intensity must be finite and >= 0".to_string(),
        ));
    }
    if !jump_mean.is_finite() || !jump_vol.is_finite() || jump_vol < 0.0 {
        return Err(PricingError::Configuration(
            "jump moments must be finite with jump vol >= 0".to_string(),
        ));
    }

    if jump_intensity == 0.0 {
        return Ok(bs_price(option_type, params, strike));
    }

    let half_jump_var = 0.5 * jump_vol * jump_vol;
    let kappa_bar = (jump_mean + half_jump_var).exp() - 1.0;
    let adjusted_intensity = jump_intensity * (1.0 + kappa_bar);
    let mean_jumps = adjusted_intensity * params.maturity;

    let mut price = 0.0;
    let mut weight = (-mean_jumps).exp();
    for n in 0..MAX_TERMS {
        if n > 0 {
            weight *= mean_jumps / n as f64;
        }

        let n_f = n as f64;
        let vol_n =
            (params.vol * params.vol + n_f * jump_vol * jump_vol / params.maturity).sqrt();
        let rate_n = params.rate - jump_intensity * kappa_bar
            + n_f * (jump_mean + half_jump_var) / params.maturity;
        let conditional = ModelParams::new(params.spot, rate_n, vol_n, params.maturity);
        price += weight * bs_price(option_type, &conditional, strike);

        if weight < 1e-16 && n_f > mean_jumps {
            break;
        }
    }

    Ok(price)
}
