use crate::core::{ModelParams, OptionType};
use crate::math::normal_cdf;

#[inline]
fn intrinsic(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

#[inline]
fn d1_d2(spot: f64, strike: f64, rate: f64, vol: f64, maturity: f64) -> (f64, f64) {
    let sig_sqrt_t = vol * maturity.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * maturity) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Closed-form log-normal (Black-Scholes) European option price.
///
/// Degenerate domains fall back to deterministic payoffs: `maturity <= 0`
/// prices intrinsic value, `vol <= 0` prices the discounted forward payoff
/// `e^{-rT} max(+/-(S0 e^{rT} - K), 0)`.
pub fn bs_price(option_type: OptionType, params: &ModelParams, strike: f64) -> f64 {
    if params.maturity <= 0.0 {
        return intrinsic(option_type, params.spot, strike);
    }
    let df = params.discount_factor();
    if params.vol <= 0.0 {
        return df * intrinsic(option_type, params.forward(), strike);
    }

    let (d1, d2) = d1_d2(
        params.spot,
        strike,
        params.rate,
        params.vol,
        params.maturity,
    );
    match option_type {
        OptionType::Call => params.spot * normal_cdf(d1) - strike * df * normal_cdf(d2),
        OptionType::Put => strike * df * normal_cdf(-d2) - params.spot * normal_cdf(-d1),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn atm_call_and_put_reference_values() {
        let params = ModelParams::new(100.0, 0.05, 0.2, 1.0);
        let call = bs_price(OptionType::Call, &params, 100.0);
        let put = bs_price(OptionType::Put, &params, 100.0);
        // Hull (11th ed.) Ch. 15 worked example values.
        assert_relative_eq!(call, 10.450_584, epsilon = 1e-4);
        assert_relative_eq!(put, 5.573_526, epsilon = 1e-4);
    }

    #[test]
    fn put_call_parity_holds() {
        let params = ModelParams::new(100.0, 0.05, 0.2, 1.0);
        for strike in [80.0, 100.0, 125.0] {
            let call = bs_price(OptionType::Call, &params, strike);
            let put = bs_price(OptionType::Put, &params, strike);
            let parity = params.spot - strike * params.discount_factor();
            assert_relative_eq!(call - put, parity, epsilon = 1e-10);
        }
    }

    #[test]
    fn zero_vol_prices_the_discounted_forward_payoff() {
        let params = ModelParams::new(100.0, 0.05, 0.0, 1.0);
        let call = bs_price(OptionType::Call, &params, 90.0);
        let expected = params.discount_factor() * (params.forward() - 90.0);
        assert_relative_eq!(call, expected, epsilon = 1e-12);
        assert_eq!(bs_price(OptionType::Call, &params, 120.0), 0.0);
    }

    #[test]
    fn expired_option_is_intrinsic() {
        let params = ModelParams::new(100.0, 0.05, 0.2, 0.0);
        assert_eq!(bs_price(OptionType::Call, &params, 90.0), 10.0);
        assert_eq!(bs_price(OptionType::Put, &params, 90.0), 0.0);
    }
}
