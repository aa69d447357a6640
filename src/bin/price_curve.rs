//! Prices a full call-price curve with the Carr-Madan kernel and compares a
//! window around the money against the log-normal closed form.

use quantfft::core::{ModelParams, OptionType};
use quantfft::engines::analytic::bs_price;
use quantfft::engines::fft::{CarrMadanConfig, LogNormalCf, carr_madan_curve};

fn main() {
    let params = ModelParams::new(100.0, 0.05, 0.20, 5.0);
    let config = CarrMadanConfig::default();

    let cf = LogNormalCf::new(&params);
    let curve = carr_madan_curve(&cf, params.rate, params.maturity, config)
        .expect("example configuration is valid");

    println!(
        "Carr-Madan call curve  (S0 = {}, r = {}, sigma = {}, T = {})",
        params.spot, params.rate, params.vol, params.maturity
    );
    println!(
        "alpha = {}, eta = {}, N = {}, lambda = {:.6}",
        config.alpha,
        config.eta,
        config.n,
        config.lambda()
    );
    println!();
    println!("{:>10}  {:>12}  {:>12}  {:>10}", "strike", "fft", "closed", "abs diff");

    for (strike, price) in curve
        .iter()
        .filter(|(k, _)| (60.0..=160.0).contains(k))
        .step_by(16)
    {
        let closed = bs_price(OptionType::Call, &params, *strike);
        println!(
            "{strike:>10.4}  {price:>12.6}  {closed:>12.6}  {:>10.2e}",
            (price - closed).abs()
        );
    }
}
