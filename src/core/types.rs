use crate::core::PricingError;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

/// Risk-neutral model parameter set shared by every engine.
///
/// Constructed once by the caller and read-only thereafter. `validate` is the
/// single place the domain preconditions (`spot > 0`, `vol >= 0`,
/// `maturity > 0`, finite `rate`) are enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    /// Spot price of the underlying, `S0 > 0`.
    pub spot: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Annualized volatility, `vol >= 0`.
    pub vol: f64,
    /// Time to maturity in year fractions, `maturity > 0`.
    pub maturity: f64,
}

impl ModelParams {
    /// Bundles the four parameters without validating them.
    pub fn new(spot: f64, rate: f64, vol: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            vol,
            maturity,
        }
    }

    /// Checks the domain preconditions.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricingError::Configuration(
                "spot must be finite and > 0".to_string(),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::Configuration("rate must be finite".to_string()));
        }
        if !self.vol.is_finite() || self.vol < 0.0 {
            return Err(PricingError::Configuration(
                "vol must be finite and >= 0".to_string(),
            ));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(PricingError::Configuration(
                "maturity must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Discount factor `e^{-r T}` to maturity.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Forward level `S0 e^{r T}` at maturity.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * (self.rate * self.maturity).exp()
    }
}
