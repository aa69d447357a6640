//! Geometric Brownian motion path simulation and a terminal-payoff Monte
//! Carlo pricer.
//!
//! References: Glasserman (2004); Hull (11th ed.) Ch. 21 for the discretized
//! dynamics.
//!
//! Numerical considerations: the exact log-normal step is unbiased at any
//! step count; the Euler step carries discretization bias shrinking with
//! `dt`. Estimator error is sampling-driven and reported as a standard error.
//!
//! Random state is always explicit: path generation takes a caller-owned
//! `Rng`, and the engine derives per-path generators deterministically from
//! its seed, so identical seeds reproduce identical results with no hidden
//! global state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{ModelParams, OptionType, PricingError};

/// Geometric Brownian motion, `dS = mu S dt + sigma S dW`.
#[derive(Debug, Clone, Copy)]
pub struct Gbm {
    /// Drift coefficient (annualized).
    pub mu: f64,
    /// Volatility coefficient (annualized).
    pub sigma: f64,
}

impl Gbm {
    /// One step of the exact log-normal solution.
    #[inline]
    pub fn step_exact(&self, s: f64, dt: f64, z: f64) -> f64 {
        s * ((self.mu - 0.5 * self.sigma * self.sigma) * dt + self.sigma * dt.sqrt() * z).exp()
    }

    /// One Euler-Maruyama step.
    #[inline]
    pub fn step_euler(&self, s: f64, dt: f64, z: f64) -> f64 {
        s + self.mu * s * dt + self.sigma * s * dt.sqrt() * z
    }
}

/// Generates full GBM paths of `steps + 1` points starting at `s0`.
#[derive(Debug, Clone)]
pub struct GbmPathGenerator {
    /// Process dynamics.
    pub model: Gbm,
    /// Initial level.
    pub s0: f64,
    /// Horizon in year fractions.
    pub maturity: f64,
    /// Number of time steps.
    pub steps: usize,
}

impl GbmPathGenerator {
    /// Path from pre-drawn standard normals, exact log-normal scheme.
    pub fn path_from_normals(&self, normals: &[f64]) -> Vec<f64> {
        let dt = self.maturity / self.steps as f64;
        let mut path = Vec::with_capacity(self.steps + 1);
        let mut s = self.s0;
        path.push(s);
        for &z in normals.iter().take(self.steps) {
            s = self.model.step_exact(s, dt, z);
            path.push(s);
        }
        path
    }

    /// Path from pre-drawn standard normals, Euler-Maruyama scheme.
    ///
    /// Levels are floored just above zero; the Euler step can otherwise cross
    /// it for coarse `dt`.
    pub fn euler_path_from_normals(&self, normals: &[f64]) -> Vec<f64> {
        let dt = self.maturity / self.steps as f64;
        let mut path = Vec::with_capacity(self.steps + 1);
        let mut s = self.s0;
        path.push(s);
        for &z in normals.iter().take(self.steps) {
            s = self.model.step_euler(s, dt, z).max(1e-12);
            path.push(s);
        }
        path
    }

    /// Draws one exact-scheme path from a caller-owned generator.
    pub fn sample_path<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let normals: Vec<f64> = (0..self.steps).map(|_| rng.sample(StandardNormal)).collect();
        self.path_from_normals(&normals)
    }
}

/// Monte Carlo engine for terminal-payoff European pricing.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloEngine {
    /// Number of paths (antithetic pairs count as two).
    pub num_paths: usize,
    /// Pair each path with its sign-flipped twin.
    pub antithetic: bool,
    /// Seed from which per-path generators are derived.
    pub seed: u64,
}

impl MonteCarloEngine {
    /// Engine with antithetic sampling off.
    pub fn new(num_paths: usize, seed: u64) -> Self {
        Self {
            num_paths,
            antithetic: false,
            seed,
        }
    }

    /// Toggles antithetic sampling.
    pub fn with_antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Runs the simulation and returns `(price, stderr)`.
    pub fn run<P>(&self, generator: &GbmPathGenerator, payoff: P, discount_factor: f64) -> (f64, f64)
    where
        P: Fn(&[f64]) -> f64 + Send + Sync,
    {
        assert!(self.num_paths > 0, "num_paths must be > 0");

        let samples = if self.antithetic {
            self.num_paths.div_ceil(2)
        } else {
            self.num_paths
        };
        let steps = generator.steps;

        let simulate_sample = |i: usize| {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(i as u64 * 7_919));
            let normals: Vec<f64> = (0..steps).map(|_| rng.sample(StandardNormal)).collect();
            let value = payoff(&generator.path_from_normals(&normals));

            if self.antithetic {
                let mirrored: Vec<f64> = normals.iter().map(|z| -z).collect();
                let twin = payoff(&generator.path_from_normals(&mirrored));
                0.5 * (value + twin)
            } else {
                value
            }
        };

        #[cfg(feature = "parallel")]
        let values = (0..samples)
            .into_par_iter()
            .map(simulate_sample)
            .collect::<Vec<_>>();
        #[cfg(not(feature = "parallel"))]
        let values = (0..samples).map(simulate_sample).collect::<Vec<_>>();

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = if values.len() > 1 {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };

        (discount_factor * mean, discount_factor * (var / n).sqrt())
    }

    /// Prices a European vanilla under risk-neutral GBM dynamics.
    pub fn price_european(
        &self,
        params: &ModelParams,
        option_type: OptionType,
        strike: f64,
        steps: usize,
    ) -> Result<(f64, f64), PricingError> {
        params.validate()?;
        if !strike.is_finite() || strike <= 0.0 {
            return Err(PricingError::Configuration(
                "strike must be finite and > 0".to_string(),
            ));
        }
        if steps == 0 {
            return Err(PricingError::Configuration(
                "steps must be > 0".to_string(),
            ));
        }

        let generator = GbmPathGenerator {
            model: Gbm {
                mu: params.rate,
                sigma: params.vol,
            },
            s0: params.spot,
            maturity: params.maturity,
            steps,
        };
        let payoff = move |path: &[f64]| {
            let terminal = path[path.len() - 1];
            match option_type {
                OptionType::Call => (terminal - strike).max(0.0),
                OptionType::Put => (strike - terminal).max(0.0),
            }
        };

        Ok(self.run(&generator, payoff, params.discount_factor()))
    }
}
