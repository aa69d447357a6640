use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

#[derive(Clone)]
struct DftPlan {
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

// Plans are cached per size for the lifetime of the process; scratch buffers
// are reused per thread so repeated transforms of the same size allocate once.
static PLAN_CACHE: OnceLock<Mutex<HashMap<usize, DftPlan>>> = OnceLock::new();

thread_local! {
    static SCRATCH: RefCell<HashMap<(usize, bool), Vec<Complex<f64>>>> =
        RefCell::new(HashMap::new());
}

fn plan_for(n: usize) -> DftPlan {
    let cache = PLAN_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock().expect("DFT plan cache lock poisoned");
    if let Some(plan) = guard.get(&n) {
        return plan.clone();
    }

    let mut planner = FftPlanner::<f64>::new();
    let plan = DftPlan {
        forward: planner.plan_fft_forward(n),
        inverse: planner.plan_fft_inverse(n),
    };
    guard.insert(n, plan.clone());
    plan
}

fn transform(values: &mut [Complex<f64>], inverse: bool) {
    let n = values.len();
    if n == 0 {
        return;
    }

    let plan = plan_for(n);
    let fft = if inverse {
        &plan.inverse
    } else {
        &plan.forward
    };
    let scratch_len = fft.get_inplace_scratch_len();

    SCRATCH.with(|cache| {
        let mut cache = cache.borrow_mut();
        let scratch = cache.entry((n, inverse)).or_default();
        if scratch.len() < scratch_len {
            scratch.resize(scratch_len, Complex::new(0.0, 0.0));
        }
        fft.process_with_scratch(values, &mut scratch[..scratch_len]);
    });

    if inverse {
        let inv_n = 1.0 / n as f64;
        for x in values {
            *x *= inv_n;
        }
    }
}

/// In-place forward DFT, `X_k = sum_j x_j e^{-2 pi i j k / N}`.
///
/// Any length is accepted; power-of-two sizes take the fastest code path.
pub fn dft_forward(values: &mut [Complex<f64>]) {
    transform(values, false);
}

/// In-place inverse DFT, normalized by `1/N`.
pub fn dft_inverse(values: &mut [Complex<f64>]) {
    transform(values, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_then_inverse_is_identity() {
        let original = vec![
            Complex::new(1.0, 0.0),
            Complex::new(-2.0, 0.5),
            Complex::new(3.0, -1.5),
            Complex::new(0.2, 0.1),
            Complex::new(-0.7, 0.0),
            Complex::new(0.3, -0.9),
            Complex::new(0.0, 0.0),
            Complex::new(2.5, 1.1),
        ];

        let mut transformed = original.clone();
        dft_forward(&mut transformed);
        dft_inverse(&mut transformed);

        for (lhs, rhs) in transformed.iter().zip(original.iter()) {
            assert!((*lhs - *rhs).norm() < 1e-10);
        }
    }

    #[test]
    fn impulse_transforms_to_flat_spectrum() {
        let mut values = vec![Complex::new(0.0, 0.0); 16];
        values[0] = Complex::new(1.0, 0.0);
        dft_forward(&mut values);
        for z in &values {
            assert!((z - Complex::new(1.0, 0.0)).norm() < 1e-12);
        }
    }

    #[test]
    fn non_power_of_two_length_round_trips() {
        let original: Vec<Complex<f64>> = (0..12)
            .map(|j| Complex::new(j as f64 * 0.25 - 1.0, (j % 3) as f64))
            .collect();

        let mut transformed = original.clone();
        dft_forward(&mut transformed);
        dft_inverse(&mut transformed);

        for (lhs, rhs) in transformed.iter().zip(original.iter()) {
            assert!((*lhs - *rhs).norm() < 1e-10);
        }
    }
}
