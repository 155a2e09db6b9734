use tracing::debug;

use crate::models::Convergence;
use crate::planner::constants::MAX_ITERATIONS;

/// Outcome of a bounded fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPoint {
    /// Last value produced by the step function.
    pub value: f64,
    pub iterations: u32,
    pub converged: bool,
}

impl FixedPoint {
    pub fn convergence(&self) -> Convergence {
        if self.converged {
            Convergence::Converged {
                iterations: self.iterations,
            }
        } else {
            Convergence::Approximate {
                iterations: self.iterations,
            }
        }
    }
}

/// Iterate `value = step(value)` from `seed` until two successive values differ by
/// less than `tolerance`, or `max_iterations` rounds have run.
///
/// `max_iterations` is clamped to `1..=MAX_ITERATIONS`. On exhaustion the last
/// computed value is returned with `converged == false`.
pub fn solve_fixed_point<F>(
    seed: f64,
    mut step: F,
    tolerance: f64,
    max_iterations: u32,
) -> FixedPoint
where
    F: FnMut(f64) -> f64,
{
    let cap = max_iterations.clamp(1, MAX_ITERATIONS);
    let mut value = seed;

    for iteration in 1..=cap {
        let next = step(value);
        let delta = (next - value).abs();
        debug!(iteration, value = next, delta, "fixed-point step");

        value = next;
        if delta < tolerance {
            return FixedPoint {
                value,
                iterations: iteration,
                converged: true,
            };
        }
    }

    FixedPoint {
        value,
        iterations: cap,
        converged: false,
    }
}
