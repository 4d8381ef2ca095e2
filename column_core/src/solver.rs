//! # Scalar Root Finding
//!
//! Two root finders for `f(x) = 0`, independent of the column model:
//!
//! - [`solve_bracketed`] - Brent–Dekker. Needs a sign change over
//!   `[low, high]` and then always converges, combining inverse quadratic
//!   interpolation, the secant step and bisection. Suited to the stepwise
//!   smooth force curves produced by cracking concrete and yielding steel.
//! - [`solve_from_guess`] - Newton–Raphson. Quadratic convergence when a
//!   derivative is available and the function is smooth near the root.
//!
//! Neither solver panics or returns `Err`: failures (no sign change, flat
//! derivative, iteration budget exhausted) come back as a [`SolverResult`]
//! with `converged == false`, a [`SolverStatus`] and a message, so the
//! caller decides whether a degraded answer is acceptable.
//!
//! ## Example
//!
//! ```rust
//! use column_core::solver::{solve_bracketed, SolverConfig};
//!
//! let config = SolverConfig::default();
//! let result = solve_bracketed(|x| x * x - 2.0, 0.0, 2.0, config.tolerance, config.max_iterations);
//!
//! assert!(result.converged);
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-7);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

/// Derivative magnitude below which a Newton step is refused
pub const FLAT_DERIVATIVE_THRESHOLD: f64 = 1e-9;

/// Tolerance and iteration budget for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Absolute tolerance on x (Brent) or on f(x) and the step (Newton)
    pub tolerance: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            tolerance: 1e-7,
            max_iterations: 100,
        }
    }
}

impl SolverConfig {
    /// Defaults for Newton–Raphson, which needs fewer iterations.
    pub fn newton() -> Self {
        SolverConfig {
            tolerance: 1e-7,
            max_iterations: 50,
        }
    }
}

/// Why a solve stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// Root found within tolerance
    Converged,
    /// f(low) and f(high) have the same sign; no iterations were run
    NotBracketed,
    /// Iteration budget exhausted; `root` is the best estimate
    MaxIterations,
    /// |f'(x)| fell below [`FLAT_DERIVATIVE_THRESHOLD`]
    FlatDerivative,
}

/// Outcome of a root-finding run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverResult {
    /// Root estimate (NaN when the interval was not bracketed)
    pub root: f64,
    /// f(root)
    pub value: f64,
    /// Iterations performed
    pub iterations: usize,
    /// True when the solve met its tolerance
    pub converged: bool,
    /// Machine-readable stop reason
    pub status: SolverStatus,
    /// Human-readable diagnostic
    pub message: String,
}

impl SolverResult {
    fn new(root: f64, value: f64, iterations: usize, status: SolverStatus) -> Self {
        let message = match status {
            SolverStatus::Converged => "Converged successfully.",
            SolverStatus::NotBracketed => {
                "Root must be bracketed: f(low) and f(high) must have opposite signs."
            }
            SolverStatus::MaxIterations => "Max iterations reached without convergence.",
            SolverStatus::FlatDerivative => "Derivative too close to zero (flat region).",
        };
        SolverResult {
            root,
            value,
            iterations,
            converged: status == SolverStatus::Converged,
            status,
            message: message.to_string(),
        }
    }
}

/// Brent–Dekker root finder on `[low, high]`.
///
/// Requires `f(low)` and `f(high)` of opposite sign (or one of them exactly
/// zero). Otherwise returns immediately with `root = NaN`, zero iterations
/// and [`SolverStatus::NotBracketed`].
///
/// Each step keeps `b` as the best estimate, `a` as the previous one and `c`
/// as the contrapoint with `f(b)·f(c) ≤ 0`. An interpolated step (inverse
/// quadratic with three distinct values, secant with two) is accepted only
/// if it lands inside the bracket and shrinks faster than half of the step
/// before last; otherwise the method bisects. The bracket therefore never
/// grows and the worst case is plain bisection.
///
/// Convergence: `|c − b|/2 ≤ 2·ε·|b| + tolerance/2`, or `f(b) == 0`.
pub fn solve_bracketed<F>(
    mut f: F,
    low: f64,
    high: f64,
    tolerance: f64,
    max_iterations: usize,
) -> SolverResult
where
    F: FnMut(f64) -> f64,
{
    let mut a = low;
    let mut b = high;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa * fb > 0.0 {
        debug!(
            "brent: interval [{}, {}] not bracketed (f = {}, {})",
            low, high, fa, fb
        );
        return SolverResult::new(f64::NAN, 0.0, 0, SolverStatus::NotBracketed);
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iteration in 1..=max_iterations {
        // Keep the root between b and c
        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }

        // b must be the point with the smallest residual
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tolerance;
        let xm = 0.5 * (c - b);

        if xm.abs() <= tol1 || fb == 0.0 {
            debug!("brent: converged to {} after {} iterations", b, iteration);
            return SolverResult::new(b, fb, iteration, SolverStatus::Converged);
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant
                (2.0 * xm * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };

            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();

            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;

        b += if d.abs() > tol1 {
            d
        } else if xm > 0.0 {
            tol1.abs()
        } else {
            -tol1.abs()
        };
        fb = f(b);
    }

    debug!(
        "brent: no convergence after {} iterations, best estimate {}",
        max_iterations, b
    );
    SolverResult::new(b, fb, max_iterations, SolverStatus::MaxIterations)
}

/// Newton–Raphson from an initial guess.
///
/// Stops successfully when `|f(x)| < tolerance` or the step size drops below
/// `tolerance`. Stops with [`SolverStatus::FlatDerivative`] when
/// `|f'(x)| < 1e-9`, leaving the choice of a bracketed fallback to the caller.
pub fn solve_from_guess<F, D>(
    mut f: F,
    mut derivative: D,
    guess: f64,
    tolerance: f64,
    max_iterations: usize,
) -> SolverResult
where
    F: FnMut(f64) -> f64,
    D: FnMut(f64) -> f64,
{
    let mut x = guess;

    for iteration in 1..=max_iterations {
        let fx = f(x);
        if fx.abs() < tolerance {
            return SolverResult::new(x, fx, iteration, SolverStatus::Converged);
        }

        let dfx = derivative(x);
        if dfx.abs() < FLAT_DERIVATIVE_THRESHOLD {
            debug!("newton: flat derivative {} at x = {}", dfx, x);
            return SolverResult::new(x, fx, iteration, SolverStatus::FlatDerivative);
        }

        let step = fx / dfx;
        x -= step;

        if step.abs() < tolerance {
            let value = f(x);
            return SolverResult::new(x, value, iteration, SolverStatus::Converged);
        }
    }

    let value = f(x);
    SolverResult::new(x, value, max_iterations, SolverStatus::MaxIterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    #[test]
    fn test_brent_sqrt2() {
        let result = solve_bracketed(|x| x * x - 2.0, 0.0, 2.0, 1e-10, 100);
        assert!(result.converged);
        assert_eq!(result.status, SolverStatus::Converged);
        assert!((result.root - SQRT_2).abs() < 1e-9);
        assert!(result.iterations < 100);
        assert!(result.value.abs() < 1e-8);
    }

    #[test]
    fn test_brent_not_bracketed_fails_fast() {
        let mut calls = 0;
        let result = solve_bracketed(
            |x| {
                calls += 1;
                x * x + 1.0
            },
            -1.0,
            2.0,
            1e-7,
            100,
        );
        assert!(!result.converged);
        assert_eq!(result.status, SolverStatus::NotBracketed);
        assert!(result.root.is_nan());
        assert_eq!(result.iterations, 0);
        assert_eq!(calls, 2);
        assert!(result.message.contains("bracketed"));
    }

    #[test]
    fn test_brent_root_at_endpoint() {
        let result = solve_bracketed(|x| x - 3.0, 3.0, 10.0, 1e-7, 100);
        assert!(result.converged);
        assert_eq!(result.root, 3.0);

        let result = solve_bracketed(|x| x - 10.0, 3.0, 10.0, 1e-7, 100);
        assert!(result.converged);
        assert_eq!(result.root, 10.0);
    }

    #[test]
    fn test_brent_reversed_interval() {
        let result = solve_bracketed(|x| x.cos() - x, 1.0, 0.0, 1e-12, 100);
        assert!(result.converged);
        assert!((result.root - 0.739_085_133_215_160_6).abs() < 1e-10);
    }

    #[test]
    fn test_brent_step_function_falls_back_to_bisection() {
        // Discontinuous sign change at x = 0.3
        let result = solve_bracketed(|x| if x < 0.3 { -1.0 } else { 1.0 }, 0.0, 1.0, 1e-9, 200);
        assert!(result.converged);
        assert!((result.root - 0.3).abs() < 1e-8);
    }

    #[test]
    fn test_brent_budget_exhausted() {
        let result = solve_bracketed(|x| x * x * x - 0.001, -5.0, 5.0, 1e-14, 3);
        assert!(!result.converged);
        assert_eq!(result.status, SolverStatus::MaxIterations);
        assert_eq!(result.iterations, 3);
        assert!(result.root.is_finite());
        assert!(result.root >= -5.0 && result.root <= 5.0);
    }

    #[test]
    fn test_newton_sqrt2() {
        let config = SolverConfig::newton();
        let result = solve_from_guess(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            1.0,
            config.tolerance,
            config.max_iterations,
        );
        assert!(result.converged);
        assert!((result.root - SQRT_2).abs() < 1e-7);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_newton_flat_derivative() {
        let result = solve_from_guess(|x| x * x + 1.0, |x| 2.0 * x, 0.0, 1e-7, 50);
        assert!(!result.converged);
        assert_eq!(result.status, SolverStatus::FlatDerivative);
        assert!(result.message.contains("Derivative"));
    }

    #[test]
    fn test_newton_max_iterations() {
        // No real root: iterates chaotically without converging
        let result = solve_from_guess(|x| x * x + 1.0, |x| 2.0 * x, 0.5, 1e-12, 5);
        assert!(!result.converged);
        assert_eq!(result.status, SolverStatus::MaxIterations);
        assert_eq!(result.iterations, 5);
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-7);
        assert_eq!(config.max_iterations, 100);
    }
}
