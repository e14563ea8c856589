use crate::TsError;

/// Floating point type used for times, costs and vector entries.
pub type Real = f64;

/// Comparison slack for times and cost values.
///
/// Horizon times are seconds, typically of order 1 to 100, so an absolute
/// nanosecond floor covers values near zero and the relative part covers
/// large costs. Switching times are never compared with tolerances; a switch
/// is an exact repeat of a stored time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Slack for comparing analytic derivatives against finite differences.
    pub fn finite_difference(step: Real) -> Self {
        Self {
            abs: step.sqrt(),
            rel: step.sqrt(),
        }
    }
}

/// True if `a` and `b` agree within `tol.abs`, or within `tol.rel` scaled by
/// the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TsError::NonFinite { what, value: v })
    }
}

/// Check that `values` never decreases. Returns the first offending index.
pub fn first_decrease(values: &[Real]) -> Option<usize> {
    values
        .windows(2)
        .position(|w| w[1] < w[0])
        .map(|i| i + 1)
}
