//! nalgebra aliases for optimal-control quantities.
//!
//! Dimensions are decided by the problem at runtime and stay fixed for the
//! lifetime of a model or provider.

use nalgebra::{DMatrix, DVector};

use crate::{Real, TsError, TsResult};

pub type StateVector = DVector<Real>;
pub type InputVector = DVector<Real>;
pub type ConstraintVector = DVector<Real>;

/// Square matrix over the state space (e.g. df/dx).
pub type StateMatrix = DMatrix<Real>;
/// state x input matrix (e.g. df/du).
pub type StateInputMatrix = DMatrix<Real>;
/// Square matrix over the input space (e.g. d2L/du2).
pub type InputMatrix = DMatrix<Real>;
/// input x state matrix (e.g. d2L/dudx).
pub type InputStateMatrix = DMatrix<Real>;

pub fn ensure_dim(what: &'static str, v: &DVector<Real>, expected: usize) -> TsResult<()> {
    if v.len() == expected {
        Ok(())
    } else {
        Err(TsError::DimensionMismatch {
            what,
            expected,
            got: v.len(),
        })
    }
}

/// Linear blend `a + alpha * (b - a)`.
pub fn lerp(a: &DVector<Real>, b: &DVector<Real>, alpha: Real) -> DVector<Real> {
    a + (b - a) * alpha
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dim_reports_sizes() {
        let v = StateVector::from_vec(vec![1.0, 2.0]);
        assert!(ensure_dim("state", &v, 2).is_ok());
        let err = ensure_dim("state", &v, 3).unwrap_err();
        assert_eq!(
            err,
            TsError::DimensionMismatch {
                what: "state",
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = StateVector::from_vec(vec![0.0, 2.0]);
        let b = StateVector::from_vec(vec![1.0, -2.0]);
        assert_eq!(lerp(&a, &b, 0.0), a);
        assert_eq!(lerp(&a, &b, 1.0), b);
        assert_eq!(lerp(&a, &b, 0.5), StateVector::from_vec(vec![0.5, 0.0]));
    }
}
