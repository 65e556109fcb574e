//! Float comparison shared by the unit tests.

use tj_core::Real;

/// Relative tolerance for results that differ from a hand-written expression
/// only by rounding.
pub(crate) const REL: Real = 1e-9;

/// `true` when `actual` lies within `rel` of `expected`, scaled by the larger
/// magnitude of the two.
pub(crate) fn close(actual: Real, expected: Real, rel: Real) -> bool {
    (actual - expected).abs() <= rel * actual.abs().max(expected.abs())
}

#[test]
fn close_scales_with_magnitude() {
    assert!(close(101_325.0, 101_325.000_01, REL));
    assert!(!close(1.0, 1.0 + 1e-6, REL));
    assert!(close(0.0, 0.0, REL));
    assert!(!close(Real::NAN, Real::NAN, REL));
}
