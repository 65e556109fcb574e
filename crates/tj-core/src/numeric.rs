use crate::TjError;

/// Scalar type of every formula input and result
pub type Real = f64;

/// Rejects `inf` and `NaN` at an input boundary.
///
/// The formulas themselves never call this; degenerate arithmetic inside them
/// is allowed to produce non-finite results.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TjError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TjError::NonFinite { what, value: v })
    }
}

/// Checks an ordered parameter list, naming the first non-finite entry.
///
/// Values past the end of `names` are reported as `"input"`.
pub fn ensure_params_finite(names: &[&'static str], values: &[Real]) -> Result<(), TjError> {
    for (i, &v) in values.iter().enumerate() {
        ensure_finite(v, names.get(i).copied().unwrap_or("input"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "altitude").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
        assert!(msg.contains("altitude"));
    }

    #[test]
    fn ensure_finite_detects_infinity() {
        assert!(ensure_finite(Real::INFINITY, "ratio").is_err());
        assert!(ensure_finite(Real::NEG_INFINITY, "ratio").is_err());
        assert_eq!(ensure_finite(1.4, "k").unwrap(), 1.4);
    }

    #[test]
    fn params_report_the_offending_name() {
        let names = ["p1", "p2"];
        assert_eq!(ensure_params_finite(&names, &[1.0, 2.0]), Ok(()));
        assert_eq!(
            ensure_params_finite(&names, &[1.0, Real::INFINITY]),
            Err(TjError::NonFinite {
                what: "p2",
                value: Real::INFINITY
            })
        );
    }

    #[test]
    fn params_past_the_names_are_still_checked() {
        let err = ensure_params_finite(&["molar_mass"], &[28.97, Real::NAN]).unwrap_err();
        assert!(matches!(err, TjError::NonFinite { what: "input", .. }));
        assert_eq!(ensure_params_finite(&[], &[]), Ok(()));
    }

    proptest! {
        #[test]
        fn finite_values_pass_unchanged(v in -1e12_f64..1e12) {
            prop_assert_eq!(ensure_finite(v, "value").unwrap(), v);
            prop_assert!(ensure_params_finite(&["a", "b"], &[v, -v]).is_ok());
        }
    }
}
