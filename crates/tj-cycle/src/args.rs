//! Parameter normalization shared by every formula.
//!
//! Each formula accepts its parameters either as positional scalars (a tuple
//! or fixed-size array) or as one ordered bundle whose length is only known at
//! run time (slice or `Vec`). `Args::unpack` turns both into the same
//! `[Real; N]` list before any arithmetic runs.
//!
//! ```
//! use tj_cycle::general::pressure_ratio;
//!
//! let positional = pressure_ratio((100_000.0, 250_000.0)).unwrap();
//! let bundled = pressure_ratio(vec![100_000.0, 250_000.0]).unwrap();
//! assert_eq!(positional, bundled);
//!
//! // Integral inputs promote to f64
//! assert_eq!(pressure_ratio((2, 5)).unwrap(), 2.5);
//!
//! // A bundle of the wrong length fails before the formula is evaluated
//! assert!(pressure_ratio(&[1.0, 2.0, 3.0]).is_err());
//! ```

use std::borrow::Cow;

use tj_core::Real;

use crate::error::{CycleError, CycleResult};

/// Inputs to an `N`-parameter formula.
#[derive(Debug, Clone, PartialEq)]
pub enum Args<'a, const N: usize> {
    /// Positional values, arity checked at compile time.
    Scalars([Real; N]),
    /// Ordered bundle, arity checked by [`Args::unpack`].
    Bundle(Cow<'a, [Real]>),
}

impl<const N: usize> Args<'_, N> {
    /// Resolve to the formula's declared parameter list.
    ///
    /// # Errors
    /// `CycleError::Arity` when a bundle does not hold exactly `N` values.
    pub fn unpack(self, formula: &'static str) -> CycleResult<[Real; N]> {
        match self {
            Args::Scalars(values) => Ok(values),
            Args::Bundle(values) => <[Real; N]>::try_from(values.as_ref()).map_err(|_| {
                tracing::debug!(
                    formula,
                    expected = N,
                    got = values.len(),
                    "malformed parameter bundle"
                );
                CycleError::Arity {
                    formula,
                    expected: N,
                    got: values.len(),
                }
            }),
        }
    }
}

impl<const N: usize> From<[Real; N]> for Args<'_, N> {
    fn from(values: [Real; N]) -> Self {
        Args::Scalars(values)
    }
}

impl<'a, const N: usize> From<&'a [Real]> for Args<'a, N> {
    fn from(values: &'a [Real]) -> Self {
        Args::Bundle(Cow::Borrowed(values))
    }
}

impl<'a, const M: usize, const N: usize> From<&'a [Real; M]> for Args<'a, N> {
    fn from(values: &'a [Real; M]) -> Self {
        Args::Bundle(Cow::Borrowed(values.as_slice()))
    }
}

impl<const N: usize> From<Vec<Real>> for Args<'_, N> {
    fn from(values: Vec<Real>) -> Self {
        Args::Bundle(Cow::Owned(values))
    }
}

impl<'a, const N: usize> From<&'a Vec<Real>> for Args<'a, N> {
    fn from(values: &'a Vec<Real>) -> Self {
        Args::Bundle(Cow::Borrowed(values.as_slice()))
    }
}

macro_rules! scalar_into_args {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Args<'_, 1> {
                fn from(value: $t) -> Self {
                    Args::Scalars([Real::from(value)])
                }
            }
        )*
    };
}

scalar_into_args!(f64, f32, i32, u32, i16, u16, i8, u8);

macro_rules! tuple_into_args {
    ($n:literal; $($ty:ident $val:ident),+) => {
        impl<$($ty: Into<Real>),+> From<($($ty,)+)> for Args<'_, $n> {
            fn from(($($val,)+): ($($ty,)+)) -> Self {
                Args::Scalars([$($val.into()),+])
            }
        }
    };
}

tuple_into_args!(1; A a);
tuple_into_args!(2; A a, B b);
tuple_into_args!(3; A a, B b, C c);
tuple_into_args!(4; A a, B b, C c, D d);
tuple_into_args!(5; A a, B b, C c, D d, E e);

#[cfg(test)]
mod tests {
    use super::*;

    fn unpack2<'a>(args: impl Into<Args<'a, 2>>) -> CycleResult<[Real; 2]> {
        args.into().unpack("test")
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(unpack2((1.0, 2.0)).unwrap(), [1.0, 2.0]);
        assert_eq!(unpack2([3.0, 4.0]).unwrap(), [3.0, 4.0]);
    }

    #[test]
    fn mixed_integer_tuple_promotes() {
        assert_eq!(unpack2((1_i32, 2.5_f64)).unwrap(), [1.0, 2.5]);
        assert_eq!(unpack2((7_u8, 3_f32)).unwrap(), [7.0, 3.0]);
    }

    #[test]
    #[allow(clippy::needless_borrows_for_generic_args)]
    fn bundle_of_matching_length_unpacks_in_order() {
        let v = vec![10.0, 20.0];
        assert_eq!(unpack2(&v).unwrap(), [10.0, 20.0]);
        assert_eq!(unpack2(v.as_slice()).unwrap(), [10.0, 20.0]);
        assert_eq!(unpack2(v).unwrap(), [10.0, 20.0]);
        assert_eq!(unpack2([5.0, 6.0].as_slice()).unwrap(), [5.0, 6.0]);
    }

    #[test]
    fn bundle_length_mismatch_is_arity_error() {
        let err = unpack2(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            CycleError::Arity {
                formula: "test",
                expected: 2,
                got: 3
            }
        );

        let empty: &[Real] = &[];
        assert!(matches!(
            unpack2(empty),
            Err(CycleError::Arity { got: 0, .. })
        ));
    }

    fn unpack1<'a>(args: impl Into<Args<'a, 1>>) -> CycleResult<[Real; 1]> {
        args.into().unpack("one")
    }

    #[test]
    fn single_scalar_forms() {
        assert_eq!(unpack1(28.97_f64).unwrap(), [28.97]);
        assert_eq!(unpack1(11_000_i32).unwrap(), [11_000.0]);
        assert_eq!(unpack1((2_u16,)).unwrap(), [2.0]);
        assert_eq!(unpack1(vec![4.0]).unwrap(), [4.0]);
        assert!(unpack1(vec![4.0, 5.0]).is_err());
    }
}
