//! Testing utilities for code built on the adapters
//!
//! Assertion macros for expressions that are expected to raise an
//! [`Unchecked`](crate::Unchecked), and property-based testing support for the tuple
//! types.
//!
//! # Examples
//!
//! ```rust
//! use exceptional::{assert_unchecked, assert_unchecked_cause, exceptional};
//! use std::num::ParseIntError;
//!
//! let parse = exceptional(|s: &str| s.parse::<i32>());
//!
//! assert_unchecked!(parse("nope"));
//! assert_unchecked_cause!(parse("nope"), ParseIntError);
//! ```

/// Assert that evaluating an expression raises an `Unchecked`.
///
/// Evaluates to the recovered `Unchecked`, so the failure can be inspected further.
/// Panics if the expression completes normally; other panics pass through.
///
/// # Example
///
/// ```rust
/// use exceptional::{assert_unchecked, exceptional_supplier};
///
/// let read = exceptional_supplier(|| std::fs::read_to_string("/notarealpathhere/foo.txt"));
/// let err = assert_unchecked!(read());
/// assert!(err.is_cause::<std::io::Error>());
/// ```
#[macro_export]
macro_rules! assert_unchecked {
    ($expr:expr) => {
        match $crate::catch_unchecked(|| $expr) {
            ::std::result::Result::Err(err) => err,
            ::std::result::Result::Ok(v) => {
                panic!("Expected Unchecked failure, got value: {:?}", v);
            }
        }
    };
}

/// Assert that evaluating an expression raises an `Unchecked` caused by an error of
/// the given type.
///
/// # Example
///
/// ```rust
/// use exceptional::{assert_unchecked_cause, exceptional};
///
/// let open = exceptional(|p: &str| std::fs::File::open(p));
/// assert_unchecked_cause!(open("/notarealpathhere/foo.txt"), std::io::Error);
/// ```
#[macro_export]
macro_rules! assert_unchecked_cause {
    ($expr:expr, $cause:ty) => {{
        let err = $crate::assert_unchecked!($expr);
        if !err.is_cause::<$cause>() {
            panic!(
                "Expected Unchecked caused by {}, got: {}",
                ::std::any::type_name::<$cause>(),
                err
            );
        }
        err
    }};
}

#[cfg(feature = "proptest")]
use crate::tuple::{Tuple2, Tuple3};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<A, B> Arbitrary for Tuple2<A, B>
where
    A: Arbitrary + 'static,
    B: Arbitrary + 'static,
{
    type Parameters = (A::Parameters, B::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (a_params, b_params) = args;
        (any_with::<A>(a_params), any_with::<B>(b_params))
            .prop_map(|(a, b)| Tuple2(a, b))
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<A, B, C> Arbitrary for Tuple3<A, B, C>
where
    A: Arbitrary + 'static,
    B: Arbitrary + 'static,
    C: Arbitrary + 'static,
{
    type Parameters = (A::Parameters, B::Parameters, C::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (a_params, b_params, c_params) = args;
        (
            any_with::<A>(a_params),
            any_with::<B>(b_params),
            any_with::<C>(c_params),
        )
            .prop_map(|(a, b, c)| Tuple3(a, b, c))
            .boxed()
    }
}
