//! Adapters from fallible closures to plain ones
//!
//! Standard library and combinator APIs want closures like `Fn(A) -> B` or
//! `Fn(&T) -> bool`. The constructors here take the fallible version of each shape,
//! a closure returning `Result`, and give back the plain shape. When the wrapped
//! closure returns `Err`, the error is translated with [`Unchecked::wrap`] and raised;
//! it can be recovered at the call site with [`catch_unchecked`](crate::catch_unchecked).
//!
//! | Constructor | Takes | Gives |
//! |---|---|---|
//! | [`exceptional`] | `Fn(A) -> Result<B, E>` | `Fn(A) -> B` |
//! | [`exceptional_consumer`] | `FnMut(T) -> Result<(), E>` | `FnMut(T)` |
//! | [`exceptional_bi_consumer`] | `FnMut(T, U) -> Result<(), E>` | `FnMut(T, U)` |
//! | [`exceptional_supplier`] | `Fn() -> Result<T, E>` | `Fn() -> T` |
//! | [`exceptional_action`] | `FnMut() -> Result<(), E>` | `FnMut()` |
//! | [`exceptional_predicate`] | `Fn(&T) -> Result<bool, E>` | `Fn(&T) -> bool` |
//!
//! Use an adapter once, at the outermost call site. Adapting closures that already
//! call adapted closures works, since an `Unchecked` is never wrapped twice, but
//! composing the inner fallible functions with `?` reads better.
//!
//! # Example
//!
//! ```
//! use exceptional::{catch_unchecked, exceptional, Unchecked};
//! use std::num::ParseIntError;
//!
//! let parse = exceptional(|s: &str| s.parse::<u8>());
//!
//! let sizes: Vec<u8> = catch_unchecked(|| ["1", "2", "3"].into_iter().map(&parse).collect())
//!     .unwrap();
//! assert_eq!(sizes, vec![1, 2, 3]);
//!
//! let err: Unchecked = catch_unchecked(|| ["1", "300"].into_iter().map(&parse).collect::<Vec<_>>())
//!     .unwrap_err();
//! assert!(err.is_cause::<ParseIntError>());
//! ```

use crate::unchecked::{BoxError, Unchecked};

/// Adapt a fallible function into a plain `Fn(A) -> B`.
///
/// # Example
///
/// ```
/// use exceptional::exceptional;
///
/// let double = exceptional(|x: i32| x.checked_mul(2).ok_or("overflow"));
/// assert_eq!(double(21), 42);
/// ```
pub fn exceptional<A, B, E, F>(f: F) -> impl Fn(A) -> B
where
    F: Fn(A) -> Result<B, E>,
    E: Into<BoxError>,
{
    move |a| f(a).unwrap_or_else(|e| Unchecked::wrap(e).raise())
}

/// Adapt a fallible consumer into a plain `FnMut(T)`.
///
/// # Example
///
/// ```
/// use exceptional::exceptional_consumer;
/// use std::fmt::Write;
///
/// let mut out = String::new();
/// let mut push = exceptional_consumer(|s: &str| write!(out, "{s};"));
/// push("a");
/// push("b");
/// drop(push);
/// assert_eq!(out, "a;b;");
/// ```
pub fn exceptional_consumer<T, E, F>(mut f: F) -> impl FnMut(T)
where
    F: FnMut(T) -> Result<(), E>,
    E: Into<BoxError>,
{
    move |t| f(t).unwrap_or_else(|e| Unchecked::wrap(e).raise())
}

/// Adapt a fallible two-argument consumer into a plain `FnMut(T, U)`.
///
/// # Example
///
/// ```
/// use exceptional::exceptional_bi_consumer;
/// use std::collections::HashMap;
///
/// let mut env = HashMap::new();
/// let mut set = exceptional_bi_consumer(|k: &str, v: &str| {
///     if k.is_empty() {
///         return Err("empty key");
///     }
///     env.insert(k.to_string(), v.to_string());
///     Ok(())
/// });
/// set("HOME", "/root");
/// drop(set);
/// assert_eq!(env["HOME"], "/root");
/// ```
pub fn exceptional_bi_consumer<T, U, E, F>(mut f: F) -> impl FnMut(T, U)
where
    F: FnMut(T, U) -> Result<(), E>,
    E: Into<BoxError>,
{
    move |t, u| f(t, u).unwrap_or_else(|e| Unchecked::wrap(e).raise())
}

/// Adapt a fallible supplier into a plain `Fn() -> T`.
///
/// # Example
///
/// ```
/// use exceptional::exceptional_supplier;
///
/// let port = exceptional_supplier(|| "8080".parse::<u16>());
/// assert_eq!(port(), 8080);
/// assert_eq!(None.unwrap_or_else(&port), 8080);
/// ```
pub fn exceptional_supplier<T, E, F>(f: F) -> impl Fn() -> T
where
    F: Fn() -> Result<T, E>,
    E: Into<BoxError>,
{
    move || f().unwrap_or_else(|e| Unchecked::wrap(e).raise())
}

/// Adapt a fallible zero-argument action into a plain `FnMut()`.
pub fn exceptional_action<E, F>(mut f: F) -> impl FnMut()
where
    F: FnMut() -> Result<(), E>,
    E: Into<BoxError>,
{
    move || f().unwrap_or_else(|e| Unchecked::wrap(e).raise())
}

/// Adapt a fallible predicate into a plain `Fn(&T) -> bool`.
///
/// # Example
///
/// ```
/// use exceptional::exceptional_predicate;
///
/// let is_even = exceptional_predicate(|s: &&str| s.parse::<i64>().map(|n| n % 2 == 0));
/// let evens: Vec<_> = ["2", "3", "4"].into_iter().filter(&is_even).collect();
/// assert_eq!(evens, vec!["2", "4"]);
/// ```
pub fn exceptional_predicate<T, E, F>(p: F) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    F: Fn(&T) -> Result<bool, E>,
    E: Into<BoxError>,
{
    move |t: &T| p(t).unwrap_or_else(|e| Unchecked::wrap(e).raise())
}
