//! Combinators bridging `Option` and sequences
//!
//! Free functions that apply a closure to the contents of an `Option`, a sequence
//! (anything `IntoIterator`), or a lazy `Iterator`, and collect the result into the
//! matching shape. None of them mutate their input: pass `&v` to keep `v`, pass `v`
//! to consume it.
//!
//! # Core Concepts
//!
//! - **Eager**: `map`, `filter`, `flat_map_many`, `flat_map_opt`, `flatten` return a
//!   fresh `Vec`.
//! - **Lazy**: `flat_map_opt_lazy`, `zip_with_index`, `to_iter` return iterators that
//!   do their work as they are pulled.
//! - **Flat-map naming**: `_many` means the closure yields 0..N values per input,
//!   `_opt` means it yields an `Option`, so 0 or 1.
//! - **Error translating**: `e_map`, `e_flat_map`, `e_filter`, `e_find`, `e_for_each`
//!   take closures returning `Result`, stop at the first `Err` and return it as an
//!   [`Unchecked`].
//!
//! Don't chain these helpers: each call allocates its own output. Compose the
//! closures instead and call the helper once.
//!
//! # Examples
//!
//! ```
//! use exceptional::functional::{flat_map_many, flat_map_opt, head_option, map};
//!
//! let names = vec!["Alpha", "Beta"];
//!
//! assert_eq!(map(&names, |s| s.len()), vec![5, 4]);
//! assert_eq!(head_option(&names), Some(&"Alpha"));
//!
//! // Option in, sequence out
//! assert_eq!(flat_map_many(Some("Value"), |x| vec![format!("{x}foo")]), vec!["Valuefoo"]);
//! assert!(flat_map_many(None::<&str>, |x| vec![format!("{x}foo")]).is_empty());
//!
//! // Sequence in, optional per element
//! assert_eq!(flat_map_opt(&names, |s| s.strip_prefix("Al")), vec!["pha"]);
//! ```

use std::iter::FusedIterator;

use crate::tuple::Tuple2;
use crate::unchecked::{BoxError, Unchecked};

/// Apply `f` to every element, in order.
///
/// # Example
///
/// ```
/// use exceptional::functional::map;
///
/// assert_eq!(map(vec![1, 2, 3], |x| x * 10), vec![10, 20, 30]);
/// ```
pub fn map<I, B, F>(seq: I, f: F) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    seq.into_iter().map(f).collect()
}

/// Run `f` on every element, in order, for its side effects.
pub fn for_each<I, F>(seq: I, f: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    seq.into_iter().for_each(f)
}

/// Keep the elements for which `predicate` holds, in their original order.
///
/// # Example
///
/// ```
/// use exceptional::functional::filter;
///
/// let words = vec!["Alpha", "Beta"];
/// assert_eq!(filter(&words, |w| w.contains('e')), vec![&"Beta"]);
/// ```
pub fn filter<I, P>(seq: I, predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().filter(predicate).collect()
}

/// The first element, in iteration order, for which `predicate` holds.
///
/// Elements after the first match are not tested.
///
/// # Example
///
/// ```
/// use exceptional::functional::find;
///
/// let words = vec!["Alpha", "Beta", "Bravo"];
/// assert_eq!(find(words, |w| w.starts_with('B')), Some("Beta"));
/// ```
pub fn find<I, P>(seq: I, mut predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().find(|item| predicate(item))
}

/// Flat-map where each input yields any number of outputs.
///
/// With an `Option` input this maps a present value to the sequence `f` returns,
/// and an absent one to an empty `Vec` without calling `f`.
///
/// # Example
///
/// ```
/// use exceptional::functional::flat_map_many;
///
/// let present = flat_map_many(Some(3), |n| 0..n);
/// assert_eq!(present, vec![0, 1, 2]);
///
/// let nested = flat_map_many(vec!["a b", "c"], |s| s.split(' '));
/// assert_eq!(nested, vec!["a", "b", "c"]);
/// ```
pub fn flat_map_many<I, J, F>(input: I, f: F) -> Vec<J::Item>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item) -> J,
{
    input.into_iter().flat_map(f).collect()
}

/// Flat-map where each input yields at most one output.
///
/// `None` results are dropped, the rest keep their relative order.
///
/// # Example
///
/// ```
/// use exceptional::functional::flat_map_opt;
///
/// let parsed = flat_map_opt(["1", "x", "3"], |s| s.parse::<i32>().ok());
/// assert_eq!(parsed, vec![1, 3]);
/// ```
pub fn flat_map_opt<I, B, F>(seq: I, f: F) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<B>,
{
    seq.into_iter().filter_map(f).collect()
}

/// Lazy version of [`flat_map_opt`].
///
/// `f` runs for an element only when the output is pulled past it, so this works
/// on infinite inputs. The result is single-pass like any iterator.
///
/// # Example
///
/// ```
/// use exceptional::functional::flat_map_opt_lazy;
///
/// let odd_squares: Vec<u64> = flat_map_opt_lazy(1u64.., |n| (n % 2 == 1).then(|| n * n))
///     .take(3)
///     .collect();
/// assert_eq!(odd_squares, vec![1, 9, 25]);
/// ```
///
/// Consuming the output twice is rejected at compile time:
///
/// ```compile_fail
/// use exceptional::functional::flat_map_opt_lazy;
///
/// let lazy = flat_map_opt_lazy(vec![1, 2], Some);
/// let first: Vec<i32> = lazy.collect();
/// let again: Vec<i32> = lazy.collect();
/// ```
pub fn flat_map_opt_lazy<I, B, F>(seq: I, f: F) -> impl Iterator<Item = B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<B>,
{
    seq.into_iter().filter_map(f)
}

/// The held values of a sequence of options, in order.
///
/// # Example
///
/// ```
/// use exceptional::functional::flatten;
///
/// assert_eq!(flatten(vec![None, Some("Alpha"), None]), vec!["Alpha"]);
/// ```
pub fn flatten<I, A>(seq: I) -> Vec<A>
where
    I: IntoIterator<Item = Option<A>>,
{
    seq.into_iter().flatten().collect()
}

/// The first element of a sequence, if any.
///
/// Pass a reference to leave the sequence untouched.
pub fn head_option<I>(seq: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    seq.into_iter().next()
}

/// `opt` if it holds a value, otherwise whatever `supplier` returns.
///
/// `supplier` is not called when `opt` is `Some`.
///
/// # Example
///
/// ```
/// use exceptional::functional::or_else;
///
/// assert_eq!(or_else(None, || Some("value")), Some("value"));
/// assert_eq!(or_else(Some("Value"), || unreachable!()), Some("Value"));
/// ```
pub fn or_else<A, S>(opt: Option<A>, supplier: S) -> Option<A>
where
    S: FnOnce() -> Option<A>,
{
    opt.or_else(supplier)
}

/// Pair every element with its position, starting at 0.
///
/// # Example
///
/// ```
/// use exceptional::functional::zip_with_index;
/// use exceptional::tuple;
///
/// let pairs: Vec<_> = zip_with_index(["Alpha", "Beta", "Gamma"]).collect();
/// assert_eq!(pairs, vec![tuple(0, "Alpha"), tuple(1, "Beta"), tuple(2, "Gamma")]);
/// ```
pub fn zip_with_index<I>(seq: I) -> ZipWithIndex<I::IntoIter>
where
    I: IntoIterator,
{
    ZipWithIndex {
        iter: seq.into_iter(),
        index: 0,
    }
}

/// A zero-or-one element iterator over an `Option`.
pub fn to_iter<A>(opt: Option<A>) -> std::option::IntoIter<A> {
    opt.into_iter()
}

/// Iterator returned by [`zip_with_index`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipWithIndex<I> {
    iter: I,
    index: usize,
}

impl<I: Iterator> Iterator for ZipWithIndex<I> {
    type Item = Tuple2<usize, I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some(Tuple2(index, item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> DoubleEndedIterator for ZipWithIndex<I>
where
    I: ExactSizeIterator + DoubleEndedIterator,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.iter.next_back()?;
        // len() already excludes the element just taken from the back
        Some(Tuple2(self.index + self.iter.len(), item))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for ZipWithIndex<I> {}

impl<I: FusedIterator> FusedIterator for ZipWithIndex<I> {}

/// [`map`] with a fallible closure.
///
/// Stops at the first `Err`; later elements are not visited.
///
/// # Example
///
/// ```
/// use exceptional::functional::e_map;
///
/// let ok = e_map(["1", "2"], |s| s.parse::<i32>()).unwrap();
/// assert_eq!(ok, vec![1, 2]);
///
/// let err = e_map(["1", "two"], |s| s.parse::<i32>()).unwrap_err();
/// assert!(err.is_cause::<std::num::ParseIntError>());
/// ```
pub fn e_map<I, B, E, F>(seq: I, mut f: F) -> Result<Vec<B>, Unchecked>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<B, E>,
    E: Into<BoxError>,
{
    seq.into_iter()
        .map(|item| f(item).map_err(Unchecked::wrap))
        .collect()
}

/// [`flat_map_many`] with a fallible closure.
pub fn e_flat_map<I, J, E, F>(seq: I, mut f: F) -> Result<Vec<J::Item>, Unchecked>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item) -> Result<J, E>,
    E: Into<BoxError>,
{
    let mut out = Vec::new();
    for item in seq {
        out.extend(f(item).map_err(Unchecked::wrap)?);
    }
    Ok(out)
}

/// [`filter`] with a fallible predicate.
pub fn e_filter<I, E, P>(seq: I, mut predicate: P) -> Result<Vec<I::Item>, Unchecked>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
    E: Into<BoxError>,
{
    let mut out = Vec::new();
    for item in seq {
        if predicate(&item).map_err(Unchecked::wrap)? {
            out.push(item);
        }
    }
    Ok(out)
}

/// [`find`] with a fallible predicate.
///
/// An `Err` from an element before the first match is returned; elements after
/// the first match are not tested.
pub fn e_find<I, E, P>(seq: I, mut predicate: P) -> Result<Option<I::Item>, Unchecked>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
    E: Into<BoxError>,
{
    for item in seq {
        if predicate(&item).map_err(Unchecked::wrap)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// [`for_each`] with a fallible consumer.
pub fn e_for_each<I, E, F>(seq: I, mut f: F) -> Result<(), Unchecked>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<(), E>,
    E: Into<BoxError>,
{
    seq.into_iter()
        .try_for_each(|item| f(item).map_err(Unchecked::wrap))
}
