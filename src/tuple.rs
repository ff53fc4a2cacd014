//! Fixed-arity value tuples
//!
//! `Tuple2` and `Tuple3` group two or three values of unrelated types. They have
//! no behavior beyond construction, positional access and structural comparison:
//! two tuples are equal when every field is equal, and hash the same way.
//!
//! [`zip_with_index`](crate::functional::zip_with_index) yields `Tuple2<usize, T>`.
//!
//! # Example
//!
//! ```
//! use exceptional::{tuple, tuple3, Tuple2};
//!
//! let a = tuple("Value", 3);
//! let b = tuple("Value", 3);
//! assert_eq!(a, b);
//! assert_eq!(a.first(), &"Value");
//! assert_eq!(a.1, 3);
//!
//! let t = tuple3("Value", 3i32, 4i64);
//! assert_eq!(t.third(), &4);
//!
//! let native: (&str, i32) = Tuple2::new("x", 1).into();
//! assert_eq!(native, ("x", 1));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two values of possibly different types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuple2<A, B>(pub A, pub B);

/// Three values of possibly different types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuple3<A, B, C>(pub A, pub B, pub C);

/// Build a [`Tuple2`].
pub fn tuple<A, B>(a: A, b: B) -> Tuple2<A, B> {
    Tuple2(a, b)
}

/// Build a [`Tuple3`].
pub fn tuple3<A, B, C>(a: A, b: B, c: C) -> Tuple3<A, B, C> {
    Tuple3(a, b, c)
}

impl<A, B> Tuple2<A, B> {
    /// Create a new pair.
    pub fn new(a: A, b: B) -> Self {
        Tuple2(a, b)
    }

    /// The first field.
    pub fn first(&self) -> &A {
        &self.0
    }

    /// The second field.
    pub fn second(&self) -> &B {
        &self.1
    }

    /// The same fields in the opposite order.
    ///
    /// # Example
    ///
    /// ```
    /// use exceptional::tuple;
    ///
    /// assert_eq!(tuple(1, "one").swap(), tuple("one", 1));
    /// ```
    pub fn swap(self) -> Tuple2<B, A> {
        Tuple2(self.1, self.0)
    }
}

impl<A, B, C> Tuple3<A, B, C> {
    /// Create a new triple.
    pub fn new(a: A, b: B, c: C) -> Self {
        Tuple3(a, b, c)
    }

    /// The first field.
    pub fn first(&self) -> &A {
        &self.0
    }

    /// The second field.
    pub fn second(&self) -> &B {
        &self.1
    }

    /// The third field.
    pub fn third(&self) -> &C {
        &self.2
    }
}

impl<A, B> From<(A, B)> for Tuple2<A, B> {
    fn from((a, b): (A, B)) -> Self {
        Tuple2(a, b)
    }
}

impl<A, B> From<Tuple2<A, B>> for (A, B) {
    fn from(t: Tuple2<A, B>) -> Self {
        (t.0, t.1)
    }
}

impl<A, B, C> From<(A, B, C)> for Tuple3<A, B, C> {
    fn from((a, b, c): (A, B, C)) -> Self {
        Tuple3(a, b, c)
    }
}

impl<A, B, C> From<Tuple3<A, B, C>> for (A, B, C) {
    fn from(t: Tuple3<A, B, C>) -> Self {
        (t.0, t.1, t.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_tuple2_heterogeneous_fields() {
        let r = tuple("Value", 3);
        assert_eq!(r.0, "Value");
        assert_eq!(r.1, 3);
        assert_eq!(r.first(), &"Value");
        assert_eq!(r.second(), &3);
    }

    #[test]
    fn test_tuple2_value_equality() {
        let a = tuple(String::from("Value"), 3);
        let b = tuple(String::from("Value"), 3);

        assert!(!std::ptr::eq(&a, &b));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_tuple2_inequality_per_field() {
        assert_ne!(tuple("Value", 3), tuple("Value", 4));
        assert_ne!(tuple("Value", 3), tuple("Other", 3));
    }

    #[test]
    fn test_tuple3_heterogeneous_fields() {
        let r = tuple3("Value", 3i32, 4i64);
        assert_eq!(r.first(), &"Value");
        assert_eq!(r.second(), &3i32);
        assert_eq!(r.third(), &4i64);
    }

    #[test]
    fn test_tuple3_value_equality() {
        let a = Tuple3::new(String::from("Value"), 3i32, 4i64);
        let b = Tuple3::new(String::from("Value"), 3i32, 4i64);

        assert!(!std::ptr::eq(&a, &b));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_optional_fields_compare_absent_equal() {
        assert_eq!(tuple(None::<i32>, 1), tuple(None, 1));
        assert_ne!(tuple(Some(0), 1), tuple(None, 1));
    }

    #[test]
    fn test_tuples_as_set_keys() {
        let set: HashSet<_> = [tuple(0, "a"), tuple(0, "a"), tuple(1, "a")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_native_tuple_conversions() {
        let t: Tuple2<i32, &str> = (1, "one").into();
        assert_eq!(t, tuple(1, "one"));
        assert_eq!(<(i32, &str)>::from(t), (1, "one"));

        let t3 = Tuple3::from((1, 'b', "c"));
        let (a, b, c): (i32, char, &str) = t3.into();
        assert_eq!((a, b, c), (1, 'b', "c"));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(tuple(0, "z") < tuple(1, "a"));
        assert!(tuple(1, "a") < tuple(1, "b"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let t = tuple3(String::from("Value"), 3, Some(4i64));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"["Value",3,4]"#);

        let back: Tuple3<String, i32, Option<i64>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
