//! # Exceptional
//!
//! Functional glue for everyday Rust: combinators that move between `Option` and
//! sequences, and adapters that let a fallible closure stand in wherever a plain
//! one is expected.
//!
//! ## Philosophy
//!
//! - **Adapt once, at the edge**: write the fallible body with `?`, adapt it into a
//!   plain closure with [`exceptional`] and friends, and recover the failure with
//!   [`catch_unchecked`] where you can handle it.
//! - **One failure kind**: whatever the body returned as `Err` surfaces as an
//!   [`Unchecked`] that keeps the original error as its cause. It is never wrapped
//!   twice.
//! - **Shape in, shape out**: the [`functional`] helpers take an `Option` or any
//!   `IntoIterator` and return the matching `Option`, `Vec` or lazy iterator.
//!
//! ## Quick Example
//!
//! ```rust
//! use exceptional::prelude::*;
//! use std::num::ParseIntError;
//!
//! let ports = vec!["80", "443", "8080"];
//!
//! // Fallible closure, plain combinator
//! let parse = exceptional(|s: &&str| s.parse::<u16>());
//! let parsed = catch_unchecked(|| map(&ports, &parse)).unwrap();
//! assert_eq!(parsed, vec![80, 443, 8080]);
//!
//! // Or let the combinator translate the error itself
//! let err = e_map(["80", "http"], |s| s.parse::<u16>()).unwrap_err();
//! assert!(err.is_cause::<ParseIntError>());
//!
//! // Indexed pairs
//! let first = zip_with_index(&ports).next();
//! assert_eq!(first, Some(tuple(0, &"80")));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod adapter;
pub mod functional;
pub mod testing;
pub mod tuple;
pub mod unchecked;

// Re-exports
pub use adapter::{
    exceptional, exceptional_action, exceptional_bi_consumer, exceptional_consumer,
    exceptional_predicate, exceptional_supplier,
};
pub use tuple::{tuple, tuple3, Tuple2, Tuple3};
pub use unchecked::{catch_unchecked, BoxError, Unchecked};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapter::{
        exceptional, exceptional_action, exceptional_bi_consumer, exceptional_consumer,
        exceptional_predicate, exceptional_supplier,
    };
    pub use crate::functional::{
        e_filter, e_find, e_flat_map, e_for_each, e_map, filter, find, flat_map_many,
        flat_map_opt, flat_map_opt_lazy, flatten, for_each, head_option, map, or_else,
        to_iter, zip_with_index,
    };
    pub use crate::tuple::{tuple, tuple3, Tuple2, Tuple3};
    pub use crate::unchecked::{catch_unchecked, Unchecked};
}
