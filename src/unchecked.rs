//! The unchecked failure and its wrap-once translation
//!
//! This module provides the `Unchecked` type, the single failure kind that every
//! adapter in [`crate::adapter`] and every `e_*` combinator in
//! [`crate::functional`] surfaces. It wraps the original error as its cause, so the
//! error's type, message and `source()` chain stay inspectable, and records a
//! backtrace of the place where the translation happened.
//!
//! # Examples
//!
//! ## Wrapping an error
//!
//! ```
//! use exceptional::Unchecked;
//! use std::error::Error;
//! use std::io;
//!
//! let err = Unchecked::wrap(io::Error::new(io::ErrorKind::NotFound, "missing.txt"));
//!
//! assert!(err.is_cause::<io::Error>());
//! assert_eq!(err.source().map(|e| e.to_string()), Some("missing.txt".to_string()));
//! ```
//!
//! ## Wrapping is done once
//!
//! ```
//! use exceptional::Unchecked;
//!
//! let once = Unchecked::wrap("disk full");
//! let twice = Unchecked::wrap(once);
//!
//! // The cause is still the original error, not another Unchecked
//! assert!(!twice.is_cause::<Unchecked>());
//! assert_eq!(twice.cause().to_string(), "disk full");
//! ```
//!
//! ## Recovering a raised failure
//!
//! ```
//! use exceptional::{catch_unchecked, Unchecked};
//!
//! let result: Result<i32, Unchecked> = catch_unchecked(|| Unchecked::wrap("boom").raise());
//! assert_eq!(result.unwrap_err().cause().to_string(), "boom");
//! ```

use std::any::Any;
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// A boxed, thread-safe error. Anything convertible into it can be wrapped.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The uniform failure raised when a fallible operation escapes through an adapter
///
/// `Unchecked` always carries the original error as its cause. It never nests: an
/// `Unchecked` handed to [`Unchecked::wrap`] comes back as itself.
///
/// # Examples
///
/// ```
/// use exceptional::Unchecked;
///
/// let err = Unchecked::wrap("connection refused");
/// assert_eq!(err.to_string(), "unchecked failure: connection refused");
/// ```
#[derive(Debug)]
pub struct Unchecked {
    cause: BoxError,
    backtrace: Backtrace,
}

impl Unchecked {
    /// Translate an error into an `Unchecked`
    ///
    /// If the error already is an `Unchecked` it is returned unchanged. Otherwise a
    /// new `Unchecked` is built with the error as its cause and a backtrace captured
    /// here (subject to `RUST_BACKTRACE`, see [`Backtrace::capture`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use exceptional::Unchecked;
    ///
    /// let err = Unchecked::wrap(format!("bad record {}", 7));
    /// assert_eq!(err.cause().to_string(), "bad record 7");
    /// ```
    pub fn wrap<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        match err.into().downcast::<Unchecked>() {
            Ok(unchecked) => *unchecked,
            Err(cause) => Unchecked {
                cause,
                backtrace: Backtrace::capture(),
            },
        }
    }

    /// Get the original error
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    /// Consume and return the original error
    ///
    /// # Examples
    ///
    /// ```
    /// use exceptional::Unchecked;
    /// use std::num::ParseIntError;
    ///
    /// let parse_err = "x".parse::<i32>().unwrap_err();
    /// let cause = Unchecked::wrap(parse_err.clone()).into_cause();
    ///
    /// assert_eq!(*cause.downcast::<ParseIntError>().unwrap(), parse_err);
    /// ```
    pub fn into_cause(self) -> BoxError {
        self.cause
    }

    /// Borrow the original error as a concrete type, if it is one
    pub fn downcast_cause_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        self.cause.downcast_ref::<T>()
    }

    /// Returns true if the original error is of type `T`
    pub fn is_cause<T>(&self) -> bool
    where
        T: StdError + 'static,
    {
        self.cause.is::<T>()
    }

    /// Stack context captured where the original error was first wrapped
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Raise this failure by unwinding with it as the panic payload
    ///
    /// The payload can be turned back into an `Unchecked` with
    /// [`catch_unchecked`] or [`Unchecked::from_panic`].
    ///
    /// The panic hook is not invoked, so nothing is printed. A failure that is never
    /// recovered ends its thread silently; `JoinHandle::join` still reports it as
    /// `Err`, and on the main thread the process exits with code 101.
    pub fn raise(self) -> ! {
        panic::resume_unwind(Box::new(self))
    }

    /// Recover an `Unchecked` from a caught panic payload
    ///
    /// Any other payload is handed back unchanged so it can be resumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use exceptional::Unchecked;
    /// use std::panic;
    ///
    /// let payload = panic::catch_unwind(|| Unchecked::wrap("boom").raise()).unwrap_err();
    /// let err = Unchecked::from_panic(payload).unwrap();
    /// assert_eq!(err.cause().to_string(), "boom");
    /// ```
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Result<Self, Box<dyn Any + Send>> {
        payload.downcast::<Unchecked>().map(|unchecked| *unchecked)
    }
}

impl fmt::Display for Unchecked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unchecked failure: {}", self.cause)
    }
}

impl StdError for Unchecked {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}

/// Run `f`, turning an `Unchecked` raised inside it back into an error value
///
/// This is the boundary between code that uses the adapters from
/// [`crate::adapter`] and code that wants a `Result`. Normal completion gives
/// `Ok`, an unwinding `Unchecked` gives `Err`, and any other panic is resumed
/// untouched.
///
/// State mutated by `f` before the failure is left as it was at that point. Under
/// `panic = "abort"` a raised failure aborts the process instead.
///
/// # Examples
///
/// ```
/// use exceptional::{catch_unchecked, exceptional};
///
/// let parse = exceptional(|s: &str| s.parse::<i32>());
///
/// assert_eq!(catch_unchecked(|| parse("42")).unwrap(), 42);
/// assert!(catch_unchecked(|| parse("forty-two")).is_err());
/// ```
pub fn catch_unchecked<T, F>(f: F) -> Result<T, Unchecked>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match Unchecked::from_panic(payload) {
            Ok(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(cause = %err.cause(), "recovered unchecked failure");
                Err(err)
            }
            Err(payload) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("resuming foreign panic");
                panic::resume_unwind(payload)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Outer(io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "loading profile")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_wrap_records_cause() {
        let err = Unchecked::wrap(io::Error::new(io::ErrorKind::NotFound, "Test Exception"));

        assert!(err.is_cause::<io::Error>());
        let io_err = err.downcast_cause_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert_eq!(io_err.to_string(), "Test Exception");
    }

    #[test]
    fn test_wrap_string_and_str() {
        assert_eq!(Unchecked::wrap("str error").cause().to_string(), "str error");
        assert_eq!(
            Unchecked::wrap(String::from("owned error")).cause().to_string(),
            "owned error"
        );
    }

    #[test]
    fn test_wrap_does_not_double_wrap() {
        let err = Unchecked::wrap(Unchecked::wrap("base error"));

        assert!(!err.is_cause::<Unchecked>());
        assert_eq!(err.cause().to_string(), "base error");
    }

    #[test]
    fn test_wrap_does_not_double_wrap_boxed() {
        let boxed: BoxError = Box::new(Unchecked::wrap("base error"));
        let err = Unchecked::wrap(boxed);

        assert!(!err.is_cause::<Unchecked>());
        assert_eq!(err.to_string(), "unchecked failure: base error");
    }

    #[test]
    fn test_display_format() {
        let err = Unchecked::wrap("file not found");
        assert_eq!(format!("{}", err), "unchecked failure: file not found");
    }

    #[test]
    fn test_source_chain_preserved() {
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = Unchecked::wrap(Outer(inner));

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "loading profile");
        assert_eq!(source.source().unwrap().to_string(), "denied");
    }

    #[test]
    fn test_into_cause() {
        let err = Unchecked::wrap(io::Error::new(io::ErrorKind::Other, "gone"));
        let cause = err.into_cause();

        assert_eq!(cause.downcast::<io::Error>().unwrap().to_string(), "gone");
    }

    #[test]
    fn test_rewrap_keeps_first_backtrace() {
        let once = Unchecked::wrap("traced");
        let status = once.backtrace().status();
        let frames = once.backtrace().to_string();

        let twice = Unchecked::wrap(once);

        // A fresh capture here would record this line's frames instead
        assert_eq!(twice.backtrace().status(), status);
        assert_eq!(twice.backtrace().to_string(), frames);
    }

    #[test]
    fn test_rewrap_moves_the_same_failure() {
        let once = Unchecked::wrap(io::Error::new(io::ErrorKind::Other, "gone"));
        let cause_addr = once.cause() as *const _ as *const u8;

        let twice = Unchecked::wrap(once);

        assert_eq!(twice.cause() as *const _ as *const u8, cause_addr);
    }

    #[test]
    fn test_raise_unwinds_with_unchecked_payload() {
        let payload = panic::catch_unwind(|| Unchecked::wrap("raised").raise()).unwrap_err();
        let err = payload.downcast::<Unchecked>().unwrap();
        assert_eq!(Unchecked::cause(&err).to_string(), "raised");
    }

    #[test]
    fn test_catch_unchecked_ok() {
        let result = catch_unchecked(|| 21 * 2);
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_catch_unchecked_recovers_raised() {
        let result: Result<(), Unchecked> = catch_unchecked(|| Unchecked::wrap("raised").raise());
        assert_eq!(result.unwrap_err().cause().to_string(), "raised");
    }

    #[test]
    #[should_panic(expected = "plain panic")]
    fn test_catch_unchecked_resumes_foreign_panic() {
        let _ = catch_unchecked(|| panic!("plain panic"));
    }

    #[test]
    fn test_from_panic_hands_back_foreign_payload() {
        let payload: Box<dyn Any + Send> = Box::new("not ours");
        let back = Unchecked::from_panic(payload).unwrap_err();
        assert_eq!(back.downcast_ref::<&str>(), Some(&"not ours"));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_catch_unchecked_logs_recovery() {
            let _ = catch_unchecked(|| Unchecked::wrap("logged cause").raise());

            assert!(logs_contain("recovered unchecked failure"));
            assert!(logs_contain("logged cause"));
        }
    }
}
