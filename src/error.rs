//! Error types for packing, unpacking, and base conversion.
//!
//! All failures in this crate are synchronous and surfaced to the immediate
//! caller; no operation retries, clamps, or leaves partial state behind.
//! Out-of-range data is rejected outright rather than truncated, because a
//! silently wrapped field is corruption, not recovery.
//!
//! ## Error Categories
//!
//! - **Range**: a record field does not fit the bit width reserved for it in
//!   the 19-byte wire layout
//! - **Length**: a byte or digit sequence has the wrong length for the
//!   operation
//! - **DigitRange**: a digit is not below its declared base (caller supplied
//!   the wrong base, or the sequence is not a valid positional number)
//! - **Base**: a base below 2 was supplied
//!
//! ## Examples
//!
//! ```rust
//! use objtoken::{pack, Error, ObjectRecord};
//!
//! let record = ObjectRecord::new(70_000, 0.0, 0.0);
//! match pack(&record) {
//!     Err(Error::Range { field, value, max }) => {
//!         assert_eq!(field, "id");
//!         assert_eq!(value, 70_000);
//!         assert_eq!(max, 65_535);
//!     }
//!     other => panic!("expected a range error, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors raised by the codec and converter.
///
/// Each variant carries enough context to name the offending field, index,
/// or length without re-running the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A record field exceeds the bit width reserved for it in the wire layout.
    #[error("field `{field}` is {value}, which exceeds its maximum of {max}")]
    Range {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// A byte or digit sequence has the wrong length for the operation.
    #[error("expected a sequence of length {expected}, found {found}")]
    Length { expected: usize, found: usize },

    /// A digit is not strictly below its declared base.
    #[error("digit {digit} at index {index} is not below base {base}")]
    DigitRange {
        index: usize,
        digit: u32,
        base: u32,
    },

    /// A positional base below 2 was supplied.
    #[error("base {base} is not a valid positional base (must be at least 2)")]
    Base { base: u32 },
}

impl Error {
    /// Creates a range error naming the field that failed to fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objtoken::Error;
    ///
    /// let err = Error::range("id", 70_000, 65_535);
    /// assert!(err.to_string().contains("`id`"));
    /// ```
    pub fn range(field: &'static str, value: u32, max: u32) -> Self {
        Error::Range { field, value, max }
    }

    /// Creates a length error for a sequence of the wrong size.
    pub fn length(expected: usize, found: usize) -> Self {
        Error::Length { expected, found }
    }

    /// Creates a digit-range error for a digit that is not below its base.
    pub fn digit_range(index: usize, digit: u32, base: u32) -> Self {
        Error::DigitRange { index, digit, base }
    }

    /// Creates an invalid-base error for bases below 2.
    pub fn base(base: u32) -> Self {
        Error::Base { base }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
