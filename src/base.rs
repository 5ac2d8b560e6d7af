//! Positional base conversion over arbitrary-precision integers.
//!
//! A digit sequence is an ordered, most-significant-first list of
//! non-negative integers, each strictly below its declared base. This module
//! converts such a sequence between bases by treating the whole sequence as
//! one non-negative integer. A packed record interpreted as base-256 digits
//! reaches ~4×10^62, far beyond any fixed-width integer, so the intermediate
//! value lives in a [`num_bigint::BigUint`].
//!
//! ## Leading zeros
//!
//! Leading zero digits encode positional padding, not magnitude. The count
//! of leading zeros in the input is carried over verbatim to the output,
//! regardless of the base change. This is NOT a faithful positional-notation
//! conversion (the digit count a value needs depends on the target base, not
//! on the zero run it arrived with) — it is the defined convention of the
//! token format, and downstream decoding depends on the lengths it produces.
//! Do not "fix" it.
//!
//! ## Examples
//!
//! ```rust
//! use objtoken::convert_base;
//!
//! // 1·256 + 44 = 300 = 2·126 + 48
//! assert_eq!(convert_base(&[1, 44], 256, 126)?, vec![2, 48]);
//!
//! // Leading zeros survive the base change by count, not by value.
//! assert_eq!(convert_base(&[0, 0, 5], 256, 126)?, vec![0, 0, 5]);
//! # Ok::<(), objtoken::Error>(())
//! ```

use num_bigint::BigUint;

use crate::error::{Error, Result};

/// Converts a big-endian digit sequence from `from_base` to `to_base`.
///
/// The input is interpreted as one arbitrary-precision non-negative integer,
/// re-expressed in the target base by repeated division, and prefixed with
/// as many zero digits as the input had (see the module docs for why the
/// count is carried verbatim).
///
/// Edge cases: an empty input converts to an empty output, and an all-zero
/// input of length L converts to L zero digits.
///
/// # Errors
///
/// - [`Error::Base`] if either base is below 2.
/// - [`Error::DigitRange`] if any input digit is not below `from_base`,
///   naming the first offending index.
///
/// # Examples
///
/// ```rust
/// use objtoken::convert_base;
///
/// let digits = convert_base(&[255, 255], 256, 126)?;
/// // 65535 = 4·126² + 16·126 + 15
/// assert_eq!(digits, vec![4, 16, 15]);
/// assert_eq!(convert_base(&digits, 126, 256)?, vec![255, 255]);
/// # Ok::<(), objtoken::Error>(())
/// ```
pub fn convert_base(digits: &[u32], from_base: u32, to_base: u32) -> Result<Vec<u32>> {
    if from_base < 2 {
        return Err(Error::base(from_base));
    }
    if to_base < 2 {
        return Err(Error::base(to_base));
    }

    let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();

    // Fold the whole sequence into one unbounded integer, validating each
    // digit against the source base as we go.
    let mut value = BigUint::from(0u32);
    for (index, &digit) in digits.iter().enumerate() {
        if digit >= from_base {
            return Err(Error::digit_range(index, digit, from_base));
        }
        value = value * from_base + digit;
    }

    // Peel off target-base digits least-significant-first.
    let zero = BigUint::from(0u32);
    let mut out = Vec::new();
    while value > zero {
        let rem = &value % to_base;
        out.push(rem.to_u32_digits().first().copied().unwrap_or(0));
        value /= to_base;
    }

    // The counted zeros belong at the most-significant end, so they are
    // appended before the reversal.
    out.resize(out.len() + leading_zeros, 0);
    out.reverse();
    Ok(out)
}
