//! The two-stage token pipeline: binary packing plus base conversion.
//!
//! Encoding packs a record into its fixed byte layout, treats each byte as
//! one base-[`INPUT_BASE`] digit, and converts the sequence to
//! base-[`OUTPUT_BASE`]. Decoding reverses the two stages exactly. The
//! output digit sequence is the token handed to the transport collaborator;
//! rendering it as printable text is that collaborator's job, not this
//! crate's.
//!
//! ## Round trips
//!
//! `decode(&encode(&r)?)? == r` holds for every valid record: the packed
//! form is a fixed 26 digits, so the leading-zero convention of
//! [`convert_base`](crate::convert_base) carries the exact digit count both
//! ways. Arbitrary digit sequences that did not come from [`encode`] enjoy
//! no such guarantee.

use crate::base::convert_base;
use crate::codec::{pack, unpack, PACKED_LEN};
use crate::error::{Error, Result};
use crate::record::ObjectRecord;

/// Base of the packed byte sequence: each byte is one digit.
pub const INPUT_BASE: u32 = 256;

/// Base of the emitted token digits.
pub const OUTPUT_BASE: u32 = 126;

/// Encodes a record into a base-126 digit sequence.
///
/// # Errors
///
/// Returns [`Error::Range`] if a record field does not fit its wire width.
///
/// # Examples
///
/// ```rust
/// use objtoken::{encode, ObjectRecord, OUTPUT_BASE};
///
/// let record = ObjectRecord::new(1, 5205.0, 1245.0)
///     .with_y_angle(18)
///     .with_z_layer(3);
/// let token = encode(&record)?;
/// assert!(token.iter().all(|&d| d < OUTPUT_BASE));
/// # Ok::<(), objtoken::Error>(())
/// ```
pub fn encode(record: &ObjectRecord) -> Result<Vec<u32>> {
    let bytes = pack(record)?;
    let digits: Vec<u32> = bytes.iter().map(|&b| u32::from(b)).collect();
    convert_base(&digits, INPUT_BASE, OUTPUT_BASE)
}

/// Decodes a base-126 digit sequence back into a record.
///
/// # Errors
///
/// - [`Error::DigitRange`] if a digit is not below 126.
/// - [`Error::Length`] if the converted byte sequence is not exactly
///   [`PACKED_LEN`] bytes, which means the input was not produced by
///   [`encode`].
///
/// # Examples
///
/// ```rust
/// use objtoken::{decode, encode, ObjectRecord};
///
/// let record = ObjectRecord::new(1, 5205.0, 1245.0).with_y_angle(18);
/// assert_eq!(decode(&encode(&record)?)?, record);
/// # Ok::<(), objtoken::Error>(())
/// ```
pub fn decode(digits: &[u32]) -> Result<ObjectRecord> {
    let byte_digits = convert_base(digits, OUTPUT_BASE, INPUT_BASE)?;
    if byte_digits.len() != PACKED_LEN {
        return Err(Error::length(PACKED_LEN, byte_digits.len()));
    }
    // Every digit is below 256 after the conversion above.
    let bytes: Vec<u8> = byte_digits.iter().map(|&d| d as u8).collect();
    unpack(&bytes)
}
