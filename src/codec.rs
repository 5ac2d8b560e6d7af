//! Fixed-layout binary serialization of [`ObjectRecord`].
//!
//! The wire layout is 26 bytes, little-endian, in a fixed field order:
//!
//! | Offset | Size | Field                                        |
//! |--------|------|----------------------------------------------|
//! | 0      | 2    | `id` (unsigned 16-bit)                       |
//! | 2      | 4    | `x` (IEEE-754 single precision)              |
//! | 6      | 4    | `y` (IEEE-754 single precision)              |
//! | 10     | 1    | `x_scale_exp`                                |
//! | 11     | 1    | `x_angle`                                    |
//! | 12     | 1    | `y_scale_exp`                                |
//! | 13     | 1    | `y_angle`                                    |
//! | 14     | 1    | `z_layer`                                    |
//! | 15     | 1    | `z_order`                                    |
//! | 16     | 5    | `main_color` (r, g, b, opacity, blend flag)  |
//! | 21     | 5    | `detail_color` (same sub-layout)             |
//!
//! [`pack`] rejects any field that does not fit its reserved width rather
//! than truncating it; [`unpack`] requires exactly [`PACKED_LEN`] bytes.
//! Both are pure: no I/O, no shared state.
//!
//! ## Round-trip contract
//!
//! `unpack(&pack(&r)?)? == r` for every record whose float fields are
//! exactly representable in single precision, which includes every record a
//! prior `unpack` produced.

use crate::error::{Error, Result};
use crate::record::{Color, ObjectRecord};

/// Length in bytes of a packed [`ObjectRecord`].
pub const PACKED_LEN: usize = 26;

/// Checks that `value` fits in the width reserved for `field` on the wire.
fn checked(field: &'static str, value: u32, max: u32) -> Result<u32> {
    if value > max {
        return Err(Error::range(field, value, max));
    }
    Ok(value)
}

/// Serializes a record into its fixed 26-byte little-endian layout.
///
/// # Errors
///
/// Returns [`Error::Range`] naming the first field whose value exceeds its
/// reserved bit width (`id` must fit 16 bits, the code fields 8 bits each).
/// Nothing is ever wrapped or truncated.
///
/// # Examples
///
/// ```rust
/// use objtoken::{pack, ObjectRecord};
///
/// let record = ObjectRecord::new(1, 5205.0, 1245.0);
/// let bytes = pack(&record)?;
/// assert_eq!(&bytes[..2], &[1, 0]);
/// assert_eq!(&bytes[2..6], &5205.0_f32.to_le_bytes());
/// # Ok::<(), objtoken::Error>(())
/// ```
pub fn pack(record: &ObjectRecord) -> Result<[u8; PACKED_LEN]> {
    let id = checked("id", record.id, u16::MAX as u32)? as u16;

    let mut out = [0u8; PACKED_LEN];
    out[0..2].copy_from_slice(&id.to_le_bytes());
    out[2..6].copy_from_slice(&record.x.to_le_bytes());
    out[6..10].copy_from_slice(&record.y.to_le_bytes());
    out[10] = checked("x_scale_exp", record.x_scale_exp, u8::MAX as u32)? as u8;
    out[11] = checked("x_angle", record.x_angle, u8::MAX as u32)? as u8;
    out[12] = checked("y_scale_exp", record.y_scale_exp, u8::MAX as u32)? as u8;
    out[13] = checked("y_angle", record.y_angle, u8::MAX as u32)? as u8;
    out[14] = checked("z_layer", record.z_layer, u8::MAX as u32)? as u8;
    out[15] = checked("z_order", record.z_order, u8::MAX as u32)? as u8;
    pack_color(&record.main_color, &mut out[16..21]);
    pack_color(&record.detail_color, &mut out[21..26]);
    Ok(out)
}

fn pack_color(color: &Color, out: &mut [u8]) {
    out[0] = color.r;
    out[1] = color.g;
    out[2] = color.b;
    out[3] = color.opacity;
    out[4] = u8::from(color.blending);
}

/// Reconstructs a record from its fixed 26-byte layout.
///
/// The blending flag decodes as `true` for ANY nonzero byte, not only 1;
/// `pack` itself only ever writes 0 or 1, so the asymmetry is invisible on
/// round trips but keeps foreign input readable.
///
/// # Errors
///
/// Returns [`Error::Length`] unless the input is exactly [`PACKED_LEN`]
/// bytes.
///
/// # Examples
///
/// ```rust
/// use objtoken::{pack, unpack, ObjectRecord};
///
/// let record = ObjectRecord::new(1, 5205.0, 1245.0).with_y_angle(18);
/// let bytes = pack(&record)?;
/// assert_eq!(unpack(&bytes)?, record);
/// # Ok::<(), objtoken::Error>(())
/// ```
pub fn unpack(bytes: &[u8]) -> Result<ObjectRecord> {
    if bytes.len() != PACKED_LEN {
        return Err(Error::length(PACKED_LEN, bytes.len()));
    }

    Ok(ObjectRecord {
        id: u16::from_le_bytes([bytes[0], bytes[1]]) as u32,
        x: f32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]),
        y: f32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]),
        x_scale_exp: bytes[10] as u32,
        x_angle: bytes[11] as u32,
        y_scale_exp: bytes[12] as u32,
        y_angle: bytes[13] as u32,
        z_layer: bytes[14] as u32,
        z_order: bytes[15] as u32,
        main_color: unpack_color(&bytes[16..21]),
        detail_color: unpack_color(&bytes[21..26]),
    })
}

fn unpack_color(bytes: &[u8]) -> Color {
    Color::new(bytes[0], bytes[1], bytes[2], bytes[3], bytes[4] != 0)
}
