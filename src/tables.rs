//! Immutable lookup tables for discretized object attributes.
//!
//! The editor-facing tooling works in continuous units (scale factors,
//! signed z-layers); the wire layout carries one-byte codes. These tables
//! define the code assignments. They are `const`, initialized once, and
//! never mutated — the parsing layer that normalizes raw editor attributes
//! takes them as input and performs its own nearest-value snapping; this
//! crate only does exact lookups.
//!
//! ## Examples
//!
//! ```rust
//! use objtoken::tables::{scale_code, z_layer_code};
//!
//! assert_eq!(scale_code(1.0), Some(0));
//! assert_eq!(scale_code(2.0), Some(12));
//! assert_eq!(z_layer_code(-5), Some(0));
//! assert_eq!(z_layer_code(4), None);
//! ```

/// Scale factor to scale-exponent code, ascending by factor.
///
/// Factors step by a twelfth power of two per code, rounded to three
/// decimals, covering [0.5, 2.0]. Codes wrap: factors below 1.0 occupy the
/// top of the byte range, 1.0 itself is code 0.
// Upstream assigns 254 to both 0.841 and 0.891; 253 is never emitted.
pub const SCALE_CODES: &[(f32, u8)] = &[
    (0.5, 244),
    (0.53, 245),
    (0.561, 246),
    (0.595, 247),
    (0.63, 248),
    (0.667, 249),
    (0.707, 250),
    (0.749, 251),
    (0.794, 252),
    (0.841, 254),
    (0.891, 254),
    (0.944, 255),
    (1.0, 0),
    (1.059, 1),
    (1.122, 2),
    (1.189, 3),
    (1.26, 4),
    (1.335, 5),
    (1.414, 6),
    (1.498, 7),
    (1.587, 8),
    (1.682, 9),
    (1.782, 10),
    (1.888, 11),
    (2.0, 12),
];

/// Signed editor z-layer to its one-byte wire code.
pub const Z_LAYER_CODES: &[(i32, u8)] = &[
    (-5, 0),
    (-3, 1),
    (-1, 2),
    (1, 3),
    (3, 4),
    (5, 5),
    (7, 6),
    (9, 7),
    (11, 8),
];

/// Looks up the code for an exact scale factor.
///
/// Returns `None` when the factor is not a table entry; snapping arbitrary
/// factors to the nearest entry is the normalizing caller's job.
#[must_use]
pub fn scale_code(factor: f32) -> Option<u8> {
    SCALE_CODES
        .iter()
        .find(|&&(f, _)| f == factor)
        .map(|&(_, code)| code)
}

/// Looks up the code for an exact signed editor z-layer.
#[must_use]
pub fn z_layer_code(editor_layer: i32) -> Option<u8> {
    Z_LAYER_CODES
        .iter()
        .find(|&&(layer, _)| layer == editor_layer)
        .map(|&(_, code)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_scale_is_code_zero() {
        assert_eq!(scale_code(1.0), Some(0));
    }

    #[test]
    fn shrinking_scales_occupy_the_top_of_the_byte() {
        assert_eq!(scale_code(0.5), Some(244));
        assert_eq!(scale_code(0.944), Some(255));
        assert_eq!(scale_code(2.0), Some(12));
    }

    #[test]
    fn unknown_factors_are_not_snapped() {
        assert_eq!(scale_code(1.5), None);
        assert_eq!(scale_code(0.0), None);
    }

    #[test]
    fn z_layers_map_odd_values_only() {
        for (layer, code) in Z_LAYER_CODES {
            assert_eq!(z_layer_code(*layer), Some(*code));
        }
        assert_eq!(z_layer_code(0), None);
        assert_eq!(z_layer_code(13), None);
    }

    #[test]
    fn scale_factors_are_strictly_ascending() {
        for pair in SCALE_CODES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
