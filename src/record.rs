//! Value types for placeable objects.
//!
//! This module provides the two immutable records the codec operates on:
//!
//! - [`Color`]: one RGBA-plus-blend-flag color, every channel a single byte
//! - [`ObjectRecord`]: one placeable object, with identity, position,
//!   discretized transform codes, layering, and two owned colors
//!
//! Both types derive `Serialize`/`Deserialize`, so record lists round-trip
//! through JSON with the same field names the upstream tooling emits.
//!
//! ## Examples
//!
//! ```rust
//! use objtoken::{Color, ObjectRecord};
//!
//! let record = ObjectRecord::new(1, 5205.0, 1245.0)
//!     .with_y_angle(18)
//!     .with_z_layer(3)
//!     .with_main_color(Color::new(255, 0, 0, 255, true));
//!
//! assert_eq!(record.id, 1);
//! assert_eq!(record.z_layer, 3);
//! ```

use serde::{Deserialize, Serialize};

/// An RGBA color with a blending flag.
///
/// Every channel fits in one byte by construction; the `u8` field types make
/// an out-of-range channel unrepresentable, so no runtime validation is
/// needed. The default is fully-opaque white with blending off, the same
/// fallback the upstream color palette uses.
///
/// # Examples
///
/// ```rust
/// use objtoken::Color;
///
/// let white = Color::default();
/// assert_eq!(white, Color::new(255, 255, 255, 255, false));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub opacity: u8,
    pub blending: bool,
}

impl Color {
    /// Creates a color from its four channels and blending flag.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, opacity: u8, blending: bool) -> Self {
        Color {
            r,
            g,
            b,
            opacity,
            blending,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::new(255, 255, 255, 255, false)
    }
}

/// One placeable object: identity, position, transform codes, layering, and
/// two owned colors.
///
/// Integer fields are deliberately wider than the space they occupy in the
/// 19-byte wire layout (`id` uses 16 bits on the wire, everything else 8),
/// so [`pack`](crate::pack) can detect an overflowing value and reject it
/// with a [`Range`](crate::Error::Range) error instead of truncating.
///
/// The angle fields are 5-degree-step indexes in `[0, 71]`; the scale
/// exponent fields index the fixed table in [`tables`](crate::tables). The
/// record never interprets these codes, it only transports them.
///
/// # Examples
///
/// ```rust
/// use objtoken::ObjectRecord;
///
/// // Required fields up front, everything else via builders.
/// let record = ObjectRecord::new(1, 5205.0, 1245.0)
///     .with_y_angle(18)
///     .with_z_layer(3);
///
/// assert_eq!(record.x_angle, 0);
/// assert_eq!(record.y_angle, 18);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub x_scale_exp: u32,
    #[serde(default)]
    pub x_angle: u32,
    #[serde(default)]
    pub y_scale_exp: u32,
    #[serde(default)]
    pub y_angle: u32,
    #[serde(default)]
    pub z_layer: u32,
    #[serde(default)]
    pub z_order: u32,
    #[serde(default)]
    pub main_color: Color,
    #[serde(default)]
    pub detail_color: Color,
}

impl ObjectRecord {
    /// Creates a record with the given identity and position; every other
    /// field takes its default (zero codes, opaque white colors).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objtoken::{Color, ObjectRecord};
    ///
    /// let record = ObjectRecord::new(1, 5205.0, 1245.0);
    /// assert_eq!(record.z_order, 0);
    /// assert_eq!(record.main_color, Color::default());
    /// ```
    #[must_use]
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        ObjectRecord {
            id,
            x,
            y,
            x_scale_exp: 0,
            x_angle: 0,
            y_scale_exp: 0,
            y_angle: 0,
            z_layer: 0,
            z_order: 0,
            main_color: Color::default(),
            detail_color: Color::default(),
        }
    }

    /// Sets the x-axis scale exponent code.
    #[must_use]
    pub fn with_x_scale_exp(mut self, code: u32) -> Self {
        self.x_scale_exp = code;
        self
    }

    /// Sets the x-axis angle code (5-degree steps).
    #[must_use]
    pub fn with_x_angle(mut self, code: u32) -> Self {
        self.x_angle = code;
        self
    }

    /// Sets the y-axis scale exponent code.
    #[must_use]
    pub fn with_y_scale_exp(mut self, code: u32) -> Self {
        self.y_scale_exp = code;
        self
    }

    /// Sets the y-axis angle code (5-degree steps).
    #[must_use]
    pub fn with_y_angle(mut self, code: u32) -> Self {
        self.y_angle = code;
        self
    }

    /// Sets the z-layer code.
    #[must_use]
    pub fn with_z_layer(mut self, code: u32) -> Self {
        self.z_layer = code;
        self
    }

    /// Sets the z-order within the layer.
    #[must_use]
    pub fn with_z_order(mut self, code: u32) -> Self {
        self.z_order = code;
        self
    }

    /// Sets the main color.
    #[must_use]
    pub fn with_main_color(mut self, color: Color) -> Self {
        self.main_color = color;
        self
    }

    /// Sets the detail color.
    #[must_use]
    pub fn with_detail_color(mut self, color: Color) -> Self {
        self.detail_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_opaque_white() {
        let color = Color::default();
        assert_eq!(color.r, 255);
        assert_eq!(color.g, 255);
        assert_eq!(color.b, 255);
        assert_eq!(color.opacity, 255);
        assert!(!color.blending);
    }

    #[test]
    fn builders_set_only_their_field() {
        let record = ObjectRecord::new(7, 1.5, -2.5).with_y_angle(18);
        assert_eq!(record.id, 7);
        assert_eq!(record.y_angle, 18);
        assert_eq!(record.x_angle, 0);
        assert_eq!(record.x_scale_exp, 0);
    }

    #[test]
    fn json_field_names_match_upstream() {
        let record = ObjectRecord::new(1, 5205.0, 1245.0).with_z_layer(3);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["z_layer"], 3);
        assert_eq!(json["main_color"]["opacity"], 255);
        assert_eq!(json["main_color"]["blending"], false);
    }

    #[test]
    fn json_missing_optional_fields_take_defaults() {
        let record: ObjectRecord =
            serde_json::from_str(r#"{"id": 1, "x": 5205.0, "y": 1245.0}"#).unwrap();
        assert_eq!(record, ObjectRecord::new(1, 5205.0, 1245.0));
    }
}
