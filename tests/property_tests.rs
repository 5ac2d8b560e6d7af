//! Property-based tests for the codec and converter round-trip guarantees.
//!
//! These complement the example-driven integration tests by checking the
//! contract across generated records, bases, and digit sequences.

use objtoken::{convert_base, decode, encode, pack, unpack, Color, ObjectRecord, OUTPUT_BASE};
use proptest::prelude::*;

fn arb_color() -> impl Strategy<Value = Color> {
    (
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<bool>(),
    )
        .prop_map(|(r, g, b, opacity, blending)| Color::new(r, g, b, opacity, blending))
}

fn arb_record() -> impl Strategy<Value = ObjectRecord> {
    (
        0u32..=65_535,
        -1.0e6f32..1.0e6f32,
        -1.0e6f32..1.0e6f32,
        (0u32..=255, 0u32..=255, 0u32..=255, 0u32..=255),
        (0u32..=255, 0u32..=255),
        arb_color(),
        arb_color(),
    )
        .prop_map(
            |(id, x, y, (xs, xa, ys, ya), (zl, zo), main, detail)| {
                ObjectRecord::new(id, x, y)
                    .with_x_scale_exp(xs)
                    .with_x_angle(xa)
                    .with_y_scale_exp(ys)
                    .with_y_angle(ya)
                    .with_z_layer(zl)
                    .with_z_order(zo)
                    .with_main_color(main)
                    .with_detail_color(detail)
            },
        )
}

/// A base together with a digit sequence valid in that base.
fn arb_based_digits() -> impl Strategy<Value = (u32, Vec<u32>)> {
    (2u32..600).prop_flat_map(|base| {
        prop::collection::vec(0..base, 0..40).prop_map(move |digits| (base, digits))
    })
}

proptest! {
    #[test]
    fn prop_codec_round_trip(record in arb_record()) {
        let bytes = pack(&record).unwrap();
        prop_assert_eq!(unpack(&bytes).unwrap(), record);
    }

    #[test]
    fn prop_pipeline_round_trip(record in arb_record()) {
        let token = encode(&record).unwrap();
        prop_assert!(token.iter().all(|&d| d < OUTPUT_BASE));
        prop_assert_eq!(decode(&token).unwrap(), record);
    }

    // Coordinates survive bit-for-bit even for NaN and infinity payloads.
    #[test]
    fn prop_float_bits_survive(x_bits in any::<u32>(), y_bits in any::<u32>()) {
        let record = ObjectRecord::new(1, f32::from_bits(x_bits), f32::from_bits(y_bits));
        let back = unpack(&pack(&record).unwrap()).unwrap();
        prop_assert_eq!(back.x.to_bits(), x_bits);
        prop_assert_eq!(back.y.to_bits(), y_bits);
    }

    #[test]
    fn prop_base_identity((base, digits) in arb_based_digits()) {
        prop_assert_eq!(convert_base(&digits, base, base).unwrap(), digits);
    }

    #[test]
    fn prop_base_round_trip(
        (from_base, digits) in arb_based_digits(),
        to_base in 2u32..600,
    ) {
        let converted = convert_base(&digits, from_base, to_base).unwrap();
        prop_assert!(converted.iter().all(|&d| d < to_base));
        prop_assert_eq!(convert_base(&converted, to_base, from_base).unwrap(), digits);
    }

    #[test]
    fn prop_leading_zero_count_is_preserved(
        zeros in 0usize..12,
        first in 1u32..256,
        rest in prop::collection::vec(0u32..256, 0..20),
    ) {
        let mut digits = vec![0; zeros];
        digits.push(first);
        digits.extend(rest);

        let out = convert_base(&digits, 256, 126).unwrap();
        let out_zeros = out.iter().take_while(|&&d| d == 0).count();
        prop_assert_eq!(out_zeros, zeros);
    }

    #[test]
    fn prop_all_zero_sequences_keep_their_length(
        len in 0usize..40,
        (from_base, to_base) in (2u32..600, 2u32..600),
    ) {
        let digits = vec![0u32; len];
        prop_assert_eq!(convert_base(&digits, from_base, to_base).unwrap(), digits);
    }
}
