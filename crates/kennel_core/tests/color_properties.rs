use kennel_core::{hex_to_hsl, Color};
use proptest::prelude::*;

fn parse_triple(triple: &str) -> (u32, u32, u32) {
    let parts: Vec<&str> = triple.split(' ').collect();
    assert_eq!(parts.len(), 3, "unexpected triple {triple:?}");
    let h = parts[0].parse().expect("hue");
    let s = parts[1].trim_end_matches('%').parse().expect("saturation");
    let l = parts[2].trim_end_matches('%').parse().expect("lightness");
    (h, s, l)
}

proptest! {
    #[test]
    fn hsl_components_stay_in_range(hex in 0u32..=0xFF_FFFF) {
        let input = format!("#{hex:06x}");
        let (h, s, l) = parse_triple(&hex_to_hsl(&input).unwrap());
        prop_assert!(h < 360);
        prop_assert!(s <= 100);
        prop_assert!(l <= 100);
    }

    #[test]
    fn conversion_is_pure(hex in 0u32..=0xFF_FFFF) {
        let input = format!("#{hex:06X}");
        prop_assert_eq!(hex_to_hsl(&input).unwrap(), hex_to_hsl(&input).unwrap());
    }

    #[test]
    fn grays_are_achromatic(v in 0u8..=255) {
        let hsl = Color::rgb(v, v, v).to_hsl();
        prop_assert_eq!(hsl.h, 0);
        prop_assert_eq!(hsl.s, 0);
    }

    #[test]
    fn wrong_length_is_rejected(digits in "[0-9a-f]{0,5}|[0-9a-f]{7,9}") {
        let input = format!("#{digits}");
        prop_assert!(hex_to_hsl(&input).is_err());
    }
}
