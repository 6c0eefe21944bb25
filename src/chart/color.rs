//! Slice colors: a fixed base color per category, randomly lightened.

use super::category::Category;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Upper bound (exclusive) of the white mix applied to a base color.
const MAX_TINT: f64 = 0.6;

/// Pick a `#RRGGBB` color for a chart label, tinted with `rng`.
pub fn assign_color<R: RngCore + ?Sized>(label: &str, rng: &mut R) -> String {
    let tint = rng.gen_range(0.0..MAX_TINT);
    let (r, g, b) = lighten(Category::from_label(label).base_color(), tint);
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Mix `color` with white; `amount` of 0.0 keeps it, 1.0 gives white.
fn lighten((r, g, b): (u8, u8, u8), amount: f64) -> (u8, u8, u8) {
    let amount = amount.clamp(0.0, 1.0);
    let mix = |c: u8| c + ((255 - c) as f64 * amount).round() as u8;
    (mix(r), mix(g), mix(b))
}

/// Color source for one rendering pass.
pub struct ColorPicker {
    rng: StdRng,
}

impl ColorPicker {
    /// Non-deterministic picker seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker; the same seed yields the same colors.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn pick(&mut self, label: &str) -> String {
        assign_color(label, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_hex;
    use proptest::prelude::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_lighten_bounds() {
        assert_eq!(lighten((0x10, 0x20, 0x30), 0.0), (0x10, 0x20, 0x30));
        assert_eq!(lighten((0x10, 0x20, 0x30), 1.0), (0xFF, 0xFF, 0xFF));
        assert_eq!(lighten((0, 0, 0), 0.5), (128, 128, 128));
    }

    #[test]
    fn test_tint_is_lighter_than_base() {
        let mut picker = ColorPicker::seeded(7);
        let base = Category::Audio.base_color();
        for _ in 0..50 {
            let (r, g, b) = parse_hex(&picker.pick("mp3")).unwrap();
            assert!(r >= base.0 && g >= base.1 && b >= base.2);
        }
    }

    #[test]
    fn test_seeded_picker_is_deterministic() {
        let mut a = ColorPicker::seeded(42);
        let mut b = ColorPicker::seeded(42);
        for label in ["mp3", "zip", "audio/mpeg", "unknown"] {
            assert_eq!(a.pick(label), b.pick(label));
        }
    }

    #[test]
    fn test_different_categories_differ() {
        let mut a = ColorPicker::seeded(1);
        let mut b = ColorPicker::seeded(1);
        // Same draw, different base color.
        assert_ne!(a.pick("mp3"), b.pick("zip"));
    }

    proptest! {
        #[test]
        fn prop_color_is_well_formed(label in ".*", seed in any::<u64>()) {
            let mut picker = ColorPicker::seeded(seed);
            let color = picker.pick(&label);
            prop_assert!(is_hex_color(&color), "bad color {}", color);
        }
    }
}
