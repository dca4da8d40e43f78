use crate::constants::{DEFAULT_STROKE, HUE_BAND, HUE_BASE_MAX};
use rand::Rng;

/// How line strokes are colored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Every line uses the same color.
    Fixed(String),
    /// One random base hue per run, each line picking a hue within
    /// `HUE_BAND` degrees of it.
    HueBand,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        StrokeStyle::Fixed(DEFAULT_STROKE.to_string())
    }
}

impl StrokeStyle {
    pub fn strokes<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        match self {
            StrokeStyle::Fixed(color) => vec![color.clone(); count],
            StrokeStyle::HueBand => {
                let base = random_base_hue(rng);
                (0..count).map(|_| line_color(base, rng)).collect()
            }
        }
    }
}

pub fn random_base_hue<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..HUE_BASE_MAX)
}

/// Bright, slightly translucent color with a hue in `[base, base + HUE_BAND]`.
pub fn line_color<R: Rng + ?Sized>(base_hue: u32, rng: &mut R) -> String {
    let hue = rng.gen_range(base_hue..=base_hue + HUE_BAND);
    format!("hsla({}, 100%, 50%, 75%)", hue)
}
