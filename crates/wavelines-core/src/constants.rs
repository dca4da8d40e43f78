// Generation and timing constants shared by the core and the web frontend.

// Scene layout
pub const NUMBER_OF_LINES: usize = 40;
pub const SVG_WIDTH: u32 = 100; // width unit all generation ranges scale with
pub const SPACE_BETWEEN_LINES: i32 = 6; // vertical offset multiplier per line index

// Timing
pub const FRAMES_PER_SECOND: u32 = 35;

/// Closed range expressed as fractions of the width unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractionRange {
    pub min: f64,
    pub max: f64,
}

impl FractionRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Integer bounds of the range for a given width unit.
    pub fn bounds(&self, width: u32) -> (i32, i32) {
        let w = width as f64;
        (round_half_up(self.min * w), round_half_up(self.max * w))
    }
}

// Horizontal control coordinates, one range per interval slot
pub const INTERVAL_RANGES: [FractionRange; 4] = [
    FractionRange::new(-0.2, 0.0), // start point sits left of the surface
    FractionRange::new(0.0, 0.5),  // first control point
    FractionRange::new(0.5, 1.0),  // midpoint
    FractionRange::new(2.0, 3.0),  // end point, well past the right edge
];

// Vertical control offsets for both curve segments
pub const HEIGHT_RANGE: FractionRange = FractionRange::new(-0.1, 0.4);

// Line palette
pub const HUE_BASE_MAX: u32 = 325; // base hue drawn from [0, HUE_BASE_MAX)
pub const HUE_BAND: u32 = 30; // per-line hue drawn from [base, base + HUE_BAND]
pub const DEFAULT_STROKE: &str = "#f2f2f2";

/// Round to the nearest integer with halves going up, like `Math.round`.
#[inline]
pub fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_matches_browser_rounding() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(-0.4), 0);
    }

    #[test]
    fn bounds_scale_with_width() {
        assert_eq!(INTERVAL_RANGES[0].bounds(100), (-20, 0));
        assert_eq!(INTERVAL_RANGES[3].bounds(100), (200, 300));
        assert_eq!(HEIGHT_RANGE.bounds(100), (-10, 40));
        assert_eq!(HEIGHT_RANGE.bounds(50), (-5, 20));
    }

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn interval_ranges_are_ordered() {
        for pair in INTERVAL_RANGES.windows(2) {
            assert!(pair[0].max <= pair[1].min);
        }
        assert!(HEIGHT_RANGE.min < HEIGHT_RANGE.max);
    }
}
