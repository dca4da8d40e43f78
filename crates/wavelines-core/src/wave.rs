//! Curve parameters for a single line and the random source that produces them.
//!
//! Each line is drawn as two quadratic Bézier segments: a `Q` curve through the
//! first control point followed by a reflected `T` continuation. A [`Wave`]
//! holds the handful of integers needed to describe that shape; the
//! [`WaveGenerator`] draws fresh values for them and [`step_toward`] nudges one
//! wave a single unit closer to a target.

use crate::constants::{
    round_half_up, FractionRange, HEIGHT_RANGE, INTERVAL_RANGES, SPACE_BETWEEN_LINES, SVG_WIDTH,
};
use crate::error::{WaveError, WaveResult};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wave {
    pub space_between_lines: i32,
    pub wave_interval: [i32; 4],
    pub wave_heights: [i32; 2],
}

impl Wave {
    /// SVG path data for this wave drawn as line `index`.
    ///
    /// Coordinates are absolute; the second segment uses `T` so its control
    /// point is the reflection of the first.
    pub fn path_data(&self, index: usize) -> String {
        let spacer = self.space_between_lines * index as i32;
        let [i0, i1, i2, i3] = self.wave_interval;
        let [h0, h1] = self.wave_heights;
        format!(
            "M{},{} Q{},{} {},{} T{},{}",
            i0,
            spacer,
            i1,
            h0 + spacer,
            i2,
            spacer,
            i3,
            h1 + spacer
        )
    }
}

pub struct WaveGenerator {
    width: u32,
    space_between_lines: i32,
    rng: StdRng,
}

impl WaveGenerator {
    /// Seeded generators are reproducible; `None` draws a seed from the platform.
    pub fn new(width: u32, space_between_lines: i32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            width,
            space_between_lines,
            rng,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn space_between_lines(&self) -> i32 {
        self.space_between_lines
    }

    pub fn random_wave(&mut self) -> Wave {
        let mut wave_interval = [0; 4];
        for (slot, range) in INTERVAL_RANGES.iter().enumerate() {
            wave_interval[slot] = self.sample(range);
        }
        Wave {
            space_between_lines: self.space_between_lines,
            wave_interval,
            wave_heights: [self.height(), self.height()],
        }
    }

    /// Fresh value for interval slot `index`; only slots 0..4 exist.
    pub fn interval(&mut self, index: usize) -> WaveResult<i32> {
        let range = INTERVAL_RANGES
            .get(index)
            .ok_or(WaveError::InvalidIntervalIndex(index))?;
        Ok(self.sample(range))
    }

    pub fn height(&mut self) -> i32 {
        self.sample(&HEIGHT_RANGE)
    }

    fn sample(&mut self, range: &FractionRange) -> i32 {
        let w = self.width as f64;
        let r: f64 = self.rng.gen();
        round_half_up(range.min * w + r * (range.max - range.min) * w)
    }
}

impl Default for WaveGenerator {
    fn default() -> Self {
        Self::new(SVG_WIDTH, SPACE_BETWEEN_LINES, None)
    }
}

/// Move `current` one unit toward `target` on every component.
///
/// A component that already equals its target stays put and the target
/// component is redrawn from `generator`, so each component keeps chasing a
/// new goal independently of the others.
pub fn step_toward(current: &Wave, target: &mut Wave, generator: &mut WaveGenerator) -> Wave {
    let mut wave_interval = current.wave_interval;
    for slot in 0..wave_interval.len() {
        if step_component(&mut wave_interval[slot], target.wave_interval[slot]) {
            continue;
        }
        match generator.interval(slot) {
            Ok(value) => {
                target.wave_interval[slot] = value;
                log::trace!("[wave] interval {} reached, new target {}", slot, value);
            }
            Err(e) => log::error!("[wave] {}", e),
        }
    }

    let mut wave_heights = current.wave_heights;
    for (slot, height) in wave_heights.iter_mut().enumerate() {
        if !step_component(height, target.wave_heights[slot]) {
            target.wave_heights[slot] = generator.height();
            log::trace!(
                "[wave] height {} reached, new target {}",
                slot,
                target.wave_heights[slot]
            );
        }
    }

    Wave {
        space_between_lines: generator.space_between_lines(),
        wave_interval,
        wave_heights,
    }
}

// Returns false when the value already sits on its target.
#[inline]
fn step_component(value: &mut i32, target: i32) -> bool {
    match (*value).cmp(&target) {
        std::cmp::Ordering::Greater => *value -= 1,
        std::cmp::Ordering::Less => *value += 1,
        std::cmp::Ordering::Equal => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(interval: [i32; 4], heights: [i32; 2]) -> Wave {
        Wave {
            space_between_lines: SPACE_BETWEEN_LINES,
            wave_interval: interval,
            wave_heights: heights,
        }
    }

    #[test]
    fn path_data_offsets_heights_by_spacer() {
        let w = wave([-10, 40, 70, 250], [5, 15]);
        assert_eq!(w.path_data(1), "M-10,6 Q40,11 70,6 T250,21");
        assert_eq!(w.path_data(0), "M-10,0 Q40,5 70,0 T250,15");
    }

    #[test]
    fn interval_rejects_out_of_range_slot() {
        let mut gen = WaveGenerator::new(100, 6, Some(1));
        assert_eq!(gen.interval(4), Err(WaveError::InvalidIntervalIndex(4)));
        assert!(gen.interval(3).is_ok());
    }

    #[test]
    fn step_moves_each_component_by_one() {
        let mut gen = WaveGenerator::new(100, 6, Some(3));
        let current = wave([0, 10, 60, 250], [0, 20]);
        let mut target = wave([-5, 20, 50, 260], [5, 10]);
        let next = step_toward(&current, &mut target, &mut gen);
        assert_eq!(next.wave_interval, [-1, 11, 59, 251]);
        assert_eq!(next.wave_heights, [1, 19]);
        assert_eq!(target, wave([-5, 20, 50, 260], [5, 10]));
    }

    #[test]
    fn reached_component_redraws_only_that_target_component() {
        let mut gen = WaveGenerator::new(100, 6, Some(9));
        let current = wave([-5, 10, 60, 250], [0, 20]);
        let mut target = wave([-5, 20, 50, 260], [0, 10]);
        let next = step_toward(&current, &mut target, &mut gen);

        // reached components hold still this tick
        assert_eq!(next.wave_interval[0], -5);
        assert_eq!(next.wave_heights[0], 0);

        let (lo, hi) = INTERVAL_RANGES[0].bounds(100);
        assert!((lo..=hi).contains(&target.wave_interval[0]));
        let (lo, hi) = HEIGHT_RANGE.bounds(100);
        assert!((lo..=hi).contains(&target.wave_heights[0]));

        // untouched components keep their goals
        assert_eq!(&target.wave_interval[1..], &[20, 50, 260]);
        assert_eq!(target.wave_heights[1], 10);
    }

    #[test]
    fn every_reached_slot_redraws_within_its_own_range() {
        let mut gen = WaveGenerator::new(100, 6, Some(31));
        let current = wave([-7, 25, 75, 250], [3, 30]);
        for _ in 0..200 {
            let mut target = current;
            let next = step_toward(&current, &mut target, &mut gen);
            assert_eq!(next, current);
            for (slot, range) in INTERVAL_RANGES.iter().enumerate() {
                let (lo, hi) = range.bounds(100);
                assert!((lo..=hi).contains(&target.wave_interval[slot]));
            }
        }
    }

    #[test]
    fn step_resets_spacing_to_generator_constant() {
        let mut gen = WaveGenerator::new(100, 6, Some(5));
        let mut current = wave([0, 10, 60, 250], [0, 20]);
        current.space_between_lines = 11;
        let mut target = gen.random_wave();
        let next = step_toward(&current, &mut target, &mut gen);
        assert_eq!(next.space_between_lines, 6);
    }
}
