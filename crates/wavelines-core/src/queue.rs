use crate::error::{WaveError, WaveResult};
use crate::wave::{step_toward, Wave, WaveGenerator};
use std::collections::VecDeque;

/// Fixed-length rolling window of waves, index-aligned with the drawn lines.
///
/// Index 0 is the oldest wave; the back holds the newest one, which is the
/// only wave ever stepped toward the target.
#[derive(Clone, Debug)]
pub struct WaveQueue {
    waves: VecDeque<Wave>,
}

impl WaveQueue {
    /// Fill a queue of `len` waves by repeatedly stepping `start` toward `target`.
    pub fn build(
        len: usize,
        start: Wave,
        target: &mut Wave,
        generator: &mut WaveGenerator,
    ) -> WaveResult<Self> {
        if len == 0 {
            return Err(WaveError::config("wave queue needs at least one wave"));
        }
        let mut waves = VecDeque::with_capacity(len);
        let mut current = start;
        for _ in 0..len {
            current = step_toward(&current, target, generator);
            waves.push_back(current);
        }
        Ok(Self { waves })
    }

    /// Drop the oldest wave and append one step past the newest.
    pub fn advance(&mut self, target: &mut Wave, generator: &mut WaveGenerator) {
        let Some(&newest) = self.waves.back() else {
            return;
        };
        self.waves.pop_front();
        self.waves.push_back(step_toward(&newest, target, generator));
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Wave> {
        self.waves.get(index)
    }

    pub fn newest(&self) -> Option<&Wave> {
        self.waves.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wave> {
        self.waves.iter()
    }

    /// Path data for every wave, paired with its line index.
    pub fn paths(&self) -> impl Iterator<Item = (usize, String)> + '_ {
        self.waves
            .iter()
            .enumerate()
            .map(|(i, w)| (i, w.path_data(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_empty_queue() {
        let mut gen = WaveGenerator::new(100, 6, Some(1));
        let start = gen.random_wave();
        let mut target = gen.random_wave();
        assert!(matches!(
            WaveQueue::build(0, start, &mut target, &mut gen),
            Err(WaveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn advance_shifts_waves_forward() {
        let mut gen = WaveGenerator::new(100, 6, Some(2));
        let start = gen.random_wave();
        let mut target = gen.random_wave();
        let mut queue = WaveQueue::build(5, start, &mut target, &mut gen).unwrap();
        let before: Vec<Wave> = queue.iter().copied().collect();
        queue.advance(&mut target, &mut gen);
        let after: Vec<Wave> = queue.iter().copied().collect();
        assert_eq!(&after[..4], &before[1..]);
    }
}
