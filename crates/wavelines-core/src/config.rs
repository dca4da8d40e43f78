use crate::constants::{FRAMES_PER_SECOND, NUMBER_OF_LINES, SPACE_BETWEEN_LINES, SVG_WIDTH};
use crate::error::{WaveError, WaveResult};
use crate::palette::StrokeStyle;

/// Tunables for one animator. `Default` mirrors the constants in `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub number_of_lines: usize,
    pub svg_width: u32,
    pub frames_per_second: u32,
    pub space_between_lines: i32,
    pub stroke: StrokeStyle,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            number_of_lines: NUMBER_OF_LINES,
            svg_width: SVG_WIDTH,
            frames_per_second: FRAMES_PER_SECOND,
            space_between_lines: SPACE_BETWEEN_LINES,
            stroke: StrokeStyle::default(),
        }
    }
}

impl AnimatorConfig {
    pub fn validate(&self) -> WaveResult<()> {
        if self.number_of_lines == 0 {
            return Err(WaveError::config("number_of_lines must be at least 1"));
        }
        if self.svg_width == 0 {
            return Err(WaveError::config("svg_width must be positive"));
        }
        if self.frames_per_second == 0 {
            return Err(WaveError::config("frames_per_second must be positive"));
        }
        Ok(())
    }
}
