//! Controller tying the wave queue, its target and the frame scheduler to a
//! drawing surface.

use crate::config::AnimatorConfig;
use crate::error::{WaveError, WaveResult};
use crate::queue::WaveQueue;
use crate::scheduler::{FrameHost, LoopState, Scheduler, Transition};
use crate::wave::{Wave, WaveGenerator};
use std::time::Duration;

/// Receives path data for a fixed set of lines.
pub trait LineSurface {
    fn line_count(&self) -> usize;
    fn draw_line(&mut self, index: usize, path: &str);
}

/// Everything that changes while the animation runs.
pub struct AnimatorState {
    pub generator: WaveGenerator,
    pub queue: WaveQueue,
    /// Goal the newest wave steps toward. Components are redrawn in place as
    /// they are reached.
    pub target: Wave,
    pub scheduler: Scheduler,
}

pub struct Animator<S: LineSurface> {
    config: AnimatorConfig,
    state: AnimatorState,
    surface: S,
}

impl<S: LineSurface> Animator<S> {
    pub fn new(config: AnimatorConfig, surface: S, seed: Option<u64>) -> WaveResult<Self> {
        config.validate()?;
        if surface.line_count() != config.number_of_lines {
            return Err(WaveError::LineCountMismatch {
                waves: config.number_of_lines,
                lines: surface.line_count(),
            });
        }

        let mut generator =
            WaveGenerator::new(config.svg_width, config.space_between_lines, seed);
        let start = generator.random_wave();
        let mut target = generator.random_wave();
        let queue = WaveQueue::build(config.number_of_lines, start, &mut target, &mut generator)?;
        log::debug!(
            "[animator] {} lines, width {}, {} fps",
            config.number_of_lines,
            config.svg_width,
            config.frames_per_second
        );

        let scheduler = Scheduler::new(config.frames_per_second);
        Ok(Self {
            config,
            state: AnimatorState {
                generator,
                queue,
                target,
                scheduler,
            },
            surface,
        })
    }

    /// Draw every line from the queue, then advance the queue by one wave.
    pub fn tick(&mut self) {
        let AnimatorState {
            generator,
            queue,
            target,
            ..
        } = &mut self.state;
        for (i, path) in queue.paths() {
            self.surface.draw_line(i, &path);
        }
        queue.advance(target, generator);
    }

    /// Request the first frame if the loop is running.
    pub fn launch(&mut self, host: &mut impl FrameHost) {
        self.state.scheduler.schedule(host);
    }

    pub fn start(&mut self, host: &mut impl FrameHost) -> Transition {
        self.state.scheduler.start(host)
    }

    pub fn stop(&mut self, host: &mut impl FrameHost) -> Transition {
        self.state.scheduler.stop(host)
    }

    /// Frame callback entry point; ticks when the fixed interval has elapsed.
    pub fn on_frame(&mut self, now: Duration, host: &mut impl FrameHost) -> bool {
        let due = self.state.scheduler.on_frame(now, host);
        if due {
            self.tick();
        }
        due
    }

    /// Hand the loop to a hover region when the page has one: the loop pauses
    /// until the pointer enters. Without a region nothing changes.
    pub fn attach_hover(&mut self, region_present: bool, host: &mut impl FrameHost) -> bool {
        if region_present {
            self.stop(host);
        }
        region_present
    }

    pub fn on_pointer_enter(&mut self, host: &mut impl FrameHost) -> Transition {
        self.start(host)
    }

    pub fn on_pointer_leave(&mut self, host: &mut impl FrameHost) -> Transition {
        self.stop(host)
    }

    pub fn loop_state(&self) -> LoopState {
        self.state.scheduler.state()
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Stop the loop and hand the surface back.
    pub fn teardown(mut self, host: &mut impl FrameHost) -> S {
        self.state.scheduler.stop(host);
        self.surface
    }
}
