//! Fixed-rate tick scheduling on top of a single frame-sync primitive.
//!
//! The browser offers `requestAnimationFrame`, which fires once per display
//! refresh. The scheduler keeps at most one such request pending, measures the
//! time between frames and reports a tick whenever a full tick interval has
//! elapsed. Late frames produce one late tick; missed ticks are never replayed.

use std::time::Duration;

pub type FrameHandle = i32;

/// Something that can call back on the next display frame.
pub trait FrameHost {
    /// Ask for one callback. `None` means the request could not be made.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Outcome of a `start`/`stop` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Started,
    Stopped,
    Unchanged,
}

#[derive(Debug)]
pub struct Scheduler {
    /// Current loop state. Starts as `Running`; only a running scheduler holds
    /// a pending frame request.
    state: LoopState,
    pending: Option<FrameHandle>,
    interval: Duration,
    accumulated: Duration,
    last_frame: Option<Duration>,
}

impl Scheduler {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            state: LoopState::Running,
            pending: None,
            interval: Duration::from_nanos(1_000_000_000 / frames_per_second.max(1) as u64),
            accumulated: Duration::ZERO,
            last_frame: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Make sure a running scheduler has a frame request in flight.
    pub fn schedule(&mut self, host: &mut impl FrameHost) {
        if self.is_running() && self.pending.is_none() {
            self.pending = host.request_frame();
        }
    }

    /// Resume ticking. Calling this while already running does nothing, so
    /// repeated starts never stack extra frame requests.
    pub fn start(&mut self, host: &mut impl FrameHost) -> Transition {
        if self.is_running() {
            return Transition::Unchanged;
        }
        self.state = LoopState::Running;
        self.accumulated = Duration::ZERO;
        self.last_frame = None;
        self.schedule(host);
        log::debug!("[scheduler] started");
        Transition::Started
    }

    /// Stop ticking and cancel the pending frame request, if any.
    pub fn stop(&mut self, host: &mut impl FrameHost) -> Transition {
        if !self.is_running() {
            return Transition::Unchanged;
        }
        self.state = LoopState::Stopped;
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
        log::debug!("[scheduler] stopped");
        Transition::Stopped
    }

    /// Handle a delivered frame at time `now`. Returns true when a tick is due.
    pub fn on_frame(&mut self, now: Duration, host: &mut impl FrameHost) -> bool {
        self.pending = None;
        if !self.is_running() {
            return false;
        }
        let elapsed = self
            .last_frame
            .map(|last| now.saturating_sub(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        self.accumulated += elapsed;
        let due = self.accumulated >= self.interval;
        if due {
            self.accumulated = Duration::ZERO;
        }
        self.schedule(host);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHost {
        next: FrameHandle,
        active: Vec<FrameHandle>,
    }

    impl CountingHost {
        // Deliver the oldest pending frame.
        fn fire(&mut self) -> bool {
            if self.active.is_empty() {
                return false;
            }
            self.active.remove(0);
            true
        }
    }

    impl FrameHost for CountingHost {
        fn request_frame(&mut self) -> Option<FrameHandle> {
            self.next += 1;
            self.active.push(self.next);
            Some(self.next)
        }
        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.active.retain(|h| *h != handle);
        }
    }

    fn frame(s: &mut Scheduler, host: &mut CountingHost, ms: u64) -> bool {
        assert!(host.fire(), "no frame was pending");
        s.on_frame(Duration::from_millis(ms), host)
    }

    #[test]
    fn starts_in_running_state() {
        let s = Scheduler::new(35);
        assert_eq!(s.state(), LoopState::Running);
        assert!(!s.has_pending_frame());
    }

    #[test]
    fn stop_cancels_pending_request() {
        let mut host = CountingHost::default();
        let mut s = Scheduler::new(35);
        s.schedule(&mut host);
        assert_eq!(host.active.len(), 1);
        assert_eq!(s.stop(&mut host), Transition::Stopped);
        assert!(host.active.is_empty());
        assert!(!s.has_pending_frame());
    }

    #[test]
    fn frame_after_stop_does_not_tick_or_reschedule() {
        let mut host = CountingHost::default();
        let mut s = Scheduler::new(35);
        s.stop(&mut host);
        assert!(!s.on_frame(Duration::from_secs(5), &mut host));
        assert!(host.active.is_empty());
    }

    #[test]
    fn ticks_once_per_interval_without_catch_up() {
        let mut host = CountingHost::default();
        let mut s = Scheduler::new(10); // 100ms
        s.schedule(&mut host);
        assert!(!frame(&mut s, &mut host, 0));
        assert!(!frame(&mut s, &mut host, 60));
        assert!(frame(&mut s, &mut host, 120));
        // a long stall yields one tick, not several
        assert!(frame(&mut s, &mut host, 1000));
        assert!(!frame(&mut s, &mut host, 1010));
        assert_eq!(host.active.len(), 1);
    }

    #[test]
    fn restart_waits_a_full_interval() {
        let mut host = CountingHost::default();
        let mut s = Scheduler::new(10);
        s.schedule(&mut host);
        frame(&mut s, &mut host, 0);
        s.stop(&mut host);
        assert_eq!(s.start(&mut host), Transition::Started);
        assert!(!frame(&mut s, &mut host, 5000));
        assert!(frame(&mut s, &mut host, 5100));
    }
}
