use crate::dom::SvgLines;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wavelines_core::{Animator, FrameHandle, FrameHost, Transition};
use web_sys as web;

/// Emptied on teardown; frames and events arriving afterwards find nothing to drive.
pub type SharedAnimator = Rc<RefCell<Option<Animator<SvgLines>>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` with a single long-lived callback.
#[derive(Clone)]
pub struct RafHost {
    callback: FrameCallback,
}

impl FrameHost for RafHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

/// Drives a shared animator from animation frames. Cheap to clone into event
/// handlers; every clone controls the same loop.
#[derive(Clone)]
pub struct FrameLoop {
    animator: SharedAnimator,
    host: RafHost,
}

impl FrameLoop {
    pub fn new(animator: Animator<SvgLines>) -> Self {
        let animator: SharedAnimator = Rc::new(RefCell::new(Some(animator)));
        let host = RafHost {
            callback: Rc::new(RefCell::new(None)),
        };
        let animator_tick = animator.clone();
        let mut host_tick = host.clone();
        *host.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let now = Duration::from_secs_f64(timestamp_ms.max(0.0) / 1000.0);
            if let Some(a) = animator_tick.borrow_mut().as_mut() {
                a.on_frame(now, &mut host_tick);
            }
        }) as Box<dyn FnMut(f64)>));
        Self { animator, host }
    }

    fn with_animator<T>(
        &self,
        f: impl FnOnce(&mut Animator<SvgLines>, &mut RafHost) -> T,
    ) -> Option<T> {
        let mut host = self.host.clone();
        self.animator.borrow_mut().as_mut().map(|a| f(a, &mut host))
    }

    /// Draw the current queue immediately, outside the frame cadence.
    pub fn draw_now(&self) {
        self.with_animator(|a, _| a.tick());
    }

    pub fn launch(&self) {
        self.with_animator(|a, host| a.launch(host));
    }

    pub fn attach_hover(&self, region_present: bool) -> bool {
        self.with_animator(|a, host| a.attach_hover(region_present, host))
            .unwrap_or(false)
    }

    pub fn pointer_enter(&self) {
        if self.with_animator(|a, host| a.on_pointer_enter(host)) == Some(Transition::Started) {
            log::debug!("[frame] resumed");
        }
    }

    pub fn pointer_leave(&self) {
        if self.with_animator(|a, host| a.on_pointer_leave(host)) == Some(Transition::Stopped) {
            log::debug!("[frame] paused");
        }
    }

    /// Stop the loop for good and remove the lines from the page.
    pub fn teardown(&self) {
        let Some(animator) = self.animator.borrow_mut().take() else {
            return;
        };
        let mut host = self.host.clone();
        animator.teardown(&mut host).remove();
        log::info!("[frame] torn down");
    }
}
