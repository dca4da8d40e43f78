use crate::constants::HOVER_REGION_CLASS;
use crate::dom;
use crate::frame::FrameLoop;
use web_sys as web;

/// Let the first hover region control the loop: it pauses now, entering
/// resumes, leaving pauses. Returns false when the page has no such region, in
/// which case the loop keeps running untouched.
pub fn wire_hover_region(document: &web::Document, frame_loop: &FrameLoop) -> bool {
    let region = document
        .get_elements_by_class_name(HOVER_REGION_CLASS)
        .item(0);
    if !frame_loop.attach_hover(region.is_some()) {
        return false;
    }
    let Some(region) = region else {
        return false;
    };

    let on_enter = frame_loop.clone();
    dom::add_listener(&region, "mouseenter", move || on_enter.pointer_enter());

    let on_leave = frame_loop.clone();
    dom::add_listener(&region, "mouseleave", move || on_leave.pointer_leave());

    log::info!("[hover] .{} controls the animation", HOVER_REGION_CLASS);
    true
}

/// Stop the loop and remove the lines when the page goes away.
pub fn wire_teardown(frame_loop: &FrameLoop) {
    if let Some(window) = web::window() {
        let on_hide = frame_loop.clone();
        dom::add_listener(&window, "pagehide", move || on_hide.teardown());
    }
}
