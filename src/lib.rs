#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wavelines_core::{Animator, AnimatorConfig};

mod constants;
mod dom;
mod events;
mod frame;

use crate::constants::LINES_CONTAINER_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wavelines starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = AnimatorConfig::default();
    let strokes = config
        .stroke
        .strokes(config.number_of_lines, &mut rand::thread_rng());
    let lines = dom::SvgLines::create(&document, LINES_CONTAINER_ID, &strokes)?;
    let animator = Animator::new(config, lines, None)?;

    let frame_loop = frame::FrameLoop::new(animator);
    // Lines are visible right away, even if the hover region keeps the loop paused
    frame_loop.draw_now();
    frame_loop.launch();

    if !events::wire_hover_region(&document, &frame_loop) {
        log::info!("[hover] no hover region, animating continuously");
    }
    events::wire_teardown(&frame_loop);
    Ok(())
}
