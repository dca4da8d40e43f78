use crate::constants::{LINE_CLASS, LINE_FILL, LINE_TAG, SVG_NS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wavelines_core::{build_lines, LineDocument, LineSurface, WaveError, WaveResult};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Creates SVG `<path>` elements inside a container of the page.
struct SvgDocument<'a>(&'a web::Document);

impl LineDocument for SvgDocument<'_> {
    type Container = web::Element;
    type Line = web::Element;

    fn find_container(&self, id: &str) -> Option<web::Element> {
        self.0.get_element_by_id(id)
    }

    fn append_line(&self, container: &web::Element, stroke: &str) -> WaveResult<web::Element> {
        let line = self
            .0
            .create_element_ns(Some(SVG_NS), LINE_TAG)
            .map_err(|e| WaveError::dom(format!("create <{}>: {:?}", LINE_TAG, e)))?;
        _ = line.set_attribute("fill", LINE_FILL);
        _ = line.set_attribute("stroke", stroke);
        _ = line.class_list().add_1(LINE_CLASS);
        container
            .append_child(&line)
            .map_err(|e| WaveError::dom(format!("append line: {:?}", e)))?;
        Ok(line)
    }
}

/// The `<path>` elements appended to the lines container, one per wave.
pub struct SvgLines {
    paths: Vec<web::Element>,
}

impl SvgLines {
    pub fn create(
        document: &web::Document,
        container_id: &str,
        strokes: &[String],
    ) -> WaveResult<Self> {
        let paths = build_lines(&SvgDocument(document), container_id, strokes)?;
        log::info!("[lines] created {} paths in #{}", paths.len(), container_id);
        Ok(Self { paths })
    }

    /// Take the paths back out of the page.
    pub fn remove(self) {
        for path in &self.paths {
            path.remove();
        }
    }
}

impl LineSurface for SvgLines {
    fn line_count(&self) -> usize {
        self.paths.len()
    }

    fn draw_line(&mut self, index: usize, path: &str) {
        if let Some(el) = self.paths.get(index) {
            _ = el.set_attribute("d", path);
        }
    }
}
