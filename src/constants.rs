// DOM contract between the host page and the wasm module.

// Container receiving one <path> per line
pub const LINES_CONTAINER_ID: &str = "lines";
// Optional region whose hover resumes the animation; absent means always running
pub const HOVER_REGION_CLASS: &str = "lines";

// Per-line element attributes
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const LINE_TAG: &str = "path";
pub const LINE_CLASS: &str = "line";
pub const LINE_FILL: &str = "transparent";
