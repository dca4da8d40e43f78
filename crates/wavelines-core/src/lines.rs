//! Building the drawable lines inside a host container.

use crate::error::{WaveError, WaveResult};

/// A document that can hold line elements.
pub trait LineDocument {
    type Container;
    type Line;

    fn find_container(&self, id: &str) -> Option<Self::Container>;
    fn append_line(&self, container: &Self::Container, stroke: &str) -> WaveResult<Self::Line>;
}

/// Append one line per stroke to the container `#container_id`.
pub fn build_lines<D: LineDocument>(
    document: &D,
    container_id: &str,
    strokes: &[String],
) -> WaveResult<Vec<D::Line>> {
    let container = document
        .find_container(container_id)
        .ok_or_else(|| WaveError::missing(format!("#{}", container_id)))?;
    strokes
        .iter()
        .map(|stroke| document.append_line(&container, stroke))
        .collect()
}
