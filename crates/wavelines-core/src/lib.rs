//! Platform-independent core of the wavelines background.
//!
//! Nothing here touches browser APIs: the web frontend supplies a
//! [`LineSurface`] (the SVG `<path>` elements) and a [`FrameHost`]
//! (`requestAnimationFrame`), and drives an [`Animator`] from frame callbacks.

pub mod animator;
pub mod config;
pub mod constants;
pub mod error;
pub mod lines;
pub mod palette;
pub mod queue;
pub mod scheduler;
pub mod wave;

pub use animator::*;
pub use config::*;
pub use error::*;
pub use lines::*;
pub use palette::*;
pub use queue::*;
pub use scheduler::*;
pub use wave::*;
