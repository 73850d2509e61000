//! Turns metatile sets and tile sheets into images.

mod compositor;
mod format;
mod indexed_image;
mod palette;

pub use compositor::{CompositorOptions, MetatileCompositor, render_tiles};
pub use format::*;
pub use indexed_image::IndexedImage;
pub use palette::{OutputPalette, SENTINEL_COLOR};
