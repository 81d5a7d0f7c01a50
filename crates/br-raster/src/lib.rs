pub mod braille;
/// Braille conversion engine for brailler.
///
/// Converts RGBA frames to Unicode Braille text, 2×4 dots per glyph.
pub mod luminance;
pub mod raster;
pub mod render;
pub mod sampler;

pub use render::{render, render_frame};
