use br_core::config::RenderConfig;
use br_core::error::CoreError;
use br_core::frame::{DotGrid, FrameBuffer, FrameView};
use rayon::prelude::*;

use crate::braille::{Glyph, TILE_HEIGHT, TILE_WIDTH, push_glyph, tile_at};
use crate::raster::rasterize;

/// Rend un buffer RGBA en texte Braille.
///
/// The config is checked before the pixel buffer is looked at, so a bad
/// `size` is reported even when the buffer is also invalid. Lines are joined
/// with `\n`, without a trailing newline.
///
/// # Errors
/// Returns [`CoreError::Config`] for an invalid `size`, and
/// [`CoreError::InvalidDimensions`] / [`CoreError::BufferSize`] when the
/// buffer does not describe a `width × height` RGBA image.
///
/// # Example
/// ```
/// use br_core::config::RenderConfig;
/// use br_raster::render;
///
/// let pixels = [0, 0, 0, 255].repeat(16);
/// let config = RenderConfig::new(4, 200, false).unwrap();
/// let text = render(&pixels, 4, 4, &config).unwrap();
/// assert_eq!(text, "⣿⣿⣿⣿⣿⣿⣿⣿\n⣿⣿⣿⣿⣿⣿⣿⣿");
/// ```
pub fn render(
    pixels: &[u8],
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Result<String, CoreError> {
    config.validate()?;
    let frame = FrameView::new(pixels, width, height)?;
    let grid = rasterize(frame, config)?;
    Ok(encode_grid(&grid))
}

/// [`render`] over a decoded [`FrameBuffer`].
///
/// # Errors
/// Same as [`render`].
pub fn render_frame(frame: &FrameBuffer, config: &RenderConfig) -> Result<String, CoreError> {
    render(&frame.data, frame.width, frame.height, config)
}

/// Assemble les glyphes d'une grille : une ligne par rangée de tuiles.
///
/// Tile rows are encoded in parallel and joined in order.
#[must_use]
pub fn encode_grid(grid: &DotGrid) -> String {
    let tiles_x = grid.width() / TILE_WIDTH;
    let tiles_y = grid.height() / TILE_HEIGHT;

    let lines: Vec<String> = (0..tiles_y)
        .into_par_iter()
        .map(|ty| {
            // 3 octets UTF-8 par glyphe Braille
            let mut line = String::with_capacity(tiles_x * 3);
            for tx in 0..tiles_x {
                let glyph = tile_at(grid, tx, ty).map_or(Glyph::BLANK, Glyph::from_tile);
                push_glyph(&mut line, glyph);
            }
            line
        })
        .collect();

    lines.join("\n")
}
