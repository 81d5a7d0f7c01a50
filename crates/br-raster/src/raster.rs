use br_core::config::RenderConfig;
use br_core::error::CoreError;
use br_core::frame::{DotGrid, FrameView};
use rayon::prelude::*;

use crate::luminance::Classifier;
use crate::sampler::Sampler;

/// Rasterise une frame en grille de points `4*size` × `2*size`.
///
/// Chaque ligne est indépendante (source en lecture seule, tranches
/// disjointes) et calculée en parallèle ; le résultat est identique à un
/// parcours séquentiel.
///
/// # Errors
/// Returns [`CoreError::Config`] if `config.size` is out of range.
///
/// # Example
/// ```
/// use br_core::config::RenderConfig;
/// use br_core::frame::FrameBuffer;
/// use br_raster::raster::rasterize;
///
/// let frame = FrameBuffer::filled(4, 4, [0, 0, 0, 255]);
/// let config = RenderConfig::new(4, 200, false).unwrap();
/// let grid = rasterize(frame.view().unwrap(), &config).unwrap();
/// assert_eq!((grid.width(), grid.height()), (16, 8));
/// assert_eq!(grid.count_on(), 16 * 8);
/// ```
pub fn rasterize(frame: FrameView<'_>, config: &RenderConfig) -> Result<DotGrid, CoreError> {
    config.validate()?;
    let cols = config.grid_cols();
    let rows = config.grid_rows();
    let sampler = Sampler::new(frame, cols, rows);
    let classifier = Classifier::from_config(config);

    log::debug!(
        "Rasterisation {}×{} → grille {cols}×{rows}",
        frame.width(),
        frame.height()
    );

    let mut grid = DotGrid::new(cols as usize, rows as usize);
    grid.as_mut_slice()
        .par_chunks_exact_mut(cols as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, dot) in row.iter_mut().enumerate() {
                *dot = classifier.is_on(sampler.sample(x as u32, y as u32));
            }
        });
    Ok(grid)
}
