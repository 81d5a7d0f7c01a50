use std::path::Path;

use br_core::frame::FrameBuffer;

use crate::error::DecodeError;

/// Décode une image (PNG, JPEG, BMP, GIF) en RGBA8 row-major.
///
/// Images with fewer channels are expanded; missing alpha becomes 255.
///
/// # Errors
/// Returns [`DecodeError`] if the file is missing, unreadable, corrupt, or
/// decodes to an empty image.
///
/// # Example
/// ```no_run
/// use br_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("test.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, DecodeError> {
    if !path.is_file() {
        return Err(DecodeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = ::image::open(path).map_err(|source| DecodeError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Image décodée : {} ({width}×{height})", path.display());

    FrameBuffer::from_rgba(rgba.into_raw(), width, height).map_err(|source| DecodeError::Frame {
        path: path.to_path_buf(),
        source,
    })
}
