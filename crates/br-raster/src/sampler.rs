use br_core::frame::FrameView;

/// Nearest-neighbor sampler from grid coordinates to source pixels.
///
/// `(sx, sy) = (x * W / cols, y * H / rows)`, truncating toward the origin.
/// No interpolation.
///
/// # Example
/// ```
/// use br_core::frame::FrameBuffer;
/// use br_raster::sampler::Sampler;
///
/// let frame = FrameBuffer::new(10, 10);
/// let sampler = Sampler::new(frame.view().unwrap(), 4, 2);
/// assert_eq!(sampler.source_coord(3, 1), (7, 5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Sampler<'a> {
    frame: FrameView<'a>,
    cols: u32,
    rows: u32,
}

impl<'a> Sampler<'a> {
    /// Sampler for a `cols × rows` grid over `frame`.
    ///
    /// # Panics
    /// Panics if `cols` or `rows` is zero.
    #[must_use]
    pub fn new(frame: FrameView<'a>, cols: u32, rows: u32) -> Self {
        assert!(cols > 0 && rows > 0, "empty sampling grid");
        Self { frame, cols, rows }
    }

    /// Source coordinate for grid cell `(x, y)`.
    ///
    /// Computed in 64 bits: `x * W` overflows `u32` for large sources.
    #[inline(always)]
    #[must_use]
    pub fn source_coord(&self, x: u32, y: u32) -> (u32, u32) {
        debug_assert!(x < self.cols && y < self.rows, "grid coord out of bounds");
        let sx = u64::from(x) * u64::from(self.frame.width()) / u64::from(self.cols);
        let sy = u64::from(y) * u64::from(self.frame.height()) / u64::from(self.rows);
        (sx as u32, sy as u32)
    }

    /// Raw (r, g, b, a) of the source pixel behind grid cell `(x, y)`.
    #[inline(always)]
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let (sx, sy) = self.source_coord(x, y);
        self.frame.pixel(sx, sy)
    }
}
