use crate::error::CoreError;

/// Image source décodée, possédée.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use br_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer transparent aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use br_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Crée un buffer uni, chaque pixel valant `rgba`.
    ///
    /// # Example
    /// ```
    /// use br_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, [0, 0, 0, 255]);
    /// assert_eq!(fb.view().unwrap().pixel(1, 1), (0, 0, 0, 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            data: rgba.repeat(width as usize * height as usize),
            width,
            height,
        }
    }

    /// Wrap a decoded RGBA buffer after checking its length.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero or if
    /// `data.len() != width * height * 4`.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, CoreError> {
        FrameView::new(&data, width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Vue validée sur ce buffer.
    ///
    /// The fields are public, so the length and dimensions are re-checked
    /// on every call.
    ///
    /// # Errors
    /// Same as [`FrameView::new`].
    pub fn view(&self) -> Result<FrameView<'_>, CoreError> {
        FrameView::new(&self.data, self.width, self.height)
    }

    /// Écrit le pixel (x, y).
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the buffer.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }
}

/// Vue en lecture seule sur un buffer RGBA validé.
///
/// Construite par [`FrameView::new`], qui garantit des dimensions non nulles
/// et une longueur de `width * height * 4` octets.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameView<'a> {
    /// Validate `data` against `width × height` RGBA.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if a dimension is zero, or
    /// [`CoreError::BufferSize`] if the length does not match.
    ///
    /// # Example
    /// ```
    /// use br_core::frame::FrameView;
    /// let pixels = [0u8; 16];
    /// assert!(FrameView::new(&pixels, 2, 2).is_ok());
    /// assert!(FrameView::new(&pixels, 3, 2).is_err());
    /// ```
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(CoreError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(CoreError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the image; callers derive coordinates
    /// from the image's own dimensions.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[idx..idx + 4];
        (px[0], px[1], px[2], px[3])
    }
}

/// Grille booléenne de points, row-major, stride = `width`.
///
/// Une cellule `true` est un point Braille levé.
///
/// # Example
/// ```
/// use br_core::frame::DotGrid;
/// let mut grid = DotGrid::new(8, 4);
/// grid.set(3, 2, true);
/// assert_eq!(grid.get(3, 2), Some(true));
/// assert_eq!(grid.get(8, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotGrid {
    /// Flat array of dots, row-major.
    cells: Vec<bool>,
    /// Width in dots (columns).
    width: usize,
    /// Height in dots (rows).
    height: usize,
}

impl DotGrid {
    /// Crée une grille vide (tous les points éteints).
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// Width in dots.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in dots.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the dot at `(x, y)`, `None` outside the grid.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Set the dot at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the grid.
    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        assert!(x < self.width && y < self.height, "dot out of bounds");
        self.cells[y * self.width + x] = on;
    }

    /// Row-major storage. Row `y` occupies `[y * width, (y + 1) * width)`.
    pub fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Number of dots that are on.
    #[must_use]
    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }
}
