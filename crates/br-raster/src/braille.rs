//! Encodage Braille (U+2800).
//!
//! Numérotation des points et bit ajouté à la base :
//! ```text
//! +------+------+
//! | 0x01 | 0x08 |
//! +------+------+
//! | 0x02 | 0x10 |
//! +------+------+
//! | 0x04 | 0x20 |
//! +------+------+
//! | 0x40 | 0x80 |
//! +------+------+
//! ```

use br_core::frame::DotGrid;

/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Tile width in dots.
pub const TILE_WIDTH: usize = 2;

/// Tile height in dots.
pub const TILE_HEIGHT: usize = 4;

/// Bit for each tile index `py * 2 + px`.
pub const TILE_BITS: [u8; 8] = [0x01, 0x08, 0x02, 0x10, 0x04, 0x20, 0x40, 0x80];

/// 8 dots of one glyph, index `py * 2 + px` (4 rows × 2 columns).
pub type Tile = [bool; 8];

/// Un caractère Braille, stocké comme masque 8 bits au-dessus de U+2800.
///
/// # Example
/// ```
/// use br_raster::braille::Glyph;
/// assert_eq!(Glyph::BLANK.to_char(), '\u{2800}');
/// assert_eq!(Glyph::FULL.to_char(), '\u{28FF}');
/// assert_eq!(Glyph::from_mask(0x01).codepoint(), 0x2801);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Glyph(u8);

impl Glyph {
    /// All dots lowered (U+2800).
    pub const BLANK: Self = Self(0x00);
    /// All dots raised (U+28FF).
    pub const FULL: Self = Self(0xFF);

    /// Glyph from a raw dot mask.
    #[must_use]
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask)
    }

    /// Glyph for a tile via [`TILE_BITS`].
    #[must_use]
    pub fn from_tile(tile: Tile) -> Self {
        let mask = tile
            .iter()
            .zip(TILE_BITS)
            .filter(|(on, _)| **on)
            .fold(0u8, |acc, (_, bit)| acc | bit);
        Self(mask)
    }

    /// Dot mask (offset above U+2800).
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Unicode scalar value, always in `0x2800..=0x28FF`.
    #[must_use]
    pub const fn codepoint(self) -> u32 {
        BRAILLE_BASE + self.0 as u32
    }

    /// Map le masque vers le caractère Braille correspondant.
    #[must_use]
    #[inline(always)]
    pub const fn to_char(self) -> char {
        // Le bloc Braille est mappé bit à bit sur l'offset 0x2800 : toujours valide.
        match char::from_u32(self.codepoint()) {
            Some(c) => c,
            None => ' ',
        }
    }
}

/// Encode a 2×4 tile into a Braille Unicode character.
///
/// # Example
/// ```
/// use br_raster::braille::encode_braille;
/// assert_eq!(encode_braille([false; 8]), '\u{2800}'); // empty
/// assert_eq!(encode_braille([true; 8]),  '\u{28FF}'); // full
/// ```
#[must_use]
pub fn encode_braille(tile: Tile) -> char {
    Glyph::from_tile(tile).to_char()
}

/// Read tile `(tx, ty)` of `grid`, `None` unless all 8 dots are inside.
#[must_use]
pub fn tile_at(grid: &DotGrid, tx: usize, ty: usize) -> Option<Tile> {
    let mut tile = [false; 8];
    for py in 0..TILE_HEIGHT {
        for px in 0..TILE_WIDTH {
            tile[py * TILE_WIDTH + px] =
                grid.get(tx * TILE_WIDTH + px, ty * TILE_HEIGHT + py)?;
        }
    }
    Some(tile)
}

/// Sérialisation UTF-8 manuelle (1, 2 ou 3 octets) pour un point de code 16 bits.
///
/// Kept as a cross-check of `char::encode_utf8`; surrogates are not handled.
///
/// # Example
/// ```
/// use br_raster::braille::pack_utf8;
/// assert_eq!(pack_utf8(0x41), ([0x41, 0, 0], 1));
/// assert_eq!(pack_utf8(0xE9), ([0xC3, 0xA9, 0], 2));
/// assert_eq!(pack_utf8(0x28FF), ([0xE2, 0xA3, 0xBF], 3));
/// ```
#[must_use]
pub const fn pack_utf8(code: u16) -> ([u8; 3], usize) {
    if code <= 0x7F {
        ([code as u8, 0, 0], 1)
    } else if code <= 0x7FF {
        ([0xC0 | ((code >> 6) & 0x1F) as u8, 0x80 | (code & 0x3F) as u8, 0], 2)
    } else {
        (
            [
                0xE0 | ((code >> 12) & 0x0F) as u8,
                0x80 | ((code >> 6) & 0x3F) as u8,
                0x80 | (code & 0x3F) as u8,
            ],
            3,
        )
    }
}

/// Append a glyph to `out` as UTF-8.
#[inline(always)]
pub fn push_glyph(out: &mut String, glyph: Glyph) {
    let ch = glyph.to_char();
    debug_assert_eq!(
        {
            let mut buf = [0u8; 4];
            ch.encode_utf8(&mut buf).len()
        },
        pack_utf8(glyph.codepoint() as u16).1
    );
    out.push(ch);
}
