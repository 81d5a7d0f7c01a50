use br_core::config::RenderConfig;

/// Poids BT.709, échelle 10000 (0.2126, 0.7152, 0.0722).
const LUMA_R: u32 = 2126;
const LUMA_G: u32 = 7152;
const LUMA_B: u32 = 722;
const LUMA_SCALE: u32 = 10_000;

/// Luminance perceptuelle BT.709, tronquée.
///
/// Integer weights keep gray `(v, v, v)` at exactly `v`. This intentionally
/// differs from the same formula in `f64`, where the weights sum to slightly
/// less than 1: gray 255 becomes 254 and gray 5 becomes 4 there. A pixel
/// sitting exactly on the threshold can therefore flip relative to a
/// floating-point implementation.
///
/// # Example
/// ```
/// use br_raster::luminance::brightness;
/// assert_eq!(brightness(255, 255, 255), 255);
/// assert_eq!(brightness(0, 255, 0), 182);
/// assert_eq!(brightness(77, 77, 77), 77);
/// ```
#[inline(always)]
#[must_use]
pub fn brightness(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * LUMA_R + u32::from(g) * LUMA_G + u32::from(b) * LUMA_B) / LUMA_SCALE) as u8
}

/// Un pixel est visible si son alpha est non nul.
#[inline(always)]
#[must_use]
pub fn is_visible(alpha: u8) -> bool {
    alpha > 0
}

/// Décision on/off par pixel : visibilité puis seuil strict.
///
/// # Example
/// ```
/// use br_raster::luminance::Classifier;
/// let c = Classifier::new(200, false);
/// assert!(c.is_on((0, 0, 0, 255)));
/// assert!(!c.is_on((0, 0, 0, 0)));
/// assert!(!c.is_on((200, 200, 200, 255)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classifier {
    threshold: u8,
    invert: bool,
}

impl Classifier {
    /// Classifier with an explicit threshold and direction.
    #[must_use]
    pub fn new(threshold: u8, invert: bool) -> Self {
        Self { threshold, invert }
    }

    /// Classifier from the render config.
    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.threshold, config.invert)
    }

    /// Compare a brightness against the threshold. Equal is always off.
    #[inline(always)]
    #[must_use]
    pub fn passes(&self, brightness: u8) -> bool {
        if self.invert {
            brightness > self.threshold
        } else {
            brightness < self.threshold
        }
    }

    /// Full decision for one RGBA sample.
    #[inline(always)]
    #[must_use]
    pub fn is_on(&self, (r, g, b, a): (u8, u8, u8, u8)) -> bool {
        is_visible(a) && self.passes(brightness(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_is_exact() {
        for v in 0..=255u8 {
            assert_eq!(brightness(v, v, v), v, "gris {v}");
        }
    }

    #[test]
    fn gray_on_threshold_stays_off() {
        // En f64, gris 255 et gris 5 tombent à 254 et 4.
        assert_eq!(brightness(255, 255, 255), 255);
        assert_eq!(brightness(5, 5, 5), 5);
        for invert in [false, true] {
            assert!(!Classifier::new(255, invert).is_on((255, 255, 255, 255)));
            assert!(!Classifier::new(5, invert).is_on((5, 5, 5, 255)));
        }
        assert!(Classifier::new(254, true).is_on((255, 255, 255, 255)));
        assert!(Classifier::new(5, false).is_on((4, 4, 4, 255)));
    }

    #[test]
    fn weights_truncate() {
        // 0.2126 * 255 = 54.213
        assert_eq!(brightness(255, 0, 0), 54);
        // 0.0722 * 255 = 18.411
        assert_eq!(brightness(0, 0, 255), 18);
        // 0.2126 * 4 = 0.85
        assert_eq!(brightness(4, 0, 0), 0);
    }

    #[test]
    fn transparency_dominates() {
        for invert in [false, true] {
            for threshold in [0u8, 1, 128, 200, 255] {
                let c = Classifier::new(threshold, invert);
                for v in [0u8, 100, 255] {
                    assert!(!c.is_on((v, v, v, 0)));
                }
            }
        }
    }

    #[test]
    fn threshold_boundary_is_off_both_ways() {
        for threshold in [0u8, 1, 127, 200, 255] {
            let t = threshold;
            assert!(!Classifier::new(t, false).is_on((t, t, t, 255)));
            assert!(!Classifier::new(t, true).is_on((t, t, t, 255)));
        }
    }

    #[test]
    fn invert_is_complement_off_threshold() {
        let threshold = 120;
        let normal = Classifier::new(threshold, false);
        let inverted = Classifier::new(threshold, true);
        for v in 0..=255u8 {
            let px = (v, v, v, 1);
            if v == threshold {
                assert!(!normal.is_on(px) && !inverted.is_on(px));
            } else {
                assert_ne!(normal.is_on(px), inverted.is_on(px), "luminance {v}");
            }
        }
    }

    #[test]
    fn defaults_from_config() {
        let c = Classifier::from_config(&RenderConfig::default());
        assert_eq!(c, Classifier::new(200, false));
        assert!(c.is_on((199, 199, 199, 255)));
        assert!(!c.is_on((201, 201, 201, 255)));
    }
}
