use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CoreError;

/// Taille par défaut de la sortie (paramètre `size`).
pub const DEFAULT_SIZE: u32 = 100;

/// Taille maximale acceptée.
pub const MAX_SIZE: u32 = 500;

/// `size` doit être un multiple de ce pas.
pub const SIZE_STEP: u32 = 4;

/// Seuil de luminance par défaut.
pub const DEFAULT_THRESHOLD: u8 = 200;

/// Configuration validée du rendu Braille.
///
/// Les champs sont garantis dans leurs bornes quand la valeur est construite
/// via [`RenderConfig::new`] ou [`load_config`].
///
/// # Example
/// ```
/// use br_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.size, 100);
/// assert_eq!(config.threshold, 200);
/// assert!(!config.invert);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Résolution de la grille : `2*size` lignes × `4*size` colonnes de points.
    pub size: u32,
    /// Seuil de luminance [0, 255].
    pub threshold: u8,
    /// Inverser la comparaison (rendre les zones claires).
    pub invert: bool,
    /// Fichier de sortie. `None` = stdout.
    pub output: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            threshold: DEFAULT_THRESHOLD,
            invert: false,
            output: None,
        }
    }
}

impl RenderConfig {
    /// Build a config from raw (unvalidated) integers.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `size` or `threshold` is out of range.
    ///
    /// # Example
    /// ```
    /// use br_core::config::RenderConfig;
    /// assert!(RenderConfig::new(8, 128, true).is_ok());
    /// assert!(RenderConfig::new(3, 128, false).is_err());
    /// ```
    pub fn new(size: i64, threshold: i64, invert: bool) -> Result<Self, CoreError> {
        Ok(Self {
            size: validate_size(size)?,
            threshold: validate_threshold(threshold)?,
            invert,
            output: None,
        })
    }

    /// Re-check the `size` invariant.
    ///
    /// `threshold` is a `u8` and cannot be out of range once stored.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `size` was mutated to an invalid value.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_size(i64::from(self.size)).map(|_| ())
    }

    /// Number of dot rows in the grid (`2 * size`).
    #[must_use]
    pub fn grid_rows(&self) -> u32 {
        self.size * 2
    }

    /// Number of dot columns in the grid (`4 * size`).
    #[must_use]
    pub fn grid_cols(&self) -> u32 {
        self.size * 4
    }
}

/// Check `1 <= size <= 500` and `size % 4 == 0`.
///
/// # Errors
/// Returns [`CoreError::Config`] on any other value.
///
/// # Example
/// ```
/// use br_core::config::validate_size;
/// assert_eq!(validate_size(100).unwrap(), 100);
/// assert!(validate_size(0).is_err());
/// assert!(validate_size(501).is_err());
/// ```
pub fn validate_size(size: i64) -> Result<u32, CoreError> {
    if !(1..=i64::from(MAX_SIZE)).contains(&size) || size % i64::from(SIZE_STEP) != 0 {
        return Err(CoreError::Config(format!(
            "la taille doit être comprise entre {SIZE_STEP} et {MAX_SIZE} et multiple de {SIZE_STEP} (reçu {size})"
        )));
    }
    Ok(size as u32)
}

/// Check `0 <= threshold <= 255`.
///
/// # Errors
/// Returns [`CoreError::Config`] on any other value.
pub fn validate_threshold(threshold: i64) -> Result<u8, CoreError> {
    u8::try_from(threshold).map_err(|_| {
        CoreError::Config(format!(
            "le seuil doit être compris entre 0 et 255 (reçu {threshold})"
        ))
    })
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
///
/// Integers are read as `i64` so that out-of-range values reach validation
/// instead of failing as type errors.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    size: Option<i64>,
    threshold: Option<i64>,
    invert: Option<bool>,
    output: Option<PathBuf>,
}

/// Parse TOML content and merge it over the defaults.
///
/// # Errors
/// Returns an error if the TOML is malformed or a value is out of range.
///
/// # Example
/// ```
/// use br_core::config::parse_config;
/// let config = parse_config("[render]\nsize = 8\ninvert = true\n").unwrap();
/// assert_eq!(config.size, 8);
/// assert!(config.invert);
/// assert_eq!(config.threshold, 200);
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = RenderConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.size {
            config.size = validate_size(v)?;
        }
        if let Some(v) = r.threshold {
            config.threshold = validate_threshold(v)?;
        }
        if let Some(v) = r.invert {
            config.invert = v;
        }
        if r.output.is_some() {
            config.output = r.output;
        }
    }

    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or holds
/// out-of-range values.
///
/// # Example
/// ```no_run
/// use br_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let config =
        parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_rejections() {
        for bad in [3, 0, 501, -4, 502, 6] {
            assert!(
                matches!(validate_size(bad), Err(CoreError::Config(_))),
                "size {bad} aurait dû être rejetée"
            );
        }
    }

    #[test]
    fn size_accepts_multiples_of_four() {
        for good in [4, 8, 100, 500] {
            assert_eq!(validate_size(good).unwrap(), good as u32);
        }
    }

    #[test]
    fn threshold_bounds() {
        assert!(matches!(validate_threshold(-1), Err(CoreError::Config(_))));
        assert!(matches!(validate_threshold(256), Err(CoreError::Config(_))));
        assert_eq!(validate_threshold(0).unwrap(), 0);
        assert_eq!(validate_threshold(255).unwrap(), 255);
    }

    #[test]
    fn validate_catches_mutated_size() {
        let mut config = RenderConfig::default();
        assert!(config.validate().is_ok());
        config.size = 3;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn grid_dimensions() {
        let config = RenderConfig::new(8, 200, false).unwrap();
        assert_eq!(config.grid_rows(), 16);
        assert_eq!(config.grid_cols(), 32);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn toml_out_of_range_is_rejected() {
        let err = parse_config("[render]\nthreshold = 256\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Config(_))
        ));
        assert!(parse_config("[render]\nsize = 10\n").is_err());
    }

    #[test]
    fn toml_unknown_key_is_rejected() {
        assert!(parse_config("[render]\ncolour = true\n").is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.toml");
        std::fs::write(
            &path,
            "[render]\nsize = 12\nthreshold = 64\noutput = \"out.txt\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.size, 12);
        assert_eq!(config.threshold, 64);
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn load_config_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }
}
