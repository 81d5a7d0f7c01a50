use std::path::PathBuf;

use br_core::config::{RenderConfig, validate_size, validate_threshold};
use br_core::error::CoreError;
use clap::Parser;

/// Chemin de configuration utilisé quand `--config` n'est pas fourni.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// brailler — convertit une image en texte Braille Unicode.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Cli {
    /// Image à convertir (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Taille de sortie, forme positionnelle (`brailler image.png 100`) ; incompatible avec --size
    #[arg(value_name = "SIZE", conflicts_with = "size")]
    pub size_arg: Option<i64>,

    /// Taille de sortie : multiple de 4 entre 4 et 500 (défaut 100).
    #[arg(short, long)]
    pub size: Option<i64>,

    /// Seuil de luminance entre 0 et 255 (défaut 200).
    #[arg(short, long)]
    pub threshold: Option<i64>,

    /// Inverser l'image (rendre les zones claires).
    #[arg(short, long, default_value_t = false)]
    pub invert: bool,

    /// Fichier de sortie. Défaut : stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fichier de configuration TOML.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line values on top of `config`.
    ///
    /// `--invert` can only switch inversion on; a config file may also set it.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `size` or `threshold` is out of range.
    pub fn apply_overrides(&self, config: &mut RenderConfig) -> Result<(), CoreError> {
        if let Some(size) = self.size.or(self.size_arg) {
            config.size = validate_size(size)?;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = validate_threshold(threshold)?;
        }
        if self.invert {
            config.invert = true;
        }
        if let Some(ref output) = self.output {
            config.output = Some(output.clone());
        }
        Ok(())
    }

    /// Whether `--config` was left at its default.
    #[must_use]
    pub fn uses_default_config(&self) -> bool {
        self.config.as_os_str() == DEFAULT_CONFIG_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("brailler").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = parse(&["cat.png"]);
        let mut config = RenderConfig::default();
        cli.apply_overrides(&mut config).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert!(cli.uses_default_config());
    }

    #[test]
    fn short_and_long_flags() {
        let cli = parse(&["cat.png", "-s", "8", "--threshold", "64", "-i", "-o", "out.txt"]);
        let mut config = RenderConfig::default();
        cli.apply_overrides(&mut config).unwrap();
        assert_eq!(config.size, 8);
        assert_eq!(config.threshold, 64);
        assert!(config.invert);
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn positional_size() {
        let cli = parse(&["cat.png", "12"]);
        let mut config = RenderConfig::default();
        cli.apply_overrides(&mut config).unwrap();
        assert_eq!(config.size, 12);
    }

    #[test]
    fn positional_and_flag_size_conflict() {
        let args = ["brailler", "cat.png", "12", "--size", "16"];
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        // Le refus est documenté dans l'aide.
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("incompatible avec --size"), "{help}");
    }

    #[test]
    fn out_of_range_values_are_config_errors() {
        for args in [
            ["cat.png", "-s", "3"],
            ["cat.png", "-s", "0"],
            ["cat.png", "-s", "501"],
            ["cat.png", "-t", "-1"],
            ["cat.png", "-t", "256"],
        ] {
            let cli = parse(&args);
            let mut config = RenderConfig::default();
            assert!(
                matches!(cli.apply_overrides(&mut config), Err(CoreError::Config(_))),
                "{args:?}"
            );
        }
    }

    #[test]
    fn non_numeric_size_is_parse_error() {
        assert!(Cli::try_parse_from(["brailler", "cat.png", "--size", "big"]).is_err());
    }

    #[test]
    fn image_is_required() {
        assert!(Cli::try_parse_from(["brailler"]).is_err());
    }
}
