use anyhow::Result;
use br_core::config::RenderConfig;
use br_source::image::load_image;
use clap::Parser;

pub mod cli;
pub mod output;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr, jamais mélangé au rendu)
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    run(&cli)
}

/// Config → décodage → rendu → écriture.
fn run(cli: &cli::Cli) -> Result<()> {
    // Config validée avant de toucher à l'image
    let mut config = resolve_config(cli)?;
    cli.apply_overrides(&mut config)?;
    log::debug!("Config effective : {config:?}");

    let frame = load_image(&cli.image)?;
    log::info!(
        "{} : {}×{}",
        cli.image.display(),
        frame.width,
        frame.height
    );

    let text = br_raster::render_frame(&frame, &config)?;
    output::write_output(&text, config.output.as_deref())
}

/// Resolve config: TOML file if present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    if cli.config.exists() {
        br_core::config::load_config(&cli.config)
    } else if cli.uses_default_config() {
        log::debug!(
            "Pas de config à {}, utilisation des défauts.",
            cli.config.display()
        );
        Ok(RenderConfig::default())
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(RenderConfig::default())
    }
}
