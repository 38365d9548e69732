//! # RAMPART Asset Tool
//!
//! Generates card art from the catalog.
//!
//! ```bash
//! # Export every card under ./assets
//! rampart export --catalog data/cards.toml --out assets
//!
//! # Look at one card's parameters
//! rampart inspect c01 --damage-type kinetic --rarity common
//!
//! # Write one card's SVG
//! rampart render c01 --damage-type kinetic --rarity common --out c01.svg
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rampart_catalog::{export_catalog, Catalog, ExportOptions};
use rampart_procedural::{
    render_image, CardIdentity, DamageType, Rarity, VisualConfig, VisualParameterGenerator,
    VisualParameters,
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "rampart", version, about = "Procedural tower card art")]
struct Cli {
    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export art and records for every card in a catalog
    Export {
        /// Card catalog (TOML)
        #[arg(long, default_value = "data/cards.toml")]
        catalog: PathBuf,
        /// Visual configuration (TOML); built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory
        #[arg(long, default_value = "assets")]
        out: PathBuf,
        /// Worker threads; one per core when omitted
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Print one card's visual parameters as JSON
    Inspect(CardArgs),
    /// Print or write one card's SVG
    Render {
        #[command(flatten)]
        card: CardArgs,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct CardArgs {
    /// Card id
    id: String,
    /// kinetic, thermal, electric, corrosive or void
    #[arg(long)]
    damage_type: DamageType,
    /// common, uncommon, rare or legendary
    #[arg(long)]
    rarity: Rarity,
    /// Visual configuration (TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

impl CardArgs {
    fn generate(&self) -> Result<VisualParameters> {
        let config = load_config(self.config.as_deref())?;
        let identity = CardIdentity::new(self.id.clone(), self.damage_type, self.rarity);
        Ok(VisualParameterGenerator::new(&config).generate(&identity))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Export {
            catalog,
            config,
            out,
            workers,
        } => export(&catalog, config.as_deref(), out, workers),
        Command::Inspect(card) => {
            let params = card.generate()?;
            println!("{}", serde_json::to_string_pretty(&params)?);
            Ok(())
        }
        Command::Render { card, out } => {
            let svg = render_image(&card.generate()?);
            match out {
                Some(path) => {
                    std::fs::write(&path, svg)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!(path = %path.display(), "wrote art");
                }
                None => print!("{svg}"),
            }
            Ok(())
        }
    }
}

fn export(
    catalog_path: &Path,
    config: Option<&Path>,
    out: PathBuf,
    workers: Option<usize>,
) -> Result<()> {
    let config = load_config(config)?;
    let catalog = Catalog::load(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;

    let mut options = ExportOptions::new(out);
    if let Some(workers) = workers {
        options = options.with_workers(workers);
    }

    let report = export_catalog(&catalog, &config, &options)
        .with_context(|| format!("exporting to {}", options.out_dir.display()))?;

    println!(
        "exported {} of {} cards to {}",
        report.exported.len(),
        catalog.len(),
        options.out_dir.display()
    );
    for failure in &report.failures {
        eprintln!("  failed {}: {}", failure.id, failure.error);
    }
    if !report.is_success() {
        bail!("{} card(s) failed to export", report.failures.len());
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<VisualConfig> {
    match path {
        Some(path) => VisualConfig::load(path)
            .with_context(|| format!("loading visual config {}", path.display())),
        None => Ok(VisualConfig::default()),
    }
}
