//! `isotile` command-line tool
//!
//! - `manifest`: scan a tile asset directory into a variant manifest
//! - `demo`: generate the crossroads demo map
//! - `resolve`: autotile a map and print one JSON line per cell

mod demo;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use isotile_autotile::{AutoTileResolver, ResolvedTile, TerrainRegistry, VariantManifest};
use isotile_core::{Coordinate, TerrainGrid};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "isotile", version, about = "Terrain autotiling tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count tile variants under an asset directory
    Manifest {
        /// Root holding `{terrain}/{category}/{key}.png`
        assets_dir: PathBuf,
        /// Write the manifest here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate the crossroads demo map
    Demo {
        /// Half-size of the square map
        #[arg(
            long,
            default_value_t = 20,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(demo::MAX_RADIUS))
        )]
        radius: u32,
        /// Seed for the terrain swap noise
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Write the map here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Resolve every cell of a map into base and overlay tiles
    Resolve {
        /// Map file: JSON array of `{x, y, terrain}`
        map: PathBuf,
        /// Variant manifest JSON
        #[arg(long)]
        manifest: PathBuf,
        /// Terrain registry TOML; built-in tiers when omitted
        #[arg(long)]
        registry: Option<PathBuf>,
        /// Resolve on all cores
        #[arg(long)]
        parallel: bool,
    },
}

/// One line of `resolve` output
#[derive(Debug, Serialize)]
struct TileLine<'a> {
    x: i32,
    y: i32,
    #[serde(flatten)]
    tile: &'a ResolvedTile,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Manifest { assets_dir, output } => run_manifest(&assets_dir, output.as_deref()),
        Command::Demo {
            radius,
            seed,
            output,
        } => run_demo(radius, seed, output.as_deref()),
        Command::Resolve {
            map,
            manifest,
            registry,
            parallel,
        } => run_resolve(&map, &manifest, registry.as_deref(), parallel),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_manifest(assets_dir: &Path, output: Option<&Path>) -> Result<()> {
    let manifest = VariantManifest::scan_dir(assets_dir)
        .with_context(|| format!("failed to scan assets in {}", assets_dir.display()))?;
    let variants: u32 = manifest.iter().map(|(_, _, n)| n).sum();
    tracing::info!(
        terrains = manifest.terrains().count(),
        variants,
        "scanned {}",
        assets_dir.display()
    );

    let json = manifest
        .to_json_string()
        .context("failed to serialize manifest")?;
    emit(&json, output)
}

fn run_demo(radius: u32, seed: u64, output: Option<&Path>) -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let grid = demo::crossroads(radius, &mut rng);
    tracing::info!(radius, seed, cells = grid.len(), "generated demo map");

    let json = serde_json::to_string_pretty(&grid).context("failed to serialize map")?;
    emit(&json, output)
}

fn run_resolve(
    map: &Path,
    manifest: &Path,
    registry: Option<&Path>,
    parallel: bool,
) -> Result<()> {
    let grid = load_map(map)?;
    let manifest = VariantManifest::load(manifest)
        .with_context(|| format!("failed to load manifest {}", manifest.display()))?;
    let registry = match registry {
        Some(path) => TerrainRegistry::load(path)
            .with_context(|| format!("failed to load registry {}", path.display()))?,
        None => TerrainRegistry::default(),
    };

    let resolver = AutoTileResolver::new(registry);
    let tiles = if parallel {
        resolver.par_resolve_grid(&grid, &manifest)
    } else {
        resolver.resolve_grid(&grid, &manifest)
    };
    let overlays = tiles.iter().filter(|(_, t)| t.overlay.is_some()).count();
    tracing::info!(cells = tiles.len(), overlays, parallel, "resolved map");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_lines(&mut out, &tiles)?;
    out.flush()?;
    Ok(())
}

fn load_map(path: &Path) -> Result<TerrainGrid> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read map {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse map {}", path.display()))
}

fn write_lines(out: &mut impl Write, tiles: &[(Coordinate, ResolvedTile)]) -> Result<()> {
    for (coord, tile) in tiles {
        let line = TileLine {
            x: coord.x,
            y: coord.y,
            tile,
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write to a file when given one, stdout otherwise
fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
