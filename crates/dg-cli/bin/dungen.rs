//! dungen: generate a room-and-maze dungeon and print it
//!
//! Main entry point for the command-line generator.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use dg_core::analysis::connectivity_report;
use dg_core::{DungeonRng, GenConfig, ROOT_REGION, RenderStyle, generate_dungeon, render};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Format {
    /// Walls, floor, doors
    #[default]
    Plain,
    /// Floor cells labelled with their region id (hex)
    Regions,
    /// The whole dungeon as JSON
    Json,
}

/// Procedural room-and-maze dungeon generator
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate a connected dungeon", long_about = None)]
struct Args {
    /// Grid width (odd)
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Grid height (odd)
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Maximum number of rooms
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Maximum room placement attempts
    #[arg(short = 'a', long = "attempts")]
    attempts: Option<usize>,

    /// RNG seed
    #[arg(short = 's', long = "seed", conflicts_with = "random_seed")]
    seed: Option<u64>,

    /// Draw the seed from system entropy
    #[arg(long = "random-seed")]
    random_seed: bool,

    /// JSON file with generation parameters; flags override it
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Print generation and connectivity statistics to stderr
    #[arg(long = "report")]
    report: bool,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Defaults, then the config file, then explicit flags
    fn resolve_config(&self) -> anyhow::Result<GenConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("could not read config file {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("could not parse config file {}", path.display()))?
            }
            None => GenConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(rooms) = self.rooms {
            config.max_rooms = rooms;
        }
        if let Some(attempts) = self.attempts {
            config.max_room_attempts = attempts;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.random_seed {
            config.seed = DungeonRng::from_entropy().seed();
            eprintln!("seed: {}", config.seed);
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.resolve_config()?;
    let dungeon = generate_dungeon(&config).context("generation failed")?;

    let output = match args.format {
        Format::Plain => render(&dungeon.grid, RenderStyle::Plain),
        Format::Regions => render(&dungeon.grid, RenderStyle::Regions),
        Format::Json => serde_json::to_string_pretty(&dungeon)? + "\n",
    };
    io::stdout().lock().write_all(output.as_bytes())?;

    if args.report {
        let connectivity = connectivity_report(&dungeon.grid, ROOT_REGION);
        let stats = &dungeon.stats;
        eprintln!("{}x{} seed {}", config.width, config.height, config.seed);
        eprintln!(
            "rooms: {} ({} attempts)  mazes: {}  connectors: {}",
            stats.rooms_placed, stats.room_attempts, stats.maze_regions, stats.connectors
        );
        eprintln!(
            "doors: {}  demoted: {}  residual: {}",
            stats.doors, stats.demoted_connectors, stats.residual_connectors
        );
        eprintln!(
            "open cells: {}  reachable from root: {}  regions: {:?}",
            connectivity.floor_cells, connectivity.reachable_from_root, connectivity.regions
        );
    }

    Ok(())
}
