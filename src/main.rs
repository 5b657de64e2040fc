#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use roommap::config::{load_config, Config};
use roommap::{RoomMap, Route};
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Inspect text-adventure maps: routes through visited rooms and 3D layouts.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file, layered under `ROOMMAP_*` environment variables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the map name and its size
    Info {
        /// File holding the map description
        map: PathBuf,
    },
    /// Print the shortest route between two rooms
    Path {
        #[command(flatten)]
        visits: Visits,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Print the layout of the visited rooms as JSON
    Layout {
        #[command(flatten)]
        visits: Visits,
        /// Room placed at the origin
        #[arg(long)]
        from: String,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Args)]
struct Visits {
    /// File holding the map description
    map: PathBuf,
    /// Mark a room visited (repeatable)
    #[arg(long = "visit")]
    rooms: Vec<String>,
    /// Mark every room visited
    #[arg(long)]
    visit_all: bool,
}

impl Visits {
    fn load(&self) -> anyhow::Result<RoomMap> {
        let mut map = read_map(&self.map)?;
        if self.visit_all {
            map.mark_all_visited();
        }
        for room in &self.rooms {
            map.mark_visited(room)?;
        }
        Ok(map)
    }
}

fn read_map(path: &Path) -> anyhow::Result<RoomMap> {
    let description = fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
    let map = RoomMap::new(description.trim_end_matches(['\r', '\n']))
        .with_context(|| format!("Could not build map from {}", path.display()))?;
    info!(map = map.name(), rooms = map.graph().room_count(), "Loaded map");
    Ok(map)
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_filter))?;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")?;
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("Config file {} does not exist", path.display());
        }
    }
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config)?;
    debug!(?config, "Loaded configuration");

    match cli.command {
        Command::Info { map } => {
            let map = read_map(&map)?;
            println!("{}", map.name());
            println!("rooms: {}", map.graph().room_count());
            println!("connections: {}", map.graph().connection_count());
        }
        Command::Path { visits, from, to } => {
            let map = visits.load()?;
            match map.find_route(&from, &to)? {
                Route::AlreadyThere => println!("already there"),
                Route::NoPath => println!("no path"),
                Route::Path(directions) => println!("{}", directions.join(" -> ")),
            }
        }
        Command::Layout { visits, from, pretty } => {
            let map = visits.load()?;
            let layout = map.compute_layout_with(&from, &config.layout)?;
            let json = if pretty {
                serde_json::to_string_pretty(&layout)?
            } else {
                serde_json::to_string(&layout)?
            };
            println!("{json}");
        }
    }

    Ok(())
}

/// The main entry point of the application.
pub fn main() -> anyhow::Result<()> {
    run(Cli::parse())
}
