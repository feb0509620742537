//! Query CLI for geofence containment.
//!
//! Loads a geofence file and answers point and bounds queries against it,
//! or runs a single containment test on polygons given inline as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geofence::config::Config;
use geofence::models::{BoundingBox, Geofence, LatLng, Polygon};
use geofence::pip::{point_in_polygon, polygon_within_polygon, GeofenceStore};

#[derive(Parser, Debug)]
#[command(name = "geofence")]
#[command(about = "Geofence containment queries")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Geofence JSON file (overrides the config)
    #[arg(short, long)]
    fences: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List geofences containing a point
    Contains {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// List geofences lying within bounds
    Within {
        /// Bounds polygon as a JSON array of {"lat", "lng"} objects
        #[arg(long, conflicts_with = "viewport")]
        bounds: Option<String>,

        /// Named viewport from the config
        #[arg(long)]
        viewport: Option<String>,
    },

    /// Test a single point against an inline polygon
    Check {
        #[arg(long)]
        polygon: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Test whether one inline polygon lies within another
    Nested {
        #[arg(long)]
        inner: String,
        #[arg(long)]
        outer: String,
    },
}

/// Geofence as reported on stdout
#[derive(Serialize)]
struct FenceSummary {
    id: String,
    name: String,
    vertices: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    bbox: Option<BoundingBox>,
}

impl From<&Arc<Geofence>> for FenceSummary {
    fn from(fence: &Arc<Geofence>) -> Self {
        Self {
            id: fence.id.to_string(),
            name: fence.name.clone(),
            vertices: fence.polygon.len(),
            bbox: fence.bbox(),
        }
    }
}

#[derive(Serialize)]
struct CheckResult {
    inside: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = args
        .config
        .as_ref()
        .map(Config::load_from_file)
        .transpose()?;

    // Initialize logging
    let configured = config.as_ref().map(Config::log_level).transpose()?;
    let level = if args.verbose {
        Level::DEBUG
    } else {
        configured.unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &args.command {
        Command::Contains { lat, lng } => {
            let point = LatLng::validated(*lat, *lng).context("Invalid query point")?;
            let store = open_store(&args, config.as_ref())?;
            info!("Looking up geofences containing {}", point);
            print_fences(&store.containing(point))
        }
        Command::Within { bounds, viewport } => {
            let bounds = match (bounds, viewport) {
                (Some(json), _) => Polygon::from_json(json).context("Invalid --bounds polygon")?,
                (None, Some(name)) => config
                    .as_ref()
                    .context("--viewport requires --config")?
                    .viewport(name)?,
                (None, None) => anyhow::bail!("Either --bounds or --viewport is required"),
            };
            let store = open_store(&args, config.as_ref())?;
            info!("Looking up geofences within {}-point bounds", bounds.len());
            print_fences(&store.within(&bounds))
        }
        Command::Check { polygon, lat, lng } => {
            let polygon = Polygon::from_json(polygon).context("Invalid --polygon")?;
            let point = LatLng::validated(*lat, *lng).context("Invalid query point")?;
            print_json(&CheckResult {
                inside: point_in_polygon(&polygon, point),
            })
        }
        Command::Nested { inner, outer } => {
            let inner = Polygon::from_json(inner).context("Invalid --inner polygon")?;
            let outer = Polygon::from_json(outer).context("Invalid --outer polygon")?;
            print_json(&CheckResult {
                inside: polygon_within_polygon(&inner, &outer),
            })
        }
    }
}

fn open_store(args: &Args, config: Option<&Config>) -> Result<GeofenceStore> {
    let path = args
        .fences
        .clone()
        .or_else(|| config.map(|c| c.global.geofence_file.clone()))
        .context("No geofence file given; pass --fences or --config")?;
    GeofenceStore::load_json(path)
}

fn print_fences(fences: &[Arc<Geofence>]) -> Result<()> {
    let summaries: Vec<FenceSummary> = fences.iter().map(FenceSummary::from).collect();
    info!("Found {} geofences", summaries.len());
    print_json(&summaries)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
