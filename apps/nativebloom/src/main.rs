use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, bail, Result};
use catalog::StaticCatalog;
use clap::{Parser, Subcommand};
use client_core::{
    tracker::TrackerSnapshot, HabitatTracker, ImpactEstimate, Notification, PlantResults,
    QueryOutcome, Session, Theme,
};
use serde::Serialize;
use shared::domain::{AlternativeLink, InvasiveRecord, PlantRecord};
use storage::{PreferenceStore, Storage, StoredPreference};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
#[command(name = "nativebloom", about = "Native plants and invasive species by US zip code")]
struct Args {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    /// Settings file; defaults to ./nativebloom.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Native plants and invasive species for a zip code.
    Lookup { zip: String },
    /// Detail for one native plant in a zip code's results.
    Show { zip: String, scientific_name: String },
    /// Yearly impact of converting a lawn area (sq ft) to natives.
    Estimate {
        #[arg(allow_hyphen_values = true)]
        area: String,
    },
    /// Log converted areas (sq ft) in order and report progress.
    Track {
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        #[arg(required = true, allow_hyphen_values = true)]
        areas: Vec<String>,
    },
    /// Accessibility flags.
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum PrefsAction {
    Show,
    ToggleContrast,
    ToggleTheme,
}

#[derive(Serialize)]
struct LookupReport<'a> {
    location: &'a str,
    results: &'a PlantResults,
    alternatives: Vec<InvasiveAlternatives<'a>>,
}

#[derive(Serialize)]
struct InvasiveAlternatives<'a> {
    invasive: &'a str,
    alternatives: Vec<AlternativeLink>,
}

#[derive(Serialize)]
struct TrackReport {
    tracker: TrackerSnapshot,
    rejected: Vec<String>,
}

#[derive(Serialize)]
struct PrefsReport<'a> {
    high_contrast: bool,
    theme: Theme,
    stored: Vec<StoredRow<'a>>,
}

#[derive(Serialize)]
struct StoredRow<'a> {
    key: &'a str,
    value: &'a str,
    updated_at: String,
}

impl<'a> From<&'a StoredPreference> for StoredRow<'a> {
    fn from(row: &'a StoredPreference) -> Self {
        Self {
            key: &row.key,
            value: &row.value,
            updated_at: row.updated_at.to_rfc3339(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = config::load_settings(args.config.as_deref())?;
    let database_url = config::prepare_database_url(&settings.database_url)?;
    let storage = Arc::new(Storage::new(&database_url).await?);
    info!(database_url = %database_url, "preference storage ready");

    let mut tracker = HabitatTracker::new(settings.tracker_goal_sqft);
    if let Command::Track { start, .. } = &args.command {
        tracker = tracker.with_initial_total(*start);
    }

    let mut session = Session::start(
        Arc::new(StaticCatalog::new(settings.catalog_latency())),
        Arc::clone(&storage) as Arc<dyn PreferenceStore>,
        tracker,
    )
    .await?;
    let mut notices = session.subscribe();

    let result = run(&mut session, &storage, args.command, args.json).await;
    if !args.json {
        print_notices(&mut notices);
    }
    result
}

async fn run(
    session: &mut Session,
    storage: &Storage,
    command: Command,
    json: bool,
) -> Result<()> {
    match command {
        Command::Lookup { zip } => {
            let results = lookup(session, &zip).await?;
            let mut alternatives = Vec::with_capacity(results.invasive.len());
            for invasive in &results.invasive {
                alternatives.push(InvasiveAlternatives {
                    invasive: &invasive.common_name,
                    alternatives: session.alternatives_for(invasive).await,
                });
            }
            if json {
                let report = LookupReport {
                    location: &zip,
                    results: &results,
                    alternatives,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", session.headline().await);
                print_results(&results, &alternatives);
            }
        }
        Command::Show {
            zip,
            scientific_name,
        } => {
            lookup(session, &zip).await?;
            let plant = session
                .select_plant(&scientific_name)
                .await
                .ok_or_else(|| anyhow!("no native plant '{scientific_name}' in results for {zip}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plant)?);
            } else {
                print_plant_detail(&plant);
            }
            session.close_detail().await;
        }
        Command::Estimate { area } => {
            let estimate = session.estimate(&area)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                print_estimate(&area, &estimate);
            }
        }
        Command::Track { areas, .. } => {
            let mut rejected = Vec::new();
            for raw in areas {
                if let Err(err) = session.log_area_input(&raw) {
                    eprintln!("{raw}: {}", err.message);
                    rejected.push(raw);
                }
            }
            let snapshot = session.tracker().snapshot();
            if json {
                let report = TrackReport {
                    tracker: snapshot,
                    rejected,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Restored {} of {} sq ft ({}%)",
                    snapshot.total_sqft, snapshot.goal_sqft, snapshot.progress_percent
                );
            }
        }
        Command::Prefs { action } => {
            match action.unwrap_or(PrefsAction::Show) {
                PrefsAction::Show => {}
                PrefsAction::ToggleContrast => {
                    session.toggle_contrast().await?;
                }
                PrefsAction::ToggleTheme => {
                    session.toggle_theme().await?;
                }
            }
            let prefs = session.preferences();
            let stored = storage.list_preferences().await?;
            if json {
                let report = PrefsReport {
                    high_contrast: prefs.high_contrast,
                    theme: prefs.theme,
                    stored: stored.iter().map(StoredRow::from).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "high contrast: {}",
                    if prefs.high_contrast { "on" } else { "off" }
                );
                println!("theme: {}", prefs.theme);
                for row in &stored {
                    println!(
                        "  {} = {} (updated {})",
                        row.key,
                        row.value,
                        row.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
                    );
                }
            }
        }
    }
    Ok(())
}

async fn lookup(session: &Session, zip: &str) -> Result<PlantResults> {
    match session.submit(zip).await? {
        QueryOutcome::Loaded(results) => Ok(results),
        QueryOutcome::Failed(err) => Err(err.into()),
        QueryOutcome::Superseded => bail!("lookup for {zip} was superseded"),
    }
}

fn print_results(results: &PlantResults, alternatives: &[InvasiveAlternatives<'_>]) {
    println!();
    println!("Native plants ({})", results.native.len());
    if results.native.is_empty() {
        println!("  No native plants found for this location.");
    }
    for plant in &results.native {
        println!("  {} ({})", plant.common_name, plant.scientific_name);
        println!("    {}", plant.description);
    }

    println!();
    println!("Invasive species ({})", results.invasive.len());
    if results.invasive.is_empty() {
        println!("  No invasive species found for this location.");
    }
    for (invasive, links) in results.invasive.iter().zip(alternatives) {
        print_invasive(invasive, &links.alternatives);
    }
}

fn print_invasive(invasive: &InvasiveRecord, links: &[AlternativeLink]) {
    println!("  {} ({})", invasive.common_name, invasive.scientific_name);
    println!("    {}", invasive.description);
    if links.is_empty() {
        return;
    }
    let titles: Vec<String> = links.iter().map(AlternativeLink::title).collect();
    println!("    Plant instead: {}", titles.join(", "));
}

fn print_plant_detail(plant: &PlantRecord) {
    println!("{} ({})", plant.common_name, plant.scientific_name);
    println!("{}", plant.description);
    println!();
    println!("Growing conditions: {}", plant.growing_conditions);
    println!("Ecosystem benefits: {}", plant.ecosystem_benefits);
    println!("Bloom time:         {}", plant.bloom_time);
    println!("Maintenance:        {}", plant.maintenance);
    println!("Image:              {}", plant.image_url);
}

fn print_estimate(area: &str, estimate: &ImpactEstimate) {
    println!("Converting {} sq ft of lawn saves each year:", area.trim());
    println!("  Water:     {} gallons", estimate.water_gallons);
    println!("  Emissions: {:.1} lbs", estimate.emissions_lbs);
    println!("  Carbon:    {} lbs captured", estimate.carbon_lbs);
}

fn print_notices(rx: &mut broadcast::Receiver<Notification>) {
    loop {
        match rx.try_recv() {
            Ok(notice) => eprintln!("[{}] {}", notice.title, notice.description),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}
