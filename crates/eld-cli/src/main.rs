//! `eld` — plan hours-of-service-compliant trips from the command line.
//!
//! Plans against the deterministic great-circle provider, persists to a
//! local SQLite file, and prints results as JSON so the output composes
//! with `jq` and friends.
//!
//! Run with:
//!   cargo run -p eld-cli -- plan \
//!     --current "Chicago, IL:41.8781,-87.6298" \
//!     --pickup  "Indianapolis, IN:39.7684,-86.1581" \
//!     --dropoff "St. Louis, MO:38.6270,-90.1994" \
//!     --cycle-used 12.5

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use eld_app::TripPlanner;
use eld_core::{GeoPoint, TripId};
use eld_route::GreatCircleProvider;
use eld_schedule::{HosRules, PlanRequest, Waypoint};
use eld_store::TripStore;


/// Road distance ≈ great-circle distance × this; typical for US highways.
const CIRCUITY_FACTOR: f64 = 1.2;

// ── Argument types ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "eld", version, about = "HOS-compliant trip planner")]
struct Cli {
    /// SQLite database file.
    #[arg(long, global = true, default_value = "eld.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plan a trip and persist it.
    Plan {
        /// Starting position, as "NAME:LAT,LON".
        #[arg(long, value_parser = parse_waypoint)]
        current: Waypoint,

        /// Pickup location, as "NAME:LAT,LON".
        #[arg(long, value_parser = parse_waypoint)]
        pickup: Waypoint,

        /// Dropoff location, as "NAME:LAT,LON".
        #[arg(long, value_parser = parse_waypoint)]
        dropoff: Waypoint,

        /// Cycle hours already used in the current rolling window.
        #[arg(long, default_value = "0")]
        cycle_used: Decimal,

        /// TOML file overriding the built-in FMCSA rule constants.
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Print a stored trip's duty-status timeline.
    Timeline {
        #[arg(long)]
        trip: TripId,
    },

    /// List stored trips, newest first.
    Trips,

    /// Print a stored trip's per-calendar-day duty summaries.
    Logs {
        #[arg(long)]
        trip: TripId,
    },

    /// Delete a stored trip and everything attached to it.
    Delete {
        #[arg(long)]
        trip: TripId,
    },
}

/// Parse "NAME:LAT,LON".  The name may itself contain colons; the
/// coordinate pair after the last one may not.
fn parse_waypoint(s: &str) -> Result<Waypoint, String> {
    let (name, coords) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected \"NAME:LAT,LON\", got {s:?}"))?;
    if name.trim().is_empty() {
        return Err(format!("empty waypoint name in {s:?}"));
    }
    let point = GeoPoint::parse(coords).map_err(|e| e.to_string())?;
    Ok(Waypoint::new(name.trim(), point))
}

fn load_rules(path: Option<&PathBuf>) -> Result<HosRules> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading rules file {}", path.display()))?;
            let rules: HosRules = toml::from_str(&text)
                .with_context(|| format!("parsing rules file {}", path.display()))?;
            Ok(rules)
        }
        None => Ok(HosRules::fmcsa()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let store = TripStore::open(&cli.db)?;

    match cli.command {
        Command::Plan { current, pickup, dropoff, cycle_used, rules } => {
            let rules = load_rules(rules.as_ref())?;
            let provider = GreatCircleProvider::new(CIRCUITY_FACTOR, rules.average_speed_mph);
            let mut planner = TripPlanner::new(provider, rules, store);

            let request = PlanRequest {
                current,
                pickup,
                dropoff,
                cycle_used_hours: cycle_used,
            };
            let planned = planner.plan(&request, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&planned)?);
        }

        Command::Timeline { trip } => {
            let planner = planner_for_reads(store);
            let timeline = planner.timeline(trip)?;
            println!("{}", serde_json::to_string_pretty(&timeline)?);
        }

        Command::Trips => {
            let planner = planner_for_reads(store);
            let trips = planner.trips()?;
            println!("{}", serde_json::to_string_pretty(&trips)?);
        }

        Command::Logs { trip } => {
            let planner = planner_for_reads(store);
            // Not-found surfaces here rather than as an empty list.
            planner.store().fetch_trip(trip)?;
            let logs = planner.store().fetch_daily_logs(trip)?;
            println!("{}", serde_json::to_string_pretty(&logs)?);
        }

        Command::Delete { trip } => {
            let mut planner = planner_for_reads(store);
            planner.delete(trip)?;
            println!("deleted trip {trip}");
        }
    }

    Ok(())
}

/// Read-side commands never route, so the provider configuration is
/// irrelevant; the default rules are only along for the ride.
fn planner_for_reads(store: TripStore) -> TripPlanner<GreatCircleProvider> {
    TripPlanner::new(
        GreatCircleProvider::new(CIRCUITY_FACTOR, HosRules::fmcsa().average_speed_mph),
        HosRules::fmcsa(),
        store,
    )
}
