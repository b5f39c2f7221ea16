//! drive — run one simulated drive against an in-memory location sink.
//!
//! ```text
//! drive                              built-in Times Square route, 60 km/h
//! drive profiles.csv                 first profile in the file
//! drive profiles.csv commute         the profile named "commute"
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`; `RUST_LOG=debug` shows
//! every tick).  Ctrl-C stops the drive early.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tokio::sync::oneshot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tp_core::{Coordinate, SimulationConfig};
use tp_profile::{MemoryProfileStore, Profile, ProfileStore, load_profiles_csv};
use tp_sim::{ChannelObserver, SimBuilder, SimEvent};
use tp_sink::MemorySink;

// ── Built-in route ────────────────────────────────────────────────────────────

fn times_square() -> Result<Profile> {
    Ok(Profile::new(
        "times-square",
        SimulationConfig::new(
            Coordinate::new(40.758, -73.9855),
            Coordinate::new(40.748, -73.9855),
            60.0,
        ),
    )?)
}

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "drive")]
#[command(about = "Drive a simulated vehicle from a start to an end coordinate")]
struct Args {
    /// Profiles CSV (name,start_lat,start_lon,end_lat,end_lon,speed_kmh).
    /// Without it the built-in Times Square route is driven.
    profiles: Option<PathBuf>,

    /// Profile to drive; defaults to the first one in the file
    name: Option<String>,
}

/// Resolve the command line to a single profile.
fn pick_profile(args: Args) -> Result<Profile> {
    let Some(path) = args.profiles else {
        return times_square();
    };

    let store: MemoryProfileStore = load_profiles_csv(&path)
        .with_context(|| format!("loading profiles from {}", path.display()))?
        .into_iter()
        .collect();
    println!("Loaded {} profiles from {}", store.len(), path.display());

    match args.name {
        Some(name) => match store.get(&name) {
            Some(profile) => Ok(profile.clone()),
            None => bail!("no profile named {name:?}; available: {}", store.names().join(", ")),
        },
        None => match store.iter().next() {
            Some(profile) => Ok(profile.clone()),
            None => bail!("{} contains no profiles", path.display()),
        },
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let profile = pick_profile(Args::parse())?;
    let config = profile.config;
    tracing::info!(profile = %profile.name, "starting drive");

    println!("=== drive — teleport drive simulator ===");
    println!("Profile: {}", profile.name);
    println!("  {} -> {} at {} km/h", config.start, config.end, config.speed_kmh);
    println!();

    // 1. Engine with an in-memory sink and a channel for progress events.
    let sink = Arc::new(MemorySink::new());
    let (observer, mut events) = ChannelObserver::new();
    let sim = SimBuilder::new(Arc::clone(&sink))
        .observer(observer)
        .build()?;

    // 2. Print progress as it arrives.
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                SimEvent::Position { tick, position } => println!("{:>6}  {position}", tick.to_string()),
                SimEvent::SinkFailed { tick, error } => eprintln!("{:>6}  sink error: {error}", tick.to_string()),
                SimEvent::StateChanged { from, to } => println!("        {from} -> {to}"),
            }
        }
    });

    // 3. Run until arrival or Ctrl-C.
    let (done_tx, done_rx) = oneshot::channel();
    sim.on_completion(move |run| {
        let _ = done_tx.send(run);
    })
    .await;
    sim.start(config).await?;

    let arrived = tokio::select! {
        run = done_rx => Some(run.context("simulator dropped before arrival")?),
        signal = tokio::signal::ctrl_c() => {
            signal.context("listening for Ctrl-C")?;
            sim.stop().await?;
            None
        }
    };

    // 4. Let the settle re-push land, then drop the engine to close the event
    //    channel and let the printer drain.
    if arrived.is_some() {
        sim.settled().await;
    }
    drop(sim);
    printer.await?;

    // 5. Summary.
    println!();
    match arrived {
        Some(run) => {
            println!("Arrived after {} ({:.3} km)", run.ticks, run.traveled_km);
            println!("  final position: {}", run.final_position);
        }
        None => println!("Stopped early"),
    }
    println!("  sink accepted {} positions", sink.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::error::ErrorKind;

    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("drive").chain(argv.iter().copied()))
    }

    #[test]
    fn help_is_not_a_path() {
        let err = parse(&["--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn no_arguments_drive_times_square() {
        let profile = pick_profile(parse(&[]).unwrap()).unwrap();
        assert_eq!(profile.name, "times-square");
        assert_eq!(profile.config.speed_kmh, 60.0);
    }

    #[test]
    fn too_many_arguments_rejected() {
        assert!(parse(&["a.csv", "name", "extra"]).is_err());
    }

    #[test]
    fn picks_named_or_first_profile_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,start_lat,start_lon,end_lat,end_lon,speed_kmh").unwrap();
        writeln!(file, "commute,40.758,-73.9855,40.748,-73.9855,60").unwrap();
        writeln!(file, "bridge,40.7061,-73.9969,40.7033,-73.9881,25").unwrap();
        let path = file.path().to_str().unwrap();

        assert_eq!(pick_profile(parse(&[path]).unwrap()).unwrap().name, "commute");
        assert_eq!(pick_profile(parse(&[path, "bridge"]).unwrap()).unwrap().name, "bridge");
        assert!(pick_profile(parse(&[path, "missing"]).unwrap()).is_err());
    }
}
