//! CSV profile loader and writer.
//!
//! # CSV format
//!
//! One row per profile, coordinates in decimal degrees, speed in km/h.
//!
//! ```csv
//! name,start_lat,start_lon,end_lat,end_lon,speed_kmh
//! times-square,40.758,-73.9855,40.748,-73.9855,60
//! bridge,40.7061,-73.9969,40.7033,-73.9881,25.5
//! ```
//!
//! Every row is validated as it is read; the first bad row fails the whole
//! load.  A name that appears twice is an error rather than a silent
//! overwrite.

use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use tp_core::{Coordinate, SimulationConfig};

use crate::{Profile, ProfileError, ProfileResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize, Serialize)]
struct ProfileRecord {
    name:      String,
    start_lat: f64,
    start_lon: f64,
    end_lat:   f64,
    end_lon:   f64,
    speed_kmh: f64,
}

impl From<&Profile> for ProfileRecord {
    fn from(p: &Profile) -> Self {
        Self {
            name:      p.name.clone(),
            start_lat: p.config.start.latitude,
            start_lon: p.config.start.longitude,
            end_lat:   p.config.end.latitude,
            end_lon:   p.config.end.longitude,
            speed_kmh: p.config.speed_kmh,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load profiles from a CSV file, in file order.
pub fn load_profiles_csv(path: &Path) -> ProfileResult<Vec<Profile>> {
    let file = std::fs::File::open(path)?;
    load_profiles_reader(file)
}

/// Like [`load_profiles_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded profile sets.
pub fn load_profiles_reader<R: Read>(reader: R) -> ProfileResult<Vec<Profile>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut profiles = Vec::new();

    for (row, result) in csv_reader.deserialize::<ProfileRecord>().enumerate() {
        // Row 1 is the header.
        let line = row + 2;
        let r = result.map_err(|e| ProfileError::Parse(format!("line {line}: {e}")))?;

        if !seen.insert(r.name.clone()) {
            return Err(ProfileError::Parse(format!(
                "line {line}: duplicate profile name {:?}",
                r.name
            )));
        }

        let config = SimulationConfig::new(
            Coordinate::new(r.start_lat, r.start_lon),
            Coordinate::new(r.end_lat, r.end_lon),
            r.speed_kmh,
        );
        profiles.push(Profile::new(r.name, config)?);
    }

    Ok(profiles)
}

/// Write `profiles` to a CSV file, creating or truncating it.
pub fn save_profiles_csv<'a, I>(path: &Path, profiles: I) -> ProfileResult<()>
where
    I: IntoIterator<Item = &'a Profile>,
{
    let file = std::fs::File::create(path)?;
    write_profiles(file, profiles)
}

/// Like [`save_profiles_csv`] but accepts any `Write` sink.  Writes the
/// header row even when `profiles` is empty.
pub fn write_profiles<'a, W, I>(writer: W, profiles: I) -> ProfileResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Profile>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["name", "start_lat", "start_lon", "end_lat", "end_lon", "speed_kmh"])?;

    for profile in profiles {
        csv_writer.serialize(ProfileRecord::from(profile))?;
    }
    csv_writer.flush()?;
    Ok(())
}
