//! Unit tests for tp-profile.

use std::io::Cursor;

use tp_core::{ConfigError, Coordinate, SimulationConfig};

use crate::{
    load_profiles_csv, load_profiles_reader, save_profiles_csv, write_profiles,
    MemoryProfileStore, Profile, ProfileError, ProfileStore,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn times_square() -> Profile {
    Profile::new(
        "times-square",
        SimulationConfig::new(
            Coordinate::new(40.758, -73.9855),
            Coordinate::new(40.748, -73.9855),
            60.0,
        ),
    )
    .unwrap()
}

fn bridge() -> Profile {
    Profile::new(
        "bridge",
        SimulationConfig::new(
            Coordinate::new(40.7061, -73.9969),
            Coordinate::new(40.7033, -73.9881),
            25.5,
        ),
    )
    .unwrap()
}

fn load(csv: &str) -> Result<Vec<Profile>, ProfileError> {
    load_profiles_reader(Cursor::new(csv))
}

const HEADER: &str = "name,start_lat,start_lon,end_lat,end_lon,speed_kmh\n";

// ── Profile ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod profile {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        let config = times_square().config;
        assert!(matches!(Profile::new("  ", config), Err(ProfileError::Parse(_))));
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = times_square().config;
        config.speed_kmh = -5.0;
        match Profile::new("reverse", config) {
            Err(ProfileError::Config { name, source }) => {
                assert_eq!(name, "reverse");
                assert_eq!(source, ConfigError::InvalidSpeed(-5.0));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}

// ── MemoryProfileStore ────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn put_get_remove() {
        let mut store = MemoryProfileStore::new();
        assert!(store.is_empty());
        assert!(store.put(times_square()).is_none());
        assert_eq!(store.get("times-square"), Some(&times_square()));
        assert!(store.get("nowhere").is_none());

        assert_eq!(store.remove("times-square"), Some(times_square()));
        assert!(store.remove("times-square").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn put_replaces_and_returns_previous() {
        let mut store = MemoryProfileStore::new();
        store.put(times_square());

        let mut faster = times_square();
        faster.config.speed_kmh = 120.0;
        let previous = store.put(faster.clone()).unwrap();

        assert_eq!(previous.config.speed_kmh, 60.0);
        assert_eq!(store.get("times-square"), Some(&faster));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn names_are_sorted() {
        let store: MemoryProfileStore = [times_square(), bridge()].into_iter().collect();
        assert_eq!(store.names(), vec!["bridge".to_string(), "times-square".to_string()]);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_rows_in_file_order() {
        let csv = format!(
            "{HEADER}times-square,40.758,-73.9855,40.748,-73.9855,60\n\
             bridge, 40.7061, -73.9969, 40.7033, -73.9881, 25.5\n"
        );
        let profiles = load(&csv).unwrap();
        assert_eq!(profiles, vec![times_square(), bridge()]);
    }

    #[test]
    fn header_only_is_empty() {
        assert!(load(HEADER).unwrap().is_empty());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let csv = format!("{HEADER}north,91.0,0,0,0,10\n");
        match load(&csv) {
            Err(ProfileError::Config { name, source }) => {
                assert_eq!(name, "north");
                assert!(matches!(source, ConfigError::OutOfRange { field: "start.latitude", .. }));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_speed() {
        let csv = format!("{HEADER}parked,1,1,2,2,0\n");
        assert!(matches!(load(&csv), Err(ProfileError::Config { .. })));
    }

    #[test]
    fn rejects_non_numeric_field() {
        let csv = format!("{HEADER}bad,abc,0,0,0,10\n");
        let err = load(&csv).unwrap_err();
        assert!(matches!(err, ProfileError::Parse(ref msg) if msg.starts_with("line 2")), "{err}");
    }

    #[test]
    fn rejects_missing_column() {
        let csv = format!("{HEADER}short,1,1,2,2\n");
        assert!(matches!(load(&csv), Err(ProfileError::Parse(_))));
    }

    #[test]
    fn rejects_duplicate_names() {
        let csv = format!("{HEADER}a,1,1,2,2,10\nb,1,1,2,2,10\na,3,3,4,4,10\n");
        let err = load(&csv).unwrap_err();
        assert!(matches!(err, ProfileError::Parse(ref msg) if msg.contains("line 4")), "{err}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profiles_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }
}

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writer {
    use super::*;

    #[test]
    fn writes_header_even_when_empty() {
        let mut out = Vec::new();
        write_profiles(&mut out, std::iter::empty::<&Profile>()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), HEADER);
    }

    #[test]
    fn save_then_load_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        let store: MemoryProfileStore = [times_square(), bridge()].into_iter().collect();

        save_profiles_csv(&path, store.iter()).unwrap();
        let loaded: MemoryProfileStore = load_profiles_csv(&path).unwrap().into_iter().collect();

        assert_eq!(loaded.names(), store.names());
        for name in store.names() {
            assert_eq!(loaded.get(&name), store.get(&name));
        }
    }
}
