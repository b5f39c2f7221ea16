//! Unit tests for tp-core primitives.

#[cfg(test)]
mod geo {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{bearing_rad, destination_point, distance_km, Coordinate};

    const EPS: f64 = 1e-9;

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(40.758, -73.9855);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let d = distance_km(a, b);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(40.758, -73.9855), Coordinate::new(40.748, -73.9855)),
            (Coordinate::new(-33.86, 151.21), Coordinate::new(51.5, -0.12)),
            (Coordinate::new(89.9, 10.0), Coordinate::new(-89.9, -170.0)),
        ];
        for (a, b) in pairs {
            assert!((distance_km(a, b) - distance_km(b, a)).abs() < EPS);
        }
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!(bearing_rad(origin, Coordinate::new(1.0, 0.0)).abs() < EPS);
        assert!((bearing_rad(origin, Coordinate::new(0.0, 1.0)) - FRAC_PI_2).abs() < EPS);
        assert!((bearing_rad(origin, Coordinate::new(0.0, -1.0)) + FRAC_PI_2).abs() < EPS);
        assert!((bearing_rad(origin, Coordinate::new(-1.0, 0.0)).abs() - PI).abs() < EPS);
    }

    #[test]
    fn bearing_of_identical_points_is_zero() {
        let p = Coordinate::new(45.0, -73.0);
        assert_eq!(bearing_rad(p, p), 0.0);
    }

    #[test]
    fn destination_point_inverts_distance_and_bearing() {
        let origin = Coordinate::new(40.748, -73.9855);
        let bearing = 0.7;
        let dest = destination_point(origin, bearing, 5.0);
        assert!((distance_km(origin, dest) - 5.0).abs() < 1e-6);
        assert!((bearing_rad(origin, dest) - bearing).abs() < 1e-6);
    }

    #[test]
    fn destination_point_zero_distance_is_origin() {
        let origin = Coordinate::new(12.5, 99.25);
        let dest = destination_point(origin, 1.3, 0.0);
        assert!((dest.latitude - origin.latitude).abs() < EPS);
        assert!((dest.longitude - origin.longitude).abs() < EPS);
    }

    #[test]
    fn destination_point_wraps_antimeridian() {
        let origin = Coordinate::new(0.0, 179.999);
        let dest = destination_point(origin, FRAC_PI_2, 1.0);
        assert!(dest.longitude < 0.0 && dest.longitude > -180.0, "got {dest}");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Coordinate::new(10.0, 20.0);
        let b = Coordinate::new(20.0, 40.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Coordinate::new(15.0, 30.0));
    }

    #[test]
    fn finiteness() {
        assert!(Coordinate::new(90.0, -180.0).is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{ConfigError, Coordinate, EngineConfig, SimulationConfig};

    fn valid() -> SimulationConfig {
        SimulationConfig::new(
            Coordinate::new(40.758, -73.9855),
            Coordinate::new(40.748, -73.9855),
            60.0,
        )
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_and_negative_speed_rejected() {
        for speed in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let cfg = SimulationConfig { speed_kmh: speed, ..valid() };
            assert!(matches!(cfg.validate(), Err(ConfigError::InvalidSpeed(_))), "speed {speed}");
        }
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let cfg = SimulationConfig { end: Coordinate::new(40.0, f64::NAN), ..valid() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonFinite { field: "end.longitude" })
        );
    }

    #[test]
    fn out_of_range_coordinate_rejected() {
        let cfg = SimulationConfig { start: Coordinate::new(91.0, 0.0), ..valid() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange { field: "start.latitude", .. })
        ));
    }

    #[test]
    fn km_per_second() {
        let cfg = SimulationConfig { speed_kmh: 3_600.0, ..valid() };
        assert!((cfg.km_per_second() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn engine_defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.accuracy_m, 1.0);
        assert_eq!(cfg.overshoot_km, 0.02);
        assert_eq!(cfg.settle_delay, Duration::from_millis(200));
        assert_eq!(cfg.settle_repushes, 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn engine_config_rejects_negative_overshoot() {
        let cfg = EngineConfig { overshoot_km: -0.02, ..EngineConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange { field: "overshoot_km", .. })
        ));
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{SimClock, Tick, TICK_PERIOD};

    #[test]
    fn tick_period_is_one_second() {
        assert_eq!(TICK_PERIOD, Duration::from_millis(1_000));
    }

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new();
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.advance(), Tick(1));
        clock.advance();
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn clock_hms() {
        let mut clock = SimClock::new();
        for _ in 0..3_725 {
            clock.advance();
        }
        assert_eq!(clock.elapsed_hms(), (1, 2, 5));
        assert_eq!(clock.to_string(), "T3725 (01:02:05)");
    }
}

#[cfg(test)]
mod position {
    use crate::{Coordinate, Position};

    #[test]
    fn from_coordinate_uses_default_accuracy() {
        let p = Position::from(Coordinate::new(1.0, 2.0));
        assert_eq!(p, Position::new(1.0, 2.0, 1.0));
        assert_eq!(p.coordinate(), Coordinate::new(1.0, 2.0));
    }
}
