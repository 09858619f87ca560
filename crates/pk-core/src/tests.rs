//! Unit tests for pk-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PersonId, SegmentId};

    #[test]
    fn ordering() {
        assert!(SegmentId(0) < SegmentId(1));
        assert!(PersonId(100) > PersonId(99));
    }

    #[test]
    fn display() {
        assert_eq!(SegmentId(7).to_string(), "SegmentId(7)");
        assert_eq!(PersonId::from(3).to_string(), "PersonId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::Time;

    #[test]
    fn hms_and_display() {
        let t = Time::from_hms(7, 5, 9);
        assert_eq!(t.secs(), 25_509);
        assert_eq!(t.to_string(), "07:05:09");
    }

    #[test]
    fn display_does_not_wrap_past_midnight() {
        assert_eq!(Time::from_hms(26, 0, 0).to_string(), "26:00:00");
    }

    #[test]
    fn checked_since() {
        assert_eq!(Time(15).checked_since(Time(5)), Some(10));
        assert_eq!(Time(5).checked_since(Time(5)), Some(0));
        assert_eq!(Time(5).checked_since(Time(15)), None);
    }
}

#[cfg(test)]
mod geo {
    use crate::Coord;

    #[test]
    fn distance_and_midpoint() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(a.midpoint(b), Coord::new(1.5, 2.0));
    }
}

#[cfg(test)]
mod transport {
    use crate::{CoreError, TransportMode};

    #[test]
    fn parse_round_trip_labels() {
        for mode in [TransportMode::Car, TransportMode::Walk, TransportMode::Pt] {
            assert_eq!(mode.as_str().parse::<TransportMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_is_error() {
        let err = "hovercraft".parse::<TransportMode>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownMode(ref m) if m == "hovercraft"));
    }

    #[test]
    fn only_car_is_car() {
        assert!(TransportMode::Car.is_car());
        assert!(!TransportMode::Ride.is_car());
    }
}
