//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor};

    #[test]
    fn index_roundtrip() {
        let f = Floor(4);
        assert_eq!(f.index(), 4);
        assert_eq!(Floor::try_from(4usize).unwrap(), f);
    }

    #[test]
    fn signed_distance() {
        assert_eq!(Floor(5).distance_from(Floor(2)), 3);
        assert_eq!(Floor(2).distance_from(Floor(5)), -3);
        assert_eq!(Floor(3).distance_from(Floor(3)), 0);
    }

    #[test]
    fn offset_in_range() {
        assert_eq!(Floor(3).offset(2, 8), Some(Floor(5)));
        assert_eq!(Floor(3).offset(-3, 8), Some(Floor(0)));
        assert_eq!(Floor(7).offset(0, 8), Some(Floor(7)));
    }

    #[test]
    fn offset_out_of_range() {
        assert_eq!(Floor(0).offset(-1, 8), None);
        assert_eq!(Floor(7).offset(1, 8), None);
        assert_eq!(Floor(3).offset(100, 8), None);
    }

    #[test]
    fn direction_from_delta() {
        assert_eq!(Direction::from_delta(3), Direction::Up);
        assert_eq!(Direction::from_delta(-1), Direction::Down);
        assert_eq!(Direction::from_delta(0), Direction::None);
    }

    #[test]
    fn direction_signum() {
        assert_eq!(Direction::Up.signum(), 1);
        assert_eq!(Direction::Down.signum(), -1);
        assert_eq!(Direction::None.signum(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Floor(7).to_string(), "7");
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::None.to_string(), "none");
    }
}

#[cfg(test)]
mod person {
    use crate::{CoreError, Direction, Floor, Person, Platform};

    #[test]
    fn unplaced_queries_fail() {
        let p = Person::new(Floor(5));
        assert!(p.location().is_none());
        assert!(matches!(
            p.relative_destination(),
            Err(CoreError::UnplacedPerson { destination: Floor(5) })
        ));
        assert!(p.direction().is_err());
        assert!(p.is_happy().is_err());
    }

    #[test]
    fn placed_person_derived_properties() {
        let mut platform = Platform::new(Floor(2));
        platform.add(Person::new(Floor(5))).unwrap();
        let p = &platform.persons()[0];

        assert_eq!(p.location(), Some(Floor(2)));
        assert_eq!(p.relative_destination().unwrap(), 3);
        assert_eq!(p.direction().unwrap(), Direction::Up);
        assert!(!p.is_happy().unwrap());
        assert!(p.wants_up().unwrap());
        assert!(!p.wants_down().unwrap());
    }

    #[test]
    fn happy_iff_zero_remaining() {
        let mut platform = Platform::new(Floor(5));
        platform.add(Person::new(Floor(5))).unwrap();
        let p = &platform.persons()[0];

        assert_eq!(p.relative_destination().unwrap(), 0);
        assert!(p.is_happy().unwrap());
        assert_eq!(p.direction().unwrap(), Direction::None);
    }

    #[test]
    fn direction_tracks_current_location() {
        // Someone bound for floor 5 wants up from below and down from above.
        let mut platform = Platform::new(Floor(2));
        platform.add(Person::new(Floor(5))).unwrap();
        assert_eq!(platform.persons()[0].direction().unwrap(), Direction::Up);

        platform.set_location(Floor(7));
        assert_eq!(platform.persons()[0].direction().unwrap(), Direction::Down);
    }
}

#[cfg(test)]
mod platform {
    use crate::{Floor, Person, Platform};

    #[test]
    fn add_assigns_location() {
        let mut platform = Platform::new(Floor(3));
        platform.add(Person::new(Floor(0))).unwrap();
        assert_eq!(platform.persons()[0].location(), Some(Floor(3)));
    }

    #[test]
    fn capacity_is_enforced() {
        let mut carriage = Platform::with_capacity(Floor(0), 2);
        assert!(carriage.add(Person::new(Floor(1))).is_ok());
        assert!(carriage.add(Person::new(Floor(2))).is_ok());
        assert!(carriage.is_full());

        // The third person is handed back, not swallowed.
        let refused = carriage.add(Person::new(Floor(3)));
        let person = refused.unwrap_err();
        assert_eq!(person.destination(), Floor(3));
        assert_eq!(carriage.len(), 2);
    }

    #[test]
    fn unlimited_platform_never_full() {
        let mut floor = Platform::new(Floor(0));
        for i in 0..100 {
            floor.add(Person::new(Floor(i % 8))).unwrap();
        }
        assert!(!floor.is_full());
        assert_eq!(floor.len(), 100);
    }

    #[test]
    fn set_location_cascades_to_everyone() {
        let mut carriage = Platform::with_capacity(Floor(0), 3);
        carriage.add(Person::new(Floor(5))).unwrap();
        carriage.add(Person::new(Floor(2))).unwrap();

        carriage.set_location(Floor(4));
        for person in carriage.persons() {
            assert_eq!(person.location(), Some(Floor(4)));
        }
    }

    #[test]
    fn remove_at_preserves_order() {
        let mut floor = Platform::new(Floor(0));
        for dest in [3u8, 1, 4, 1, 5] {
            floor.add(Person::new(Floor(dest))).unwrap();
        }
        let removed = floor.remove_at(2).unwrap();
        assert_eq!(removed.destination(), Floor(4));

        let remaining: Vec<u8> = floor.persons().iter().map(|p| p.destination().0).collect();
        assert_eq!(remaining, vec![3, 1, 1, 5]);
        assert!(floor.remove_at(10).is_none());
    }

    #[test]
    fn drain_arrived_takes_exactly_the_arrived() {
        let mut carriage = Platform::with_capacity(Floor(3), 5);
        for dest in [3u8, 5, 3, 0, 3] {
            carriage.add(Person::new(Floor(dest))).unwrap();
        }
        let arrived = carriage.drain_arrived();
        assert_eq!(arrived.len(), 3);
        assert!(arrived.iter().all(|p| p.destination() == Floor(3)));

        // The rest keep their relative order.
        let remaining: Vec<u8> = carriage.persons().iter().map(|p| p.destination().0).collect();
        assert_eq!(remaining, vec![5, 0]);
    }

    #[test]
    fn drain_arrived_on_empty_platform() {
        let mut floor = Platform::new(Floor(1));
        assert!(floor.drain_arrived().is_empty());
    }

    #[test]
    fn want_up_and_down_recomputed() {
        let mut floor = Platform::new(Floor(4));
        assert!(!floor.wants_up() && !floor.wants_down());

        floor.add(Person::new(Floor(7))).unwrap();
        assert!(floor.wants_up() && !floor.wants_down());

        floor.add(Person::new(Floor(0))).unwrap();
        assert!(floor.wants_up() && floor.wants_down());

        // Moving the platform flips what people want.
        floor.set_location(Floor(7));
        assert!(!floor.wants_up() && floor.wants_down());
    }

    #[test]
    fn insert_at_restores_position() {
        let mut floor = Platform::new(Floor(0));
        for dest in [2u8, 4, 6] {
            floor.add(Person::new(Floor(dest))).unwrap();
        }
        let person = floor.remove_at(1).unwrap();
        floor.insert_at(1, person).unwrap();

        let order: Vec<u8> = floor.persons().iter().map(|p| p.destination().0).collect();
        assert_eq!(order, vec![2, 4, 6]);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: u64 = r1.random();
        let b: u64 = r2.random();
        assert_ne!(a, b);
    }

    #[test]
    fn random_floor_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let f = rng.random_floor(8);
            assert!(f.index() < 8);
        }
    }
}
