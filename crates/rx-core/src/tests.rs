//! Unit tests for rx-core primitives.

#[cfg(test)]
mod ids {
    use crate::ParticleId;

    #[test]
    fn next_is_ascending() {
        let id = ParticleId(41);
        assert_eq!(id.next(), ParticleId(42));
        assert!(id < id.next());
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(ParticleId::default(), ParticleId::INVALID);
        assert_eq!(ParticleId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ParticleId(7).to_string(), "ParticleId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, Vec2};

    #[test]
    fn contains_respects_radius() {
        let b = Bounds::new(100.0, 50.0);
        assert!(b.contains(Vec2::new(10.0, 10.0), 10.0));
        assert!(!b.contains(Vec2::new(9.9, 10.0), 10.0));
        assert!(!b.contains(Vec2::new(50.0, 45.0), 6.0));
    }

    #[test]
    fn slack_widens_the_box() {
        let b = Bounds::new(100.0, 100.0);
        let pos = Vec2::new(99.0, 50.0);
        assert!(!b.contains(pos, 3.0));
        assert!(b.contains_within(pos, 3.0, 2.0));
    }

    #[test]
    fn inset_collapses_when_margin_too_large() {
        let b = Bounds::new(40.0, 40.0);
        assert_eq!(b.inset(5.0), Some((Vec2::splat(5.0), Vec2::splat(35.0))));
        assert_eq!(b.inset(20.0), None);
    }
}

#[cfg(test)]
mod time {
    use crate::{RxError, SimClock, SimConfig, Tick};

    #[test]
    fn tick_display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }

    #[test]
    fn clock_elapsed_and_reset() {
        let mut clock = SimClock::new(60);
        for _ in 0..90 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(90));
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-12);
        clock.reset();
        assert_eq!(clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn ticks_for_secs_rounds() {
        let clock = SimClock::new(60);
        assert_eq!(clock.ticks_for_secs(5.0), 300);
        assert_eq!(clock.ticks_for_secs(0.5), 30);
    }

    #[test]
    fn lifetime_follows_frame_rate() {
        let cfg = SimConfig { fps: 30, hcl_lifetime_secs: 2.5, ..SimConfig::default() };
        assert_eq!(cfg.hcl_lifetime_ticks(), 75);
    }

    #[test]
    fn default_config_matches_classic_flask() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.hcl_lifetime_ticks(), 300);
        assert!((cfg.dt() - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(cfg.bounds().width, 640.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn end_tick() {
        let cfg = SimConfig { total_ticks: 600, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(600));
    }

    #[test]
    fn validate_rejects_non_finite_and_degenerate_values() {
        let cases = [
            SimConfig { width: f32::NAN, ..SimConfig::default() },
            SimConfig { height: -1.0, ..SimConfig::default() },
            SimConfig { fps: 0, ..SimConfig::default() },
            SimConfig { max_speed: f32::INFINITY, ..SimConfig::default() },
            SimConfig { max_speed: -3.0, ..SimConfig::default() },
            SimConfig { spawn_margin: 320.0, ..SimConfig::default() },
            SimConfig { hcl_lifetime_secs: 0.0, ..SimConfig::default() },
        ];
        for cfg in cases {
            assert!(
                matches!(cfg.validate(), Err(RxError::InvalidConfiguration(_))),
                "expected rejection for {cfg:?}"
            );
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, Vec2};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.velocity(70.0), r2.velocity(70.0));
        }
    }

    #[test]
    fn velocity_in_range() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.velocity(70.0);
            assert!((-70.0..70.0).contains(&v.x));
            assert!((-70.0..70.0).contains(&v.y));
        }
    }

    #[test]
    fn zero_speed_is_rest() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.velocity(0.0), Vec2::ZERO);
    }

    #[test]
    fn point_in_box() {
        let mut rng = SimRng::new(9);
        let (min, max) = (Vec2::new(20.0, 30.0), Vec2::new(40.0, 35.0));
        for _ in 0..1000 {
            let p = rng.point_in(min, max);
            assert!(p.x >= min.x && p.x < max.x);
            assert!(p.y >= min.y && p.y < max.y);
        }
    }
}

#[cfg(test)]
mod species {
    use crate::Species;

    #[test]
    fn only_byproduct_is_transient() {
        assert!(Species::HydrogenChloride.is_transient());
        assert!(!Species::Amine.is_transient());
        assert!(!Species::MethylHalide.is_transient());
    }

    #[test]
    fn display() {
        assert_eq!(Species::MethylHalide.to_string(), "methyl_halide");
        assert_eq!(Species::HydrogenChloride.formula(), "HCl");
    }
}
