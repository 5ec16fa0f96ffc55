#![allow(clippy::float_cmp)]

use super::*;

use approx::assert_relative_eq;

/// Gap `(x1 - center)^2 - level` over `(0, 10]`.
struct Bowl {
    center: f64,
}

impl Crossing for Bowl {
    fn gap(&self, x1: f64, level: f64) -> f64 {
        (x1 - self.center).powi(2) - level
    }

    fn level_through(&self, x1: f64) -> f64 {
        (x1 - self.center).powi(2)
    }

    fn fixed_height(&self, x1: f64) -> f64 {
        (x1 - self.center).powi(2)
    }

    fn upper_bound(&self, _level: f64) -> f64 {
        10.0
    }
}

/// Hyperbola `level / x1` against the line `money - x1`.
///
/// The two meet where `x1^2 - money * x1 + level = 0`.
struct Hyperbola {
    money: f64,
}

impl Hyperbola {
    fn roots(&self, level: f64) -> (f64, f64) {
        let root = (self.money * self.money - 4.0 * level).sqrt();
        (0.5 * (self.money - root), 0.5 * (self.money + root))
    }
}

impl Crossing for Hyperbola {
    fn gap(&self, x1: f64, level: f64) -> f64 {
        level / x1 - (self.money - x1)
    }

    fn level_through(&self, x1: f64) -> f64 {
        x1 * (self.money - x1)
    }

    fn fixed_height(&self, x1: f64) -> f64 {
        self.money - x1
    }

    fn upper_bound(&self, _level: f64) -> f64 {
        self.money
    }
}

#[test]
fn finds_both_crossings_of_a_bowl() {
    let bracket =
        find_intersection(&Bowl { center: 3.0 }, 1.0, &Config::default()).expect("crosses");
    assert_relative_eq!(bracket.low(), 2.0, epsilon = 1e-9);
    assert_relative_eq!(bracket.high(), 4.0, epsilon = 1e-9);
}

#[test]
fn finds_both_crossings_of_a_hyperbola() {
    let problem = Hyperbola { money: 9.0 };
    let bracket = find_intersection(&problem, 18.0, &Config::default()).expect("crosses");
    assert_relative_eq!(bracket.low(), 3.0, epsilon = 1e-7);
    assert_relative_eq!(bracket.high(), 6.0, epsilon = 1e-7);
}

#[test]
fn dip_is_pinned_between_grid_points() {
    let dip = find_dip(&Bowl { center: 3.3 }, 1.0, &Config::default()).expect("dips");
    assert_relative_eq!(dip.x1, 3.3, epsilon = 1e-4);
    assert_relative_eq!(dip.gap, -1.0, epsilon = 1e-8);
}

#[test]
fn no_crossing_when_level_is_out_of_reach() {
    // The bowl never dips below a gap of one.
    let result = find_intersection(&Bowl { center: 3.0 }, -1.0, &Config::default());
    let Err(Error::NoCrossing { x1, gap, .. }) = result else {
        panic!("expected no crossing, got {result:?}");
    };
    assert_relative_eq!(x1, 3.0, epsilon = 1e-4);
    assert_relative_eq!(gap, 1.0, epsilon = 1e-8);
}

#[test]
fn exact_tangency_collapses_the_bracket() {
    let bracket =
        find_intersection(&Bowl { center: 3.0 }, 0.0, &Config::default()).expect("touches");
    assert_relative_eq!(bracket.width(), 0.0);
    assert_relative_eq!(bracket.midpoint(), 3.0);
}

#[test]
fn narrow_domains_shrink_the_grid() {
    let problem = Hyperbola { money: 0.9 };
    let bracket = find_intersection(&problem, 0.18, &Config::default()).expect("crosses");
    assert_relative_eq!(bracket.low(), 0.3, epsilon = 1e-8);
    assert_relative_eq!(bracket.high(), 0.6, epsilon = 1e-8);
}

#[test]
fn lower_walk_halves_below_the_first_grid_point() {
    let problem = Hyperbola { money: 9.0 };
    // The dip sits near 0.65, so stepping down by 0.1 runs out of room at
    // 0.05 while still inside; the crossing lies between 0.025 and 0.05.
    let level = 0.65 * 0.65;
    let (low, high) = problem.roots(level);
    assert!(0.025 < low && low < 0.05);

    let bracket = find_intersection(&problem, level, &Config::default()).expect("crosses");
    assert_relative_eq!(bracket.low(), low, epsilon = 1e-7);
    assert_relative_eq!(bracket.high(), high, epsilon = 1e-7);
}

#[test]
fn crossings_can_be_found_separately() {
    let problem = Hyperbola { money: 9.0 };
    let config = Config::default();
    let dip = find_dip(&problem, 18.0, &config).expect("dips");
    assert!(dip.is_inside());

    let low = lower_crossing(&problem, 18.0, dip, &config).expect("lower crossing");
    let high = upper_crossing(&problem, 18.0, dip, &config).expect("upper crossing");
    assert_relative_eq!(low, 3.0, epsilon = 1e-7);
    assert_relative_eq!(high, 6.0, epsilon = 1e-7);
}

#[test]
fn upper_walk_fails_without_a_sign_change() {
    // A line that stays below zero across the whole domain.
    struct Sunken;

    impl Crossing for Sunken {
        fn gap(&self, x1: f64, _level: f64) -> f64 {
            -1.0 - x1
        }

        fn level_through(&self, _x1: f64) -> f64 {
            0.0
        }

        fn fixed_height(&self, _x1: f64) -> f64 {
            0.0
        }

        fn upper_bound(&self, _level: f64) -> f64 {
            10.0
        }
    }

    let dip = Point { x1: 5.0, gap: -6.0 };
    let result = upper_crossing(&Sunken, 0.0, dip, &Config::default());
    assert!(matches!(result, Err(Error::NoSignChange { x1, .. }) if x1 == 10.0));
}

#[test]
fn non_finite_gap_is_an_error() {
    struct Broken;

    impl Crossing for Broken {
        fn gap(&self, x1: f64, _level: f64) -> f64 {
            if x1 > 5.0 { f64::NAN } else { 1.0 }
        }

        fn level_through(&self, _x1: f64) -> f64 {
            0.0
        }

        fn fixed_height(&self, _x1: f64) -> f64 {
            0.0
        }

        fn upper_bound(&self, _level: f64) -> f64 {
            10.0
        }
    }

    let result = find_intersection(&Broken, 0.0, &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteGap { x1, .. }) if x1 == 6.0));
}

#[test]
fn invalid_config_is_rejected_before_searching() {
    let config = Config {
        divisions: 0,
        ..Config::default()
    };
    let result = find_intersection(&Bowl { center: 3.0 }, 1.0, &config);
    assert_eq!(result, Err(Error::InvalidConfig(ConfigError::Divisions)));
}

#[test]
fn empty_domain_is_rejected() {
    let problem = Hyperbola { money: 0.0 };
    let result = find_intersection(&problem, 1.0, &Config::default());
    assert!(matches!(result, Err(Error::EmptyDomain { .. })));
}

#[test]
fn lower_crossing_below_reach_keeps_the_upper_one() {
    // `x2 = (level / x1^0.05)^0.2` barely rises toward zero, so it meets the
    // line again only far below the smallest halving.
    struct Flat;

    impl Crossing for Flat {
        fn gap(&self, x1: f64, level: f64) -> f64 {
            (level / x1.powf(0.05)).powf(0.2) - self.fixed_height(x1)
        }

        fn level_through(&self, x1: f64) -> f64 {
            x1.powf(0.05) * self.fixed_height(x1).powf(5.0)
        }

        fn fixed_height(&self, x1: f64) -> f64 {
            9.0 - x1
        }

        fn upper_bound(&self, _level: f64) -> f64 {
            9.0
        }
    }

    let level = Flat.level_through(4.5);
    let result = find_intersection(&Flat, level, &Config::default());
    let Err(Error::LowerOutOfReach { x1, high, .. }) = result else {
        panic!("expected an unreachable lower crossing, got {result:?}");
    };
    assert!(x1 > 0.0 && x1 < 1e-18);
    assert_relative_eq!(high, 4.5, epsilon = 1e-6);
}

#[test]
fn grid_scale_follows_the_chosen_step() {
    let config = Config::default();
    assert_relative_eq!(grid_scale(33.3, &config).expect("fits"), 1.0);
    assert_relative_eq!(grid_scale(1.0e6, &config).expect("wide"), 100.0, epsilon = 1e-9);
    assert_relative_eq!(
        grid_scale(0.5 / 3.0, &config).expect("narrow"),
        0.01,
        epsilon = 1e-15
    );
    assert!(matches!(
        grid_scale(0.0, &config),
        Err(Error::EmptyDomain { .. })
    ));
}
