//! The Metropolis loop for a single annealing pass.

use super::schedule::TemperatureSchedule;
use crate::geometry::{path_length, Point};
use crate::report::{Reporter, StepSnapshot};
use crate::tour::Tour;
use rand::Rng;

/// Result of one annealing pass.
#[derive(Debug, Clone)]
pub struct PassOutcome {
    /// Shortest length observed during the pass.
    pub best_length: f64,

    /// The tour recorded with `best_length`.
    pub best_tour: Tour,

    /// The working tour at the end of the pass. Not necessarily the best;
    /// the controller carries it into the next pass so the search resumes
    /// where it left off.
    pub final_tour: Tour,
}

/// Runs the Metropolis loop over one temperature schedule.
///
/// Holds no state across calls; everything it needs arrives as arguments
/// and everything it produces is in the [`PassOutcome`].
pub struct Annealer;

impl Annealer {
    /// Consumes the schedule one temperature per iteration, proposing a
    /// swap and applying the Metropolis acceptance rule at each step.
    ///
    /// Best-tracking compares the length of the tour *before* each
    /// iteration's move, so an improving move in the very last iteration
    /// is only observed by the next pass.
    pub fn run_pass<R: Rng, Rep: Reporter>(
        points: &[Point],
        initial: Tour,
        schedule: &TemperatureSchedule,
        report_every: usize,
        report_tours: bool,
        rng: &mut R,
        reporter: &mut Rep,
    ) -> PassOutcome {
        let mut current = initial;
        let mut best_length = current.length(points);
        let mut best_tour = current.clone();
        let mut iteration = 0usize;

        for t in schedule.iter() {
            let l = path_length(points, current.as_slice());
            let candidate = current.propose_swap(rng);
            let dl = path_length(points, candidate.as_slice()) - l;
            let p = acceptance_probability(dl, t);
            iteration += 1;

            if iteration % report_every == 0 {
                if report_tours {
                    reporter.tour(points, current.as_slice());
                }
                reporter.step(&StepSnapshot {
                    iteration,
                    temperature: t,
                    length: l,
                    length_delta: dl,
                });
            }

            if l < best_length {
                best_length = l;
                best_tour = current.clone();
            }

            // Short-circuit keeps the uniform draw out of improving moves.
            if dl < 0.0 || rng.random_range(0.0..1.0) < p {
                current = candidate;
            }
        }

        PassOutcome {
            best_length,
            best_tour,
            final_tour: current,
        }
    }
}

/// Metropolis acceptance probability for a length change `dl` at
/// temperature `t`.
///
/// Zero at or below zero temperature, so non-improving moves are
/// impossible in the greedy limit. The exponential saturates into
/// `[0, 1]` instead of propagating overflow.
#[inline]
fn acceptance_probability(dl: f64, t: f64) -> f64 {
    if t > 0.0 {
        (-dl / t).exp().min(1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{NullReporter, RecordingReporter};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ]
    }

    #[test]
    fn test_acceptance_probability_zero_temperature() {
        assert_eq!(acceptance_probability(0.5, 0.0), 0.0);
        assert_eq!(acceptance_probability(-0.5, 0.0), 0.0);
        assert_eq!(acceptance_probability(1.0, -2.0), 0.0);
    }

    #[test]
    fn test_acceptance_probability_saturates() {
        // Huge negative dl would overflow exp; it must clamp, not crash.
        let p = acceptance_probability(-1e300, 1e-3);
        assert_eq!(p, 1.0);

        let p = acceptance_probability(1e300, 1e-3);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_acceptance_probability_in_unit_interval() {
        for dl in [-10.0, -0.1, 0.0, 0.1, 10.0] {
            for t in [1e-6, 0.5, 1.0, 1e6] {
                let p = acceptance_probability(dl, t);
                assert!((0.0..=1.0).contains(&p), "p={p} for dl={dl} t={t}");
            }
        }
    }

    #[test]
    fn test_zero_temperature_is_greedy_descent() {
        let points = square_points();
        let schedule = TemperatureSchedule::power(0.0, 0.0, 2000, 1.0);
        let mut rng = StdRng::seed_from_u64(99);
        let mut reporter = RecordingReporter::default();

        let initial = Tour::random(points.len(), &mut rng);
        Annealer::run_pass(&points, initial, &schedule, 1, false, &mut rng, &mut reporter);

        // The working length never increases when no uphill move can be
        // accepted.
        for w in reporter.snapshots.windows(2) {
            assert!(
                w[1].length <= w[0].length + 1e-12,
                "uphill move accepted at T=0: {} -> {}",
                w[0].length,
                w[1].length
            );
        }
    }

    #[test]
    fn test_high_temperature_accepts_nearly_everything() {
        let mut rng = StdRng::seed_from_u64(5);
        let n = 30;
        let mut points: Vec<Point> = (0..n - 1)
            .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        points.push(points[0]);

        let schedule = TemperatureSchedule::power(1e9, 1e9, 4000, 1.0);
        let mut reporter = RecordingReporter::default();
        let initial = Tour::random(points.len(), &mut rng);
        Annealer::run_pass(&points, initial, &schedule, 1, false, &mut rng, &mut reporter);

        // Every non-no-op proposal should be accepted, so the working
        // length changes on most iterations (no-op endpoint draws excluded).
        let changed = reporter
            .snapshots
            .windows(2)
            .filter(|w| w[1].length != w[0].length)
            .count();
        let rate = changed as f64 / (reporter.snapshots.len() - 1) as f64;
        assert!(rate > 0.6, "acceptance rate too low at high T: {rate}");
    }

    #[test]
    fn test_single_interior_point_never_improves() {
        // n = 3: every proposal touches an endpoint, so the tour is frozen.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 0.0),
        ];
        let schedule = TemperatureSchedule::power(10.0, 0.1, 500, 1.0);
        let mut rng = StdRng::seed_from_u64(17);
        let initial = Tour::identity(3);
        let start_length = initial.length(&points);

        let outcome = Annealer::run_pass(
            &points,
            initial.clone(),
            &schedule,
            100,
            false,
            &mut rng,
            &mut NullReporter,
        );

        assert_eq!(outcome.final_tour, initial);
        assert_eq!(outcome.best_tour, initial);
        assert_eq!(outcome.best_length, start_length);
    }

    #[test]
    fn test_pass_best_never_exceeds_initial_length() {
        let points = square_points();
        let schedule = TemperatureSchedule::power(5.0, 0.05, 3000, 0.5);
        let mut rng = StdRng::seed_from_u64(23);
        let initial = Tour::random(points.len(), &mut rng);
        let start_length = initial.length(&points);

        let outcome = Annealer::run_pass(
            &points,
            initial,
            &schedule,
            1000,
            false,
            &mut rng,
            &mut NullReporter,
        );

        assert!(outcome.best_length <= start_length);
        assert!((outcome.best_tour.length(&points) - outcome.best_length).abs() < 1e-9);
    }

    #[test]
    fn test_snapshots_report_at_interval() {
        let points = square_points();
        let schedule = TemperatureSchedule::power(2.0, 0.2, 100, 1.0);
        let mut rng = StdRng::seed_from_u64(31);
        let mut reporter = RecordingReporter::default();

        let initial = Tour::random(points.len(), &mut rng);
        Annealer::run_pass(&points, initial, &schedule, 25, true, &mut rng, &mut reporter);

        let iterations: Vec<usize> = reporter.snapshots.iter().map(|s| s.iteration).collect();
        assert_eq!(iterations, vec![25, 50, 75, 100]);
        assert_eq!(reporter.tours.len(), 4);
    }
}
