//! Outer annealing loop: successive cooling passes with adaptive restarts.

use super::config::AnnealConfig;
use super::runner::Annealer;
use super::schedule::TemperatureSchedule;
use crate::error::Error;
use crate::geometry::{validate_points, Point};
use crate::report::{NullReporter, Reporter};
use crate::tour::Tour;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Diagnostics recorded for one executed pass.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassTrace {
    /// Global step index of the pass's first Metropolis iteration.
    pub start_step: usize,

    /// The realized cooling schedule of the pass.
    pub schedule: TemperatureSchedule,

    /// The pass's best length.
    pub best_length: f64,
}

impl PassTrace {
    /// `(step, temperature)` pairs for plotting the temperature profile.
    pub fn temperature_steps(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.schedule
            .iter()
            .enumerate()
            .map(|(k, t)| (self.start_step + k, t))
    }

    /// `(step, pass-best-length)` point for plotting the length series.
    pub fn length_point(&self) -> (usize, f64) {
        (self.start_step, self.best_length)
    }
}

/// Final output of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Shortest length found across all passes.
    pub best_length: f64,

    /// The tour achieving `best_length`; first and last index are equal
    /// under the caller's closed-path convention.
    pub best_tour: Tour,

    /// Number of passes executed before termination.
    pub passes: usize,

    /// Per-pass diagnostics, in execution order.
    pub history: Vec<PassTrace>,
}

/// Cross-pass search state, threaded explicitly instead of living in
/// globals.
struct AnnealingState {
    best_length: f64,
    best_tour: Tour,
    t0: f64,
}

/// Drives the full multi-pass run.
pub struct TspRunner;

impl TspRunner {
    /// Runs the solver with no reporting.
    pub fn run(points: &[Point], config: &AnnealConfig) -> Result<AnnealResult, Error> {
        Self::run_with_reporter(points, config, &mut NullReporter)
    }

    /// Runs the solver, emitting progress through `reporter`.
    ///
    /// Each pass shrinks the starting temperature by the reduction factor,
    /// cools from there down to `t0 / end_factor`, and resumes from the
    /// previous pass's final working tour. A pass that ends worse than the
    /// global best restores the pre-shrink starting temperature so the next
    /// pass retries the same range instead of cooling further. The run
    /// stops at the temperature floor or after `max_passes`.
    pub fn run_with_reporter<Rep: Reporter>(
        points: &[Point],
        config: &AnnealConfig,
        reporter: &mut Rep,
    ) -> Result<AnnealResult, Error> {
        config.validate()?;
        validate_points(points)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = points.len();
        let identity = Tour::identity(n);
        let mut state = AnnealingState {
            best_length: identity.length(points),
            best_tour: identity,
            t0: config.initial_temperature,
        };

        let mut carried: Option<Tour> = None;
        let mut history: Vec<PassTrace> = Vec::new();
        let mut start_step = 0usize;

        for pass in 0..config.max_passes {
            state.t0 /= config.reduction_factor;
            if state.t0 < config.temperature_floor {
                break;
            }
            let t_min = state.t0 / config.end_factor;
            let schedule = TemperatureSchedule::power(
                state.t0,
                t_min,
                config.steps_per_pass,
                config.shape_exponent,
            );

            reporter.pass_start(pass);
            let initial = match carried.take() {
                Some(tour) => tour,
                None => Tour::random(n, &mut rng),
            };
            let outcome = Annealer::run_pass(
                points,
                initial,
                &schedule,
                config.report_every,
                config.report_tours,
                &mut rng,
                reporter,
            );
            reporter.pass_end(pass, outcome.best_length, state.best_length);

            let steps = schedule.len();
            history.push(PassTrace {
                start_step,
                schedule,
                best_length: outcome.best_length,
            });
            start_step += steps;

            // Two independent strict comparisons: a worse pass restores the
            // starting temperature, a better one advances the global best,
            // and an exactly-equal pass does neither.
            if outcome.best_length > state.best_length {
                state.t0 *= config.reduction_factor;
            }
            if outcome.best_length < state.best_length {
                state.best_length = outcome.best_length;
                state.best_tour = outcome.best_tour;
            }
            carried = Some(outcome.final_tour);
        }

        Ok(AnnealResult {
            best_length: state.best_length,
            best_tour: state.best_tour,
            passes: history.len(),
            history,
        })
    }
}
