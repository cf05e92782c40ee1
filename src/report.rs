//! Progress reporting interface.
//!
//! The optimizer core does not render, persist, or print; it only emits
//! periodic snapshots through a [`Reporter`]. Reporter failures are a
//! collaborator concern — the trait is infallible from the core's view.

use crate::geometry::Point;

/// One periodic observation of the Metropolis loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSnapshot {
    /// 1-based iteration counter within the pass.
    pub iteration: usize,
    /// Temperature at this iteration.
    pub temperature: f64,
    /// Length of the working tour before this iteration's move.
    pub length: f64,
    /// Candidate length minus current length.
    pub length_delta: f64,
}

/// Receives diagnostic events from the annealer and controller.
///
/// All methods default to no-ops so a reporter only implements the events
/// it cares about.
pub trait Reporter {
    /// A new annealing pass is starting (0-based index).
    fn pass_start(&mut self, _pass: usize) {}

    /// Emitted every `report_every` Metropolis iterations.
    fn step(&mut self, _snapshot: &StepSnapshot) {}

    /// The working tour at a reporting interval, for live display.
    /// Only emitted when `report_tours` is enabled.
    fn tour(&mut self, _points: &[Point], _order: &[usize]) {}

    /// A pass finished with its best length; `best_length` is the global
    /// best before this pass's result is folded in.
    fn pass_end(&mut self, _pass: usize, _pass_best: f64, _best_length: f64) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Collects every event in memory, for tests and offline plotting.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub snapshots: Vec<StepSnapshot>,
    pub tours: Vec<Vec<usize>>,
    pub pass_bests: Vec<(usize, f64)>,
    pub global_bests: Vec<f64>,
}

impl Reporter for RecordingReporter {
    fn step(&mut self, snapshot: &StepSnapshot) {
        self.snapshots.push(*snapshot);
    }

    fn tour(&mut self, _points: &[Point], order: &[usize]) {
        self.tours.push(order.to_vec());
    }

    fn pass_end(&mut self, pass: usize, pass_best: f64, best_length: f64) {
        self.pass_bests.push((pass, pass_best));
        self.global_bests.push(best_length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_collects_steps() {
        let mut r = RecordingReporter::default();
        let snap = StepSnapshot {
            iteration: 10,
            temperature: 5.0,
            length: 12.5,
            length_delta: -0.25,
        };
        r.step(&snap);
        r.pass_end(0, 12.5, 13.0);
        assert_eq!(r.snapshots, vec![snap]);
        assert_eq!(r.pass_bests, vec![(0, 12.5)]);
    }
}
