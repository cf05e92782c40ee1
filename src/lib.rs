//! Approximate Euclidean travelling-salesman solving via simulated
//! annealing.
//!
//! Given labeled 2D points with the first point duplicated at the end
//! (closed-path convention), the solver searches for a short closed tour
//! using adaptive multi-pass annealing:
//!
//! - **geometry**: distances and path lengths over ordered point sequences.
//! - **tour**: the anchored-endpoint tour representation and its swap move.
//! - **anneal**: the Metropolis loop, cooling schedules, and the outer
//!   pass controller.
//! - **report**: the observation seam — the core never prints, renders,
//!   or persists anything itself.
//! - **input**: parsing of `x y name` city files, outside the optimizer
//!   core.
//!
//! The search is single-threaded and deterministic under a fixed seed.
//!
//! # Examples
//!
//! ```
//! use tsp_anneal::anneal::{AnnealConfig, TspRunner};
//! use tsp_anneal::geometry::Point;
//!
//! // Unit square, closed by repeating the first corner.
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(0.0, 0.0),
//! ];
//!
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(10.0)
//!     .with_steps_per_pass(1000)
//!     .with_reduction_factor(1.5)
//!     .with_end_factor(10.0)
//!     .with_shape_exponent(1.0)
//!     .with_max_passes(20)
//!     .with_seed(42);
//!
//! let result = TspRunner::run(&points, &config).unwrap();
//! assert!(result.best_length <= 4.01);
//! ```

pub mod anneal;
pub mod error;
pub mod geometry;
pub mod input;
pub mod report;
pub mod tour;

pub use anneal::{AnnealConfig, AnnealResult, TspRunner};
pub use error::Error;
pub use geometry::Point;
pub use report::{NullReporter, Reporter, StepSnapshot};
pub use tour::Tour;
