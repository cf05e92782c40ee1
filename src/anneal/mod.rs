//! Adaptive multi-pass simulated annealing.
//!
//! The solver runs the Metropolis loop over a sequence of cooling passes.
//! Each pass owns one power-shaped temperature schedule; between passes the
//! starting temperature shrinks geometrically, and a pass that ends worse
//! than the global best gets its starting temperature restored so the next
//! pass retries the same range.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod controller;
mod runner;
mod schedule;

pub use config::AnnealConfig;
pub use controller::{AnnealResult, PassTrace, TspRunner};
pub use runner::{Annealer, PassOutcome};
pub use schedule::TemperatureSchedule;
