use std::fmt::Display;

use thiserror::Error;

use crate::problem::Problem;
use crate::schedule::Schedule;

pub mod greedy;
mod ils;
mod mip;
mod neh;

pub use greedy::Greedy;
pub use ils::Ils;
pub use mip::{MipArcTimeIndexed, MipLinearOrdering, MipPrecedence};
pub use neh::Neh;

/// Errors raised by solver back-ends. The heuristic back-ends never fail;
/// the MIP formulations do when no external solver is linked.
#[derive(Debug, Error)]
pub enum SolverError {
	#[error("No MIP solver back-end is linked into this build ({0}).")]
	MipBackendUnavailable(&'static str),
}

/// Input parameters shared by the solver back-ends. The defaults match the
/// command-line defaults.
#[derive(Clone, Debug)]
pub struct SolverOptions {
	/// Enables the per-iteration output of the iterative back-ends.
	pub verbose: bool,

	/// Seed of the random number generator.
	pub seed: u64,

	/// Number of threads a back-end may use; 0 means all available. Only
	/// honored by back-ends able to run in parallel (the MIP formulations).
	pub threads: u32,

	/// Wall-clock limit in seconds.
	pub time_limit: f64,

	/// Limit on the number of outer iterations.
	pub iterations_limit: i64,

	/// Highest perturbation strength of the ILS.
	pub perturbation_passes_limit: i64,

	/// Local search method: "rvnd" for the randomized descent, anything
	/// else selects the ordered descent.
	pub local_search_method: String,

	/// Applies local search to the initial solution instead of the
	/// perturbed schedule at each ILS iteration (the historical behavior).
	pub search_from_start: bool,

	/// Seeds the MIP back-ends with the greedy solution.
	pub warm_start: bool,
}

impl Default for SolverOptions {
	fn default() -> SolverOptions {
		SolverOptions {
			verbose: false,
			seed: 0,
			threads: 1,
			time_limit: f64::INFINITY,
			iterations_limit: i64::MAX,
			perturbation_passes_limit: 5,
			local_search_method: String::from("vnd"),
			search_from_start: false,
			warm_start: false,
		}
	}
}

/// Insertion-ordered key/value store for additional output of a solver run
/// (iteration counts, runtimes, solver statuses). Keys are listed in the
/// order they were added, so reports print deterministically.
#[derive(Debug, Default)]
pub struct Report {
	entries: Vec<(String, String)>,
}

impl Report {
	pub fn new() -> Report {
		Report { entries: Vec::new() }
	}

	pub fn add(&mut self, key: &str, value: impl Display) {
		self.entries.push((key.to_string(), value.to_string()));
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.iter().find(|(entry_key, _)| entry_key == key)
			.map(|(_, value)| value.as_str())
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}
}

/// Interface implemented by every algorithm that solves the maneuver
/// scheduling problem. `solve` returns the schedule built together with its
/// makespan, and may record additional run information in `report`.
pub trait Algorithm {
	fn solve(
		&self, problem: &Problem, options: &SolverOptions, report: &mut Report
	) -> Result<(Schedule, f64), SolverError>;
}
