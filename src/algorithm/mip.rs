use crate::algorithm::{Algorithm, Report, SolverError, SolverOptions};
use crate::problem::Problem;
use crate::schedule::Schedule;

/// MIP formulation based on precedence variables. Solving it requires an
/// external commercial solver; none is linked into this build, so invoking
/// the back-end only reports an error.
pub struct MipPrecedence;

/// MIP formulation based on linear ordering variables. See `MipPrecedence`
/// for the availability note.
pub struct MipLinearOrdering;

/// MIP formulation with arc-time-indexed variables. See `MipPrecedence`
/// for the availability note.
pub struct MipArcTimeIndexed;

impl Algorithm for MipPrecedence {
	fn solve(
		&self, _problem: &Problem, _options: &SolverOptions, _report: &mut Report
	) -> Result<(Schedule, f64), SolverError> {
		Err(SolverError::MipBackendUnavailable("mip-precedence"))
	}
}

impl Algorithm for MipLinearOrdering {
	fn solve(
		&self, _problem: &Problem, _options: &SolverOptions, _report: &mut Report
	) -> Result<(Schedule, f64), SolverError> {
		Err(SolverError::MipBackendUnavailable("mip-linear-ordering"))
	}
}

impl Algorithm for MipArcTimeIndexed {
	fn solve(
		&self, _problem: &Problem, _options: &SolverOptions, _report: &mut Report
	) -> Result<(Schedule, f64), SolverError> {
		Err(SolverError::MipBackendUnavailable("mip-arc-time-indexed"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::problem::Technology;

	#[test]
	fn test_mip_back_ends_report_errors() {
		let problem = Problem::new(
			1, 1,
			vec![Technology::Unknown, Technology::Manual],
			vec![0.0, 1.0],
			vec![vec![vec![0.0; 2]; 2]; 2],
			vec![vec![], vec![]],
		);
		let options = SolverOptions::default();

		let mut report = Report::new();
		let result = MipPrecedence.solve(&problem, &options, &mut report);
		assert!(result.is_err());
		assert_eq!(
			"No MIP solver back-end is linked into this build (mip-precedence).",
			result.unwrap_err().to_string()
		);

		assert!(MipLinearOrdering.solve(&problem, &options, &mut report).is_err());
		assert!(MipArcTimeIndexed.solve(&problem, &options, &mut report).is_err());
	}
}
