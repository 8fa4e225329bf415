use rand::rngs::StdRng;
use rand::Rng;

use crate::compare;
use crate::neighborhood::Neighborhood;
use crate::problem::Problem;
use crate::schedule::Entry;

/// Standard best-improvement local search over a single neighborhood: the
/// incumbent is replaced by its best neighbor until no neighbor is strictly
/// better under the epsilon comparator.
pub fn standard(problem: &Problem, entry: &Entry, neighborhood: &dyn Neighborhood) -> Entry {
	let mut incumbent = entry.clone();

	loop {
		let trial = neighborhood.best(problem, &incumbent);
		if compare::less_evaluation(&trial.evaluation, &incumbent.evaluation) {
			incumbent = trial;
		} else {
			return incumbent;
		}
	}
}

/// Variable neighborhood descent: the neighborhoods are explored in their
/// given order, restarting from the first one after every improvement. The
/// result is a local optimum of every neighborhood in the list.
pub fn vnd(problem: &Problem, entry: &Entry, neighborhoods: &[Box<dyn Neighborhood>]) -> Entry {
	let mut incumbent = entry.clone();

	let mut k = 0;
	while k < neighborhoods.len() {
		let trial = neighborhoods[k].best(problem, &incumbent);
		if compare::less_evaluation(&trial.evaluation, &incumbent.evaluation) {
			incumbent = trial;
			k = 0;
		} else {
			k += 1;
		}
	}

	incumbent
}

/// Randomized variable neighborhood descent: neighborhoods are drawn from a
/// pool in random order and removed as they fail to improve. The pool is
/// replenished to the full list only when an improvement is found, so every
/// neighborhood is tried at most once per pass.
pub fn rvnd(
	problem: &Problem, entry: &Entry, neighborhoods: &[Box<dyn Neighborhood>], rng: &mut StdRng
) -> Entry {
	let mut incumbent = entry.clone();

	let mut available: Vec<usize> = (0 .. neighborhoods.len()).collect();
	while !available.is_empty() {
		let idx = rng.random_range(0 .. available.len());
		let neighborhood = &neighborhoods[available.remove(idx)];

		let trial = neighborhood.best(problem, &incumbent);
		if compare::less_evaluation(&trial.evaluation, &incumbent.evaluation) {
			incumbent = trial;
			available = (0 .. neighborhoods.len()).collect();
		}
	}

	incumbent
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;
	use crate::neighborhood::{DirectSwap, Exchange, Reassignment, Shift};
	use crate::problem::Technology;
	use crate::schedule::Schedule;

	/// n=4, m=2, all manual, edge 1 -> 3, all travel times 1.
	fn playground_problem() -> Problem {
		Problem::new(
			4, 2,
			vec![
				Technology::Unknown,
				Technology::Manual, Technology::Manual,
				Technology::Manual, Technology::Manual,
			],
			vec![0.0, 2.0, 3.0, 2.0, 4.0],
			vec![vec![vec![1.0; 3]; 5]; 5],
			vec![vec![], vec![], vec![], vec![1], vec![]],
		)
	}

	fn full_list() -> Vec<Box<dyn Neighborhood>> {
		vec![
			Box::new(Shift),
			Box::new(Exchange),
			Box::new(Reassignment),
			Box::new(DirectSwap),
		]
	}

	fn stacked_entry(problem: &Problem) -> Entry {
		let schedule = Schedule { lanes: vec![vec![], vec![1, 2, 3, 4], vec![]] };
		let evaluation = problem.evaluate(&schedule);
		Entry { schedule, evaluation }
	}

	#[test]
	fn test_standard_reaches_fixed_point() {
		let problem = playground_problem();
		let entry = stacked_entry(&problem);

		let result = standard(&problem, &entry, &Shift);
		assert!(compare::less_evaluation(&result.evaluation, &entry.evaluation)
			|| result.schedule == entry.schedule);

		// no shift neighbor of the result may be strictly better
		let trial = Shift.best(&problem, &result);
		assert!(!compare::less_evaluation(&trial.evaluation, &result.evaluation));
	}

	#[test]
	fn test_vnd_returns_local_optimum_of_every_neighborhood() {
		let problem = playground_problem();
		let entry = stacked_entry(&problem);

		let result = vnd(&problem, &entry, &full_list());
		assert!(compare::less_evaluation(&result.evaluation, &entry.evaluation));
		assert!(problem.is_feasible(&result.schedule));

		for neighborhood in &full_list() {
			let trial = neighborhood.best(&problem, &result);
			assert!(!compare::less_evaluation(&trial.evaluation, &result.evaluation));
		}
	}

	#[test]
	fn test_rvnd_returns_local_optimum_of_every_neighborhood() {
		let problem = playground_problem();
		let entry = stacked_entry(&problem);
		let mut rng = StdRng::seed_from_u64(0);

		let result = rvnd(&problem, &entry, &full_list(), &mut rng);
		assert!(compare::less_evaluation(&result.evaluation, &entry.evaluation));
		assert!(problem.is_feasible(&result.schedule));

		for neighborhood in &full_list() {
			let trial = neighborhood.best(&problem, &result);
			assert!(!compare::less_evaluation(&trial.evaluation, &result.evaluation));
		}
	}

	#[test]
	fn test_rvnd_is_deterministic_for_a_seed() {
		let problem = playground_problem();
		let entry = stacked_entry(&problem);

		let first = rvnd(&problem, &entry, &full_list(), &mut StdRng::seed_from_u64(42));
		let second = rvnd(&problem, &entry, &full_list(), &mut StdRng::seed_from_u64(42));
		assert_eq!(first.schedule, second.schedule);
		assert_eq!(first.evaluation, second.evaluation);
	}

	#[test]
	fn test_drivers_never_adopt_infeasible_neighbors() {
		// the entry is feasible; every driver must keep it that way even
		// though the neighborhoods generate deadlocked schedules freely
		let problem = playground_problem();
		let entry = stacked_entry(&problem);

		let result = vnd(&problem, &entry, &full_list());
		assert!(result.evaluation.is_finite());
	}
}
