use rand::rngs::StdRng;
use rand::Rng;

use crate::compare;
use crate::neighborhood::Neighborhood;
use crate::problem::Problem;
use crate::schedule::Entry;

/// Removes an operation from its position and reinserts it at another
/// position of the same lane.
pub struct Shift;

impl Neighborhood for Shift {

	fn best(&self, problem: &Problem, entry: &Entry) -> Entry {
		let mut best = entry.clone();

		for l in 0 ..= problem.m {
			for idx_origin in 0 .. entry.schedule.lanes[l].len() {
				for idx_target in 0 .. entry.schedule.lanes[l].len() {
					if idx_target == idx_origin {
						continue;
					}

					let mut neighbor = entry.schedule.clone();
					let i = neighbor.lanes[l].remove(idx_origin);
					neighbor.lanes[l].insert(idx_target, i);

					let evaluation = problem.evaluate(&neighbor);
					if compare::less_evaluation(&evaluation, &best.evaluation) {
						best = Entry { schedule: neighbor, evaluation };
					}
				}
			}
		}

		best
	}

	fn any(
		&self, problem: &Problem, entry: &Entry, rng: &mut StdRng, feasible_only: bool
	) -> Entry {
		assert!(
			entry.schedule.lanes.iter().any(|lane| lane.len() >= 2),
			"a shift move requires a lane with at least two operations"
		);

		loop {
			let mut l = rng.random_range(0 ..= problem.m);
			while entry.schedule.lanes[l].len() < 2 {
				l = rng.random_range(0 ..= problem.m);
			}

			let size = entry.schedule.lanes[l].len();
			let idx_origin = rng.random_range(0 .. size);
			let mut idx_target = rng.random_range(0 .. size);
			while idx_target == idx_origin {
				idx_target = rng.random_range(0 .. size);
			}

			let mut neighbor = entry.schedule.clone();
			let i = neighbor.lanes[l].remove(idx_origin);
			neighbor.lanes[l].insert(idx_target, i);

			let evaluation = problem.evaluate(&neighbor);
			if !feasible_only || evaluation.is_finite() {
				return Entry { schedule: neighbor, evaluation };
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;
	use crate::problem::Technology;
	use crate::schedule::Schedule;

	/// n=2, m=1, both manual, edge 1 -> 2, all travel times 1. The only
	/// feasible order of the single team is [1, 2].
	fn chain_problem() -> Problem {
		Problem::new(
			2, 1,
			vec![Technology::Unknown, Technology::Manual, Technology::Manual],
			vec![0.0, 3.0, 4.0],
			vec![vec![vec![1.0; 2]; 3]; 3],
			vec![vec![], vec![], vec![1]],
		)
	}

	fn entry_for(problem: &Problem, schedule: Schedule) -> Entry {
		let evaluation = problem.evaluate(&schedule);
		Entry { schedule, evaluation }
	}

	#[test]
	fn test_best_repairs_inverted_chain() {
		let problem = chain_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![2, 1]] });
		assert!(!entry.evaluation.is_finite());

		let best = Shift.best(&problem, &entry);
		assert_eq!(vec![1, 2], best.schedule.lanes[1]);
		assert_eq!(9.0, best.evaluation.makespan);

		// the entry itself must be untouched
		assert_eq!(vec![2, 1], entry.schedule.lanes[1]);
	}

	#[test]
	fn test_best_returns_entry_at_local_optimum() {
		let problem = chain_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![1, 2]] });

		let best = Shift.best(&problem, &entry);
		assert_eq!(entry.schedule, best.schedule);
		assert_eq!(entry.evaluation, best.evaluation);
	}

	#[test]
	fn test_any_resamples_until_feasible() {
		// from [2, 1] the only shift neighbor is [1, 2], which is feasible
		let problem = chain_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![2, 1]] });
		let mut rng = StdRng::seed_from_u64(7);

		for _counter in 0 .. 20 {
			let neighbor = Shift.any(&problem, &entry, &mut rng, true);
			assert!(neighbor.evaluation.is_finite());
			assert_eq!(vec![1, 2], neighbor.schedule.lanes[1]);
		}
	}

	#[test]
	fn test_any_can_return_infeasible_neighbors() {
		let problem = chain_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![1, 2]] });
		let mut rng = StdRng::seed_from_u64(7);

		// every shift neighbor of [1, 2] is the deadlocked [2, 1]
		let neighbor = Shift.any(&problem, &entry, &mut rng, false);
		assert_eq!(vec![2, 1], neighbor.schedule.lanes[1]);
		assert!(!neighbor.evaluation.is_finite());
	}
}
