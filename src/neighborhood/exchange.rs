use rand::rngs::StdRng;
use rand::Rng;

use crate::compare;
use crate::neighborhood::Neighborhood;
use crate::problem::Problem;
use crate::schedule::Entry;

/// Swaps two operations within the same lane.
pub struct Exchange;

impl Neighborhood for Exchange {

	fn best(&self, problem: &Problem, entry: &Entry) -> Entry {
		let mut best = entry.clone();

		for l in 0 ..= problem.m {
			if entry.schedule.lanes[l].len() < 2 {
				continue;
			}

			for idx1 in 0 .. entry.schedule.lanes[l].len() - 1 {
				for idx2 in idx1 + 1 .. entry.schedule.lanes[l].len() {
					let mut neighbor = entry.schedule.clone();
					neighbor.lanes[l].swap(idx1, idx2);

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
			"an exchange move requires a lane with at least two operations"
		);

		loop {
			let mut l = rng.random_range(0 ..= problem.m);
			while entry.schedule.lanes[l].len() < 2 {
				l = rng.random_range(0 ..= problem.m);
			}

			let size = entry.schedule.lanes[l].len();
			let idx1 = rng.random_range(0 .. size);
			let mut idx2 = rng.random_range(0 .. size);
			while idx2 == idx1 {
				idx2 = rng.random_range(0 .. size);
			}

			let mut neighbor = entry.schedule.clone();
			neighbor.lanes[l].swap(idx1, idx2);

			let evaluation = problem.evaluate(&neighbor);
			if !feasible_only || evaluation.is_finite() {
				return Entry { schedule: neighbor, evaluation };
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::problem::Technology;
	use crate::schedule::Schedule;

	/// n=3, m=1, all manual, no precedence. Travel from the depot is cheap
	/// to switch 1 and expensive to switch 3, so [1, 2, 3] beats [3, 2, 1].
	fn asymmetric_problem() -> Problem {
		let mut s = vec![vec![vec![0.0; 2]; 4]; 4];
		s[0][1][1] = 1.0;
		s[0][2][1] = 5.0;
		s[0][3][1] = 9.0;
		s[1][2][1] = 1.0;
		s[2][3][1] = 1.0;
		s[3][2][1] = 5.0;
		s[2][1][1] = 5.0;
		Problem::new(
			3, 1,
			vec![Technology::Unknown, Technology::Manual, Technology::Manual, Technology::Manual],
			vec![0.0, 1.0, 1.0, 1.0],
			s,
			vec![vec![]; 4],
		)
	}

	fn entry_for(problem: &Problem, schedule: Schedule) -> Entry {
		let evaluation = problem.evaluate(&schedule);
		Entry { schedule, evaluation }
	}

	#[test]
	fn test_best_improves_expensive_order() {
		let problem = asymmetric_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![3, 2, 1]] });

		let best = Exchange.best(&problem, &entry);
		assert!(compare::less_evaluation(&best.evaluation, &entry.evaluation));

		// exactly two positions of the lane differ from the entry
		let changed = best.schedule.lanes[1].iter()
			.zip(entry.schedule.lanes[1].iter())
			.filter(|(a, b)| a != b)
			.count();
		assert_eq!(2, changed);
	}

	#[test]
	fn test_best_returns_entry_at_local_optimum() {
		let problem = asymmetric_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![1, 2, 3]] });

		let best = Exchange.best(&problem, &entry);
		assert_eq!(entry.schedule, best.schedule);
	}

	#[test]
	fn test_any_swaps_two_positions() {
		use rand::SeedableRng;

		let problem = asymmetric_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![1, 2, 3]] });
		let mut rng = StdRng::seed_from_u64(3);

		for _counter in 0 .. 20 {
			let neighbor = Exchange.any(&problem, &entry, &mut rng, true);
			assert!(neighbor.evaluation.is_finite());

			let mut sorted = neighbor.schedule.lanes[1].clone();
			sorted.sort_unstable();
			assert_eq!(vec![1, 2, 3], sorted);

			let changed = neighbor.schedule.lanes[1].iter()
				.zip(entry.schedule.lanes[1].iter())
				.filter(|(a, b)| a != b)
				.count();
			assert_eq!(2, changed);
		}
	}
}
