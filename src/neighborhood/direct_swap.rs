use rand::rngs::StdRng;
use rand::Rng;

use crate::compare;
use crate::neighborhood::Neighborhood;
use crate::problem::Problem;
use crate::schedule::Entry;

/// Swaps two operations assigned to different maintenance teams, keeping
/// both positions. The dummy lane of the remote switches is never touched.
pub struct DirectSwap;

impl Neighborhood for DirectSwap {

	fn best(&self, problem: &Problem, entry: &Entry) -> Entry {
		let mut best = entry.clone();

		for l1 in 1 ..= problem.m {
			if entry.schedule.lanes[l1].is_empty() {
				continue;
			}

			for l2 in l1 + 1 ..= problem.m {
				if entry.schedule.lanes[l2].is_empty() {
					continue;
				}

				for idx1 in 0 .. entry.schedule.lanes[l1].len() {
					for idx2 in 0 .. entry.schedule.lanes[l2].len() {
						let mut neighbor = entry.schedule.clone();
						let i1 = neighbor.lanes[l1][idx1];
						let i2 = neighbor.lanes[l2][idx2];
						neighbor.lanes[l1][idx1] = i2;
						neighbor.lanes[l2][idx2] = i1;

						let evaluation = problem.evaluate(&neighbor);
						if compare::less_evaluation(&evaluation, &best.evaluation) {
							best = Entry { schedule: neighbor, evaluation };
						}
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
			entry.schedule.lanes[1 ..].iter().filter(|lane| !lane.is_empty()).count() >= 2,
			"a direct swap move requires two non-empty team lanes"
		);

		loop {
			let mut l1 = 1 + rng.random_range(0 .. problem.m);
			while entry.schedule.lanes[l1].is_empty() {
				l1 = 1 + rng.random_range(0 .. problem.m);
			}

			let mut l2 = 1 + rng.random_range(0 .. problem.m);
			while l2 == l1 || entry.schedule.lanes[l2].is_empty() {
				l2 = 1 + rng.random_range(0 .. problem.m);
			}

			let idx1 = rng.random_range(0 .. entry.schedule.lanes[l1].len());
			let idx2 = rng.random_range(0 .. entry.schedule.lanes[l2].len());

			let mut neighbor = entry.schedule.clone();
			let i1 = neighbor.lanes[l1][idx1];
			let i2 = neighbor.lanes[l2][idx2];
			neighbor.lanes[l1][idx1] = i2;
			neighbor.lanes[l2][idx2] = i1;

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

	/// n=2, m=2, both manual, no precedence. Team 1 is fast to switch 1 and
	/// slow to switch 2; team 2 the other way around.
	fn specialized_teams_problem() -> Problem {
		let mut s = vec![vec![vec![0.0; 3]; 3]; 3];
		s[0][1][1] = 1.0;
		s[0][2][1] = 10.0;
		s[0][1][2] = 10.0;
		s[0][2][2] = 1.0;
		Problem::new(
			2, 2,
			vec![Technology::Unknown, Technology::Manual, Technology::Manual],
			vec![0.0, 2.0, 2.0],
			s,
			vec![vec![]; 3],
		)
	}

	fn entry_for(problem: &Problem, schedule: Schedule) -> Entry {
		let evaluation = problem.evaluate(&schedule);
		Entry { schedule, evaluation }
	}

	#[test]
	fn test_best_swaps_misassigned_operations() {
		let problem = specialized_teams_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![2], vec![1]] });
		assert_eq!(12.0, entry.evaluation.makespan);

		let best = DirectSwap.best(&problem, &entry);
		assert_eq!(vec![1], best.schedule.lanes[1]);
		assert_eq!(vec![2], best.schedule.lanes[2]);
		assert_eq!(3.0, best.evaluation.makespan);
	}

	#[test]
	fn test_best_returns_entry_at_local_optimum() {
		let problem = specialized_teams_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![1], vec![2]] });

		let best = DirectSwap.best(&problem, &entry);
		assert_eq!(entry.schedule, best.schedule);
	}

	#[test]
	fn test_any_preserves_lane_sizes() {
		let problem = specialized_teams_problem();
		let entry = entry_for(&problem, Schedule { lanes: vec![vec![], vec![1], vec![2]] });
		let mut rng = StdRng::seed_from_u64(5);

		let neighbor = DirectSwap.any(&problem, &entry, &mut rng, true);
		assert_eq!(1, neighbor.schedule.lanes[1].len());
		assert_eq!(1, neighbor.schedule.lanes[2].len());
		assert_eq!(vec![2], neighbor.schedule.lanes[1]);
		assert_eq!(vec![1], neighbor.schedule.lanes[2]);
	}
}
