use rand::rngs::StdRng;
use rand::Rng;

use crate::compare;
use crate::neighborhood::Neighborhood;
use crate::problem::Problem;
use crate::schedule::Entry;

/// Moves an operation from one maintenance team to any position of another
/// team's lane. The dummy lane of the remote switches is never touched.
pub struct Reassignment;

impl Neighborhood for Reassignment {

	fn best(&self, problem: &Problem, entry: &Entry) -> Entry {
		let mut best = entry.clone();

		for l_origin in 1 ..= problem.m {
			for idx_origin in 0 .. entry.schedule.lanes[l_origin].len() {
				for l_target in 1 ..= problem.m {
					if l_target == l_origin {
						continue;
					}

					for idx_target in 0 ..= entry.schedule.lanes[l_target].len() {
						let mut neighbor = entry.schedule.clone();
						let i = neighbor.lanes[l_origin].remove(idx_origin);
						neighbor.lanes[l_target].insert(idx_target, i);

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
		assert!(problem.m >= 2, "a reassignment move requires at least two teams");
		assert!(
			entry.schedule.lanes[1 ..].iter().any(|lane| !lane.is_empty()),
			"a reassignment move requires a non-empty team lane"
		);

		loop {
			let mut l_origin = 1 + rng.random_range(0 .. problem.m);
			while entry.schedule.lanes[l_origin].is_empty() {
				l_origin = 1 + rng.random_range(0 .. problem.m);
			}

			let mut l_target = 1 + rng.random_range(0 .. problem.m);
			while l_target == l_origin {
				l_target = 1 + rng.random_range(0 .. problem.m);
			}

			let idx_origin = rng.random_range(0 .. entry.schedule.lanes[l_origin].len());
			let mut idx_target = 0;
			if !entry.schedule.lanes[l_target].is_empty() {
				idx_target = rng.random_range(0 .. entry.schedule.lanes[l_target].len());
			}

			let mut neighbor = entry.schedule.clone();
			let i = neighbor.lanes[l_origin].remove(idx_origin);
			neighbor.lanes[l_target].insert(idx_target, i);

			let evaluation = problem.evaluate(&neighbor);
			if !feasible_only || evaluation.is_finite() {
				return Entry { schedule: neighbor, evaluation };
			}
		}
	}
}
