use crate::algorithm::{Algorithm, Report, SolverError, SolverOptions};
use crate::compare;
use crate::problem::{Problem, Technology};
use crate::schedule::Schedule;

/// NEH-style constructive heuristic: like the greedy heuristic it releases
/// operations in precedence order, but each ready manual switch is tried at
/// every insertion position of every team, and the insertion with the
/// lowest resulting makespan wins.
pub struct Neh;

impl Algorithm for Neh {
	fn solve(
		&self, problem: &Problem, _options: &SolverOptions, _report: &mut Report
	) -> Result<(Schedule, f64), SolverError> {
		Ok(build(problem))
	}
}

/// Builds the schedule, returning it together with its makespan.
pub fn build(problem: &Problem) -> (Schedule, f64) {
	let mut schedule = Schedule::empty(problem.m);

	let mut s_manual = Vec::new();
	let mut s_remote = Vec::new();
	let mut gamma = vec![0i64; problem.n + 1];

	for i in 1 ..= problem.n {
		gamma[i] = problem.predecessors[i].len() as i64;
		match problem.technology[i] {
			Technology::Manual => s_manual.push(i),
			Technology::Remote => s_remote.push(i),
			Technology::Unknown => {}
		}
	}

	while !s_manual.is_empty() || !s_remote.is_empty() {

		// Ready remote switches go straight to the dummy lane
		loop {
			let mut released = false;
			let mut idx = 0;
			while idx < s_remote.len() {
				let j = s_remote[idx];
				if gamma[j] != 0 {
					idx += 1;
					continue;
				}

				for &i in &problem.successors[j] {
					gamma[i] -= 1;
				}
				schedule.lanes[0].push(j);
				s_remote.remove(idx);
				released = true;
			}
			if !released {
				break;
			}
		}

		if s_manual.is_empty() {
			assert!(
				s_remote.is_empty(),
				"no operation can be released; the precedence data is cyclic"
			);
			continue;
		}

		// Try every ready switch at every insertion position of every team
		// and keep the insertion with the lowest makespan
		let mut best_objective = f64::INFINITY;
		let mut best_j = 0;
		let mut best_l = 0;
		let mut best_idx = 0;
		for &j_trial in &s_manual {
			if gamma[j_trial] != 0 {
				continue;
			}
			for l_trial in 1 ..= problem.m {
				for idx_trial in 0 ..= schedule.lanes[l_trial].len() {
					schedule.lanes[l_trial].insert(idx_trial, j_trial);

					let t = problem.start_time(&schedule);
					let mut trial_objective = 0.0;
					for lane in &schedule.lanes {
						for &j in lane {
							trial_objective = f64::max(trial_objective, t[j] + problem.p[j]);
						}
					}

					if compare::less(trial_objective, best_objective) {
						best_objective = trial_objective;
						best_j = j_trial;
						best_l = l_trial;
						best_idx = idx_trial;
					}

					schedule.lanes[l_trial].remove(idx_trial);
				}
			}
		}
		assert!(
			best_j != 0,
			"no manual operation can be released; the precedence data is cyclic"
		);

		for &i in &problem.successors[best_j] {
			gamma[i] -= 1;
		}
		schedule.lanes[best_l].insert(best_idx, best_j);
		s_manual.retain(|&j| j != best_j);
	}

	let makespan = problem.makespan(&schedule);
	(schedule, makespan)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn uniform_travel(n: usize, m: usize, value: f64) -> Vec<Vec<Vec<f64>>> {
		vec![vec![vec![value; m + 1]; n + 1]; n + 1]
	}

	#[test]
	fn test_precedence_forces_second_team() {
		// same instance as the greedy test: inserting 2 on team 2 yields
		// makespan 8, keeping it behind 1 on team 1 yields 9
		let problem = Problem::new(
			2, 2,
			vec![Technology::Unknown, Technology::Manual, Technology::Manual],
			vec![0.0, 3.0, 4.0],
			uniform_travel(2, 2, 1.0),
			vec![vec![], vec![], vec![1]],
		);

		let (schedule, makespan) = build(&problem);
		assert_eq!(vec![1], schedule.lanes[1]);
		assert_eq!(vec![2], schedule.lanes[2]);
		assert_eq!(8.0, makespan);
		assert!(problem.is_feasible(&schedule));
	}

	#[test]
	fn test_insertion_beats_appending() {
		// switch 2 is placed first (closest to the depot), but switch 1
		// belongs in front of it: [1, 2] has makespan 9, [2, 1] has 14
		let mut s = uniform_travel(2, 1, 0.0);
		s[0][1][1] = 5.0;
		s[0][2][1] = 1.0;
		s[1][2][1] = 1.0;
		s[2][1][1] = 10.0;
		let problem = Problem::new(
			2, 1,
			vec![Technology::Unknown, Technology::Manual, Technology::Manual],
			vec![0.0, 1.0, 2.0],
			s,
			vec![vec![], vec![], vec![]],
		);

		let (schedule, makespan) = build(&problem);
		assert!(problem.is_feasible(&schedule));
		assert_eq!(vec![1, 2], schedule.lanes[1]);
		assert_eq!(9.0, makespan);
	}

	#[test]
	fn test_all_remote_instance() {
		let problem = Problem::new(
			2, 1,
			vec![Technology::Unknown, Technology::Remote, Technology::Remote],
			vec![0.0, 1.0, 1.0],
			uniform_travel(2, 1, 0.0),
			vec![vec![], vec![], vec![]],
		);

		let (schedule, makespan) = build(&problem);
		assert_eq!(vec![1, 2], schedule.lanes[0]);
		assert_eq!(1.0, makespan);
	}
}
