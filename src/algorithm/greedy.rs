use crate::algorithm::{Algorithm, Report, SolverError, SolverOptions};
use crate::problem::{Problem, Technology};
use crate::schedule::Schedule;

/// Greedy constructive heuristic based on earliest start times: remotely
/// controlled switches are released as soon as their predecessors allow,
/// and each manual switch is appended to the team that can reach it first.
pub struct Greedy;

impl Algorithm for Greedy {
	fn solve(
		&self, problem: &Problem, _options: &SolverOptions, _report: &mut Report
	) -> Result<(Schedule, f64), SolverError> {
		Ok(build(problem))
	}
}

/// Builds the greedy schedule. Returns the schedule together with the
/// latest completion time among the manual maneuvers (callers interested in
/// the full makespan recompute it from the schedule).
pub fn build(problem: &Problem) -> (Schedule, f64) {
	let mut schedule = Schedule::empty(problem.m);
	let mut makespan = 0.0;

	// Unscheduled operations, their unresolved predecessor counts, the
	// start time of each released operation, and the last operation
	// assigned to each team
	let mut s_manual = Vec::new();
	let mut s_remote = Vec::new();
	let mut gamma = vec![0i64; problem.n + 1];
	let mut t = vec![0.0; problem.n + 1];
	let mut phi = vec![0; problem.m + 1];

	for i in 1 ..= problem.n {
		gamma[i] = problem.predecessors[i].len() as i64;
		match problem.technology[i] {
			Technology::Manual => s_manual.push(i),
			Technology::Remote => s_remote.push(i),
			Technology::Unknown => {}
		}
	}

	while !s_manual.is_empty() || !s_remote.is_empty() {

		// Drain every remotely controlled switch whose predecessors have
		// all been scheduled into the dummy lane
		loop {
			let mut released = false;
			let mut idx = 0;
			while idx < s_remote.len() {
				let j = s_remote[idx];
				if gamma[j] != 0 {
					idx += 1;
					continue;
				}

				t[j] = 0.0;
				for &i in &problem.predecessors[j] {
					t[j] = f64::max(t[j], t[i] + problem.p[i]);
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

		// Choose the switch and team pair with the earliest possible start;
		// the first pair found wins ties
		let mut criterion = f64::MAX;
		let mut chosen_j = 0;
		let mut chosen_l = 0;
		for &j_trial in &s_manual {
			if gamma[j_trial] != 0 {
				continue;
			}
			for l_trial in 1 ..= problem.m {
				let last = phi[l_trial];
				let criterion_trial = t[last] + problem.p[last] + problem.s[last][j_trial][l_trial];
				if criterion_trial < criterion {
					criterion = criterion_trial;
					chosen_j = j_trial;
					chosen_l = l_trial;
				}
			}
		}
		assert!(
			chosen_j != 0,
			"no manual operation can be released; the precedence data is cyclic"
		);

		// The maneuver starts after the team's travel and after every
		// predecessor maneuver has completed
		let last = phi[chosen_l];
		t[chosen_j] = t[last] + problem.p[last] + problem.s[last][chosen_j][chosen_l];
		for &i in &problem.predecessors[chosen_j] {
			t[chosen_j] = f64::max(t[chosen_j], t[i] + problem.p[i]);
		}
		for &i in &problem.successors[chosen_j] {
			gamma[i] -= 1;
		}

		schedule.lanes[chosen_l].push(chosen_j);
		phi[chosen_l] = chosen_j;
		makespan = f64::max(makespan, t[chosen_j] + problem.p[chosen_j]);
		s_manual.retain(|&j| j != chosen_j);
	}

	(schedule, makespan)
}
