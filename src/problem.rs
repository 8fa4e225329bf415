use thiserror::Error;

use crate::compare;
use crate::schedule::{Evaluation, Schedule};

/// Technology used to operate a switch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Technology {
	Unknown,
	Manual,
	Remote,
}

/// The reasons a schedule can fail the feasibility check.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum Infeasibility {
	#[error("The number of maintenance teams is wrong.")]
	WrongTeamCount,

	#[error("Using invalid switch ID.")]
	InvalidSwitchId,

	#[error("There are switches assigned to more than one team or not assigned to any team.")]
	UnbalancedAssignment,

	#[error("Non-remote controlled switch assigned to dummy team 0.")]
	RemoteLaneMismatch,

	#[error("Non-manual controlled switch assigned to a maintenace team.")]
	ManualLaneMismatch,

	#[error("Precedence rules violated.")]
	PrecedenceViolated,
}

/// An instance of the maneuver scheduling problem in the restoration of
/// electric power distribution networks. Switch operations are indexed from
/// 1 to `n` and teams from 1 to `m` (index 0 is the initial location of the
/// teams and the dummy team of the remotely controlled switches). Instances
/// are immutable once constructed.
#[derive(Debug, Clone)]
pub struct Problem {
	/// Number of switch operations (maneuvers).
	pub n: usize,

	/// Number of maintenance teams available.
	pub m: usize,

	/// Technology used on each switch; `technology[0]` is unused.
	pub technology: Vec<Technology>,

	/// Time required to maneuver each switch, with `p[0] = 0`.
	pub p: Vec<f64>,

	/// Travel times, in which `s[i][j][l]` is the time taken by team `l` to
	/// move from the location of switch `i` to the location of switch `j`.
	/// Row `s[0][..][l]` holds the travel times from the team's depot.
	pub s: Vec<Vec<Vec<f64>>>,

	/// Direct predecessors of each switch operation, sorted ascending.
	pub predecessors: Vec<Vec<usize>>,

	/// Direct successors of each switch operation, sorted ascending.
	pub successors: Vec<Vec<usize>>,

	/// Transitive precedence matrix: `precedence[i][j]` is true if `i` must
	/// be maneuvered before `j`, directly or indirectly.
	pub precedence: Vec<Vec<bool>>,
}

impl Problem {

	/// Builds a problem from its raw data. The successor lists and the
	/// transitive precedence matrix are derived from `predecessors`, which
	/// must describe a directed acyclic graph.
	pub fn new(
		n: usize, m: usize, technology: Vec<Technology>, p: Vec<f64>,
		s: Vec<Vec<Vec<f64>>>, mut predecessors: Vec<Vec<usize>>
	) -> Problem {
		assert_eq!(n + 1, technology.len());
		assert_eq!(n + 1, p.len());
		assert_eq!(n + 1, s.len());
		assert_eq!(n + 1, predecessors.len());

		for list in &mut predecessors {
			list.sort_unstable();
			list.dedup();
		}

		let mut successors = vec![Vec::new(); n + 1];
		for j in 1 ..= n {
			for &i in &predecessors[j] {
				successors[i].push(j);
			}
		}

		// Expand the direct predecessor sets into the full precedence matrix
		let mut precedence = vec![vec![false; n + 1]; n + 1];
		let mut processed = vec![false; n + 1];
		let mut pending = Vec::new();
		for j in 1 ..= n {
			processed.fill(false);
			pending.clear();
			pending.extend_from_slice(&predecessors[j]);

			while let Some(i) = pending.pop() {
				if processed[i] {
					continue;
				}
				precedence[i][j] = true;
				processed[i] = true;
				for &k in &predecessors[i] {
					if !processed[k] {
						pending.push(k);
					}
				}
			}
		}

		Problem { n, m, technology, p, s, predecessors, successors, precedence }
	}

	/// Computes the makespan of a schedule: the moment in which the last
	/// maneuver is completed.
	pub fn makespan(&self, schedule: &Schedule) -> f64 {
		let t = self.start_time(schedule);
		let mut makespan = 0.0;
		for i in 1 ..= self.n {
			makespan = f64::max(makespan, t[i] + self.p[i]);
		}
		makespan
	}

	/// Computes the moment in which each maneuver is started, simulating the
	/// lanes of the schedule in rounds. In each round, the head operation of
	/// a lane is released once all of its predecessors have been released;
	/// a manual operation starts after its team travels from its current
	/// location, a remote operation starts as soon as its predecessors
	/// allow. Operations that can never be released (the lane order
	/// contradicts the precedence constraints) keep an infinite start time.
	pub fn start_time(&self, schedule: &Schedule) -> Vec<f64> {
		let mut t = vec![f64::INFINITY; self.n + 1];
		t[0] = 0.0; // the teams are available at their depot at moment 0

		let num_lanes = schedule.lanes.len();
		let mut index = vec![0; num_lanes];
		let mut location = vec![0; num_lanes];

		// Pending predecessor counts; may go negative for operations that
		// are missing from the schedule
		let mut pendings = vec![0i64; self.n + 1];
		for lane in &schedule.lanes {
			for &j in lane {
				pendings[j] = self.predecessors[j].len() as i64;
			}
		}

		let mut count = 0;
		let mut progress = true;
		while count < self.n && progress {
			progress = false;
			for l in 0 .. num_lanes {
				if index[l] >= schedule.lanes[l].len() {
					continue;
				}

				let j = schedule.lanes[l][index[l]];
				if pendings[j] != 0 {
					continue;
				}

				let i = location[l];
				t[j] = if l != 0 { t[i] + self.p[i] + self.s[i][j][l] } else { 0.0 };

				// Wait for the predecessor maneuvers to complete
				for &k in &self.predecessors[j] {
					t[j] = f64::max(t[j], t[k] + self.p[k]);
				}

				for &k in &self.successors[j] {
					pendings[k] -= 1;
				}

				index[l] += 1;
				location[l] = j;
				count += 1;
				progress = true;
			}
		}

		t
	}

	/// Evaluates a schedule: its global makespan and the sum of the
	/// completion times of the work of the maintenance teams. A schedule
	/// whose manual lanes cannot be completed evaluates to the infinite
	/// sentinel on both components.
	pub fn evaluate(&self, schedule: &Schedule) -> Evaluation {
		let t = self.start_time(schedule);

		let mut makespan = 0.0;
		let mut sum_completions = 0.0;

		for l in 1 .. schedule.lanes.len() {
			if let Some(&i) = schedule.lanes[l].last() {
				makespan = f64::max(makespan, t[i] + self.p[i]);
				sum_completions += t[i] + self.p[i];
			}
		}

		for &i in &schedule.lanes[0] {
			makespan = f64::max(makespan, t[i] + self.p[i]);
		}

		Evaluation { makespan, sum_completions }
	}

	/// Checks whether a schedule satisfies all constraints of the problem,
	/// reporting the first violation found: the schedule must have m+1
	/// lanes, assign every switch exactly once, route remote switches to the
	/// dummy lane and manual switches to the maintenance teams, and induce
	/// finite start times that respect the precedence constraints.
	pub fn check_feasible(&self, schedule: &Schedule) -> Result<(), Infeasibility> {
		if schedule.lanes.len() != self.m + 1 {
			return Err(Infeasibility::WrongTeamCount);
		}

		let mut assignment = vec![0; self.n + 1];
		for lane in &schedule.lanes {
			for &i in lane {
				if i < 1 || i > self.n {
					return Err(Infeasibility::InvalidSwitchId);
				}
				assignment[i] += 1;
			}
		}

		for i in 1 ..= self.n {
			if assignment[i] != 1 {
				return Err(Infeasibility::UnbalancedAssignment);
			}
		}

		for &i in &schedule.lanes[0] {
			if self.technology[i] != Technology::Remote {
				return Err(Infeasibility::RemoteLaneMismatch);
			}
		}

		for l in 1 ..= self.m {
			for &i in &schedule.lanes[l] {
				if self.technology[i] != Technology::Manual {
					return Err(Infeasibility::ManualLaneMismatch);
				}
			}
		}

		let t = self.start_time(schedule);
		for j in 1 ..= self.n {
			if t[j].is_infinite() {
				return Err(Infeasibility::PrecedenceViolated);
			}
			for &i in &self.predecessors[j] {
				if compare::less(t[j], t[i]) {
					return Err(Infeasibility::PrecedenceViolated);
				}
			}
		}

		Ok(())
	}

	/// Returns true if and only if the schedule satisfies all constraints.
	pub fn is_feasible(&self, schedule: &Schedule) -> bool {
		self.check_feasible(schedule).is_ok()
	}
}
