use std::fmt;

/// A solution for the maneuver scheduling problem, encoded as m+1 lanes of
/// switch IDs. Lane `l` holds the sequence of maneuvers performed by team
/// `l`, in execution order. Lane 0 is the dummy lane holding the remotely
/// controlled switches; its internal order does not affect start times.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
	pub lanes: Vec<Vec<usize>>,
}

impl Schedule {
	/// Creates an empty schedule for `m` maintenance teams. The teams are
	/// indexed from 1 to `m`; index 0 is reserved for the remotely
	/// controlled switches.
	pub fn empty(m: usize) -> Schedule {
		Schedule { lanes: vec![Vec::new(); m + 1] }
	}

	pub fn num_teams(&self) -> usize {
		self.lanes.len() - 1
	}
}

impl fmt::Display for Schedule {
	fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		write!(formatter, "REMOTE : [")?;
		for i in &self.lanes[0] {
			write!(formatter, "{}, ", i)?;
		}
		write!(formatter, "]")?;

		for l in 1 .. self.lanes.len() {
			writeln!(formatter)?;
			write!(formatter, "TEAM {} : [", l)?;
			for i in &self.lanes[l] {
				write!(formatter, "{}, ", i)?;
			}
			write!(formatter, "]")?;
		}

		Ok(())
	}
}

/// The objective value of a schedule: its makespan and the sum of the
/// completion times of the work of the maintenance teams. Evaluations are
/// ordered lexicographically through `compare::compare_evaluations`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
	pub makespan: f64,
	pub sum_completions: f64,
}

impl Evaluation {
	/// The sentinel evaluation of a schedule whose simulation could not
	/// release every operation.
	pub fn infeasible() -> Evaluation {
		Evaluation { makespan: f64::INFINITY, sum_completions: f64::INFINITY }
	}

	/// Returns true if and only if the makespan is finite, which is if and
	/// only if the simulated schedule released every operation it contains.
	pub fn is_finite(&self) -> bool {
		self.makespan != f64::INFINITY
	}
}

/// A schedule paired with its evaluation. The local search drivers and the
/// ILS pass entries around so that schedules are never re-evaluated.
#[derive(Clone, Debug)]
pub struct Entry {
	pub schedule: Schedule,
	pub evaluation: Evaluation,
}
