use rand::rngs::StdRng;

use crate::problem::Problem;
use crate::schedule::Entry;

mod direct_swap;
mod exchange;
mod reassignment;
mod shift;

pub use direct_swap::DirectSwap;
pub use exchange::Exchange;
pub use reassignment::Reassignment;
pub use shift::Shift;

/// A neighborhood structure over schedules. Implementations are stateless;
/// a single instance of each can serve an entire run.
///
/// Neighbors are always built on a copy of the entry schedule; the entry
/// itself is never mutated.
pub trait Neighborhood {

	/// Returns the best neighbor of `entry` under the epsilon comparator,
	/// or a copy of `entry` itself when no neighbor is strictly better.
	/// The neighborhood is scanned in a fixed lexicographic order, so the
	/// result is deterministic.
	fn best(&self, problem: &Problem, entry: &Entry) -> Entry;

	/// Returns a randomly chosen neighbor of `entry`. When `feasible_only`
	/// is set, moves are redrawn until the resulting schedule is feasible
	/// (finite makespan). Panics when the schedule has no lane that can
	/// host the move at all.
	fn any(
		&self, problem: &Problem, entry: &Entry, rng: &mut StdRng, feasible_only: bool
	) -> Entry;
}
