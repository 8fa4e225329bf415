use std::cmp::Ordering;

use crate::schedule::Evaluation;

/// Threshold used when comparing floating point values. Two values closer
/// than this are considered equal.
pub const THRESHOLD: f64 = 1e-5;

/// Compares two numbers with tolerance: the result is `Ordering::Equal`
/// whenever the difference between them is smaller than `THRESHOLD`.
///
/// Every comparison of objective values in the optimization core must go
/// through this function (or one of the helpers derived from it), so that
/// ties within the tolerance are never treated as improvements.
pub fn compare(first: f64, second: f64) -> Ordering {
	if (first - second).abs() < THRESHOLD {
		Ordering::Equal
	} else if first < second {
		Ordering::Less
	} else {
		Ordering::Greater
	}
}

pub fn equal(first: f64, second: f64) -> bool {
	compare(first, second) == Ordering::Equal
}

pub fn not_equal(first: f64, second: f64) -> bool {
	compare(first, second) != Ordering::Equal
}

pub fn less(first: f64, second: f64) -> bool {
	compare(first, second) == Ordering::Less
}

pub fn greater(first: f64, second: f64) -> bool {
	compare(first, second) == Ordering::Greater
}

pub fn less_or_equal(first: f64, second: f64) -> bool {
	compare(first, second) != Ordering::Greater
}

pub fn greater_or_equal(first: f64, second: f64) -> bool {
	compare(first, second) != Ordering::Less
}

/// Lexicographic comparison of two evaluations: the makespans are compared
/// first and the sums of completion times break ties.
pub fn compare_evaluations(first: &Evaluation, second: &Evaluation) -> Ordering {
	let result = compare(first.makespan, second.makespan);
	if result != Ordering::Equal {
		result
	} else {
		compare(first.sum_completions, second.sum_completions)
	}
}

pub fn less_evaluation(first: &Evaluation, second: &Evaluation) -> bool {
	compare_evaluations(first, second) == Ordering::Less
}
