use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::algorithm::{greedy, Algorithm, Report, SolverError, SolverOptions};
use crate::compare;
use crate::local_search;
use crate::neighborhood::{DirectSwap, Exchange, Neighborhood, Reassignment, Shift};
use crate::problem::Problem;
use crate::schedule::{Entry, Evaluation, Schedule};

/// Iterated local search: a greedy start solution is driven to a local
/// optimum, then repeatedly perturbed and re-optimized. The perturbation
/// strength grows with every non-improving iteration and resets on every
/// improvement; the run stops when the strength passes its limit, or when
/// the time or iteration limit is hit.
pub struct Ils;

impl Algorithm for Ils {
	fn solve(
		&self, problem: &Problem, options: &SolverOptions, report: &mut Report
	) -> Result<(Schedule, f64), SolverError> {
		let mut rng = StdRng::seed_from_u64(options.seed);
		let randomized_vnd = options.local_search_method == "rvnd";

		let neighborhoods: Vec<Box<dyn Neighborhood>> = vec![
			Box::new(Shift),
			Box::new(Exchange),
			Box::new(Reassignment),
			Box::new(DirectSwap),
		];

		let timer = Instant::now();
		log_header(options.verbose);

		// Start solution
		let (start_schedule, start_makespan) = greedy::build(problem);
		let start_evaluation = problem.evaluate(&start_schedule);
		let start = Entry { schedule: start_schedule, evaluation: start_evaluation };

		log_start(&start.evaluation, timer.elapsed().as_secs_f64(), options.verbose);

		// Local optimum of the start solution
		let mut incumbent = if randomized_vnd {
			local_search::rvnd(problem, &start, &neighborhoods, &mut rng)
		} else {
			local_search::vnd(problem, &start, &neighborhoods)
		};

		log_iteration(
			0, &start.evaluation, &start.evaluation, &incumbent.evaluation,
			timer.elapsed().as_secs_f64(), options.verbose
		);

		let mut iteration = 0;
		let mut perturbation_passes = 1;
		let mut iteration_last_improvement = 0;

		while iteration < options.iterations_limit
			&& timer.elapsed().as_secs_f64() < options.time_limit
			&& perturbation_passes <= options.perturbation_passes_limit {

			iteration += 1;

			// Perturbation phase
			let mut perturbed = perturb(problem, &incumbent, &mut rng);
			for _pass in 1 .. perturbation_passes {
				perturbed = perturb(problem, &perturbed, &mut rng);
			}

			// Local search; --search-from-start restores the historical
			// behavior of restarting from the greedy solution instead
			let search_entry = if options.search_from_start { &start } else { &perturbed };
			let trial = if randomized_vnd {
				local_search::rvnd(problem, search_entry, &neighborhoods, &mut rng)
			} else {
				local_search::vnd(problem, search_entry, &neighborhoods)
			};

			log_iteration(
				iteration, &incumbent.evaluation, &perturbed.evaluation,
				&trial.evaluation, timer.elapsed().as_secs_f64(), options.verbose
			);

			if compare::less_evaluation(&trial.evaluation, &incumbent.evaluation) {
				incumbent = trial;
				iteration_last_improvement = iteration;
				perturbation_passes = 1;
			} else {
				perturbation_passes += 1;
			}
		}

		log_footer(options.verbose);

		report.add("Iterations", iteration);
		report.add("Runtime (s)", format!("{:.4}", timer.elapsed().as_secs_f64()));
		report.add("Start solution", start_makespan);
		report.add("Iteration of last improvement", iteration_last_improvement);

		let makespan = incumbent.evaluation.makespan;
		Ok((incumbent.schedule, makespan))
	}
}

/// Perturbs a schedule with an ejection chain over the maintenance teams:
/// the teams are visited in a random cyclic order, and one randomly chosen
/// operation of each team is reassigned to the next team of the chain, at
/// the first randomly tried position that keeps the schedule feasible. An
/// operation with no feasible target position returns to where it was.
fn perturb(problem: &Problem, entry: &Entry, rng: &mut StdRng) -> Entry {
	let mut perturbed = entry.clone();

	let mut chain: Vec<usize> = (1 ..= problem.m).collect();
	chain.shuffle(rng);

	let mut indexes = Vec::new();

	for idx in 0 .. chain.len() {
		let l_origin = chain[idx];
		let l_target = chain[(idx + 1) % chain.len()];

		if perturbed.schedule.lanes[l_origin].is_empty() {
			continue;
		}

		let idx_origin = rng.random_range(0 .. perturbed.schedule.lanes[l_origin].len());
		let operation = perturbed.schedule.lanes[l_origin].remove(idx_origin);

		indexes.clear();
		indexes.extend(0 ..= perturbed.schedule.lanes[l_target].len());
		indexes.shuffle(rng);

		let mut success = false;
		for &idx_target in &indexes {
			perturbed.schedule.lanes[l_target].insert(idx_target, operation);

			let evaluation = problem.evaluate(&perturbed.schedule);
			if evaluation.is_finite() {
				perturbed.evaluation = evaluation;
				success = true;
				break;
			}

			perturbed.schedule.lanes[l_target].remove(idx_target);
		}

		if !success {
			perturbed.schedule.lanes[l_origin].insert(idx_origin, operation);
		}
	}

	perturbed
}

fn log_header(verbose: bool) {
	if verbose {
		println!("---------------------------------------------------------------------");
		println!("| Iter. |   Before LS  |   After LS   |   Incumbent  |   Time (s)   |");
		println!("---------------------------------------------------------------------");
	}
}

fn log_start(start: &Evaluation, time: f64, verbose: bool) {
	if verbose {
		println!("| Start | {:>12} | {:>12} | {:12.3} | {:12.3} |", "---", "---", start.makespan, time);
	}
}

fn log_iteration(
	iteration: i64, incumbent: &Evaluation, before_ls: &Evaluation,
	after_ls: &Evaluation, time: f64, verbose: bool
) {
	if verbose {
		let better_makespan = compare::less(after_ls.makespan, incumbent.makespan);
		let better_sum_completions =
			compare::less(after_ls.sum_completions, incumbent.sum_completions);
		let status = if better_makespan { "*" } else if better_sum_completions { "+" } else { " " };
		println!(
			"| {}{:4} | {:12.3} | {:12.3} | {:12.3} | {:12.3} |",
			status, iteration, before_ls.makespan, after_ls.makespan,
			if better_makespan { after_ls.makespan } else { incumbent.makespan },
			time
		);
	}
}

fn log_footer(verbose: bool) {
	if verbose {
		println!("---------------------------------------------------------------------");
	}
}
