mod algorithm;
mod cli;
mod compare;
mod local_search;
mod neighborhood;
mod parser;
mod problem;
mod schedule;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use crate::algorithm::{
	Algorithm, Greedy, Ils, MipArcTimeIndexed, MipLinearOrdering, MipPrecedence, Neh,
	Report, SolverOptions,
};
use crate::cli::Args;
use crate::parser::parse_problem;
use crate::problem::Infeasibility;
use crate::schedule::Schedule;

fn main() -> ExitCode {
	let args = Args::parse();

	match run(&args) {
		Ok(exit_code) => exit_code,
		Err(message) => {
			eprintln!("{}", message);
			eprintln!("Type the following command for a correct usage.");
			eprintln!("{} --help", env!("CARGO_PKG_NAME"));
			eprintln!();
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> Result<ExitCode, String> {
	let problem = parse_problem(&args.file).map_err(|error| error.to_string())?;

	let solver: Box<dyn Algorithm> = match args.algorithm.as_str() {
		"greedy" => Box::new(Greedy),
		"neh" => Box::new(Neh),
		"ils" => Box::new(Ils),
		"mip-precedence" => Box::new(MipPrecedence),
		"mip-linear-ordering" => Box::new(MipLinearOrdering),
		"mip-arc-time-indexed" => Box::new(MipArcTimeIndexed),
		_ => return Err(String::from("Invalid algorithm.")),
	};

	let options = SolverOptions {
		verbose: args.verbose,
		seed: args.seed,
		threads: args.threads,
		time_limit: args.time_limit,
		iterations_limit: args.iterations_limit,
		perturbation_passes_limit: args.perturbation_passes_limit,
		local_search_method: args.local_search_method.clone(),
		search_from_start: args.search_from_start,
		warm_start: args.warm_start,
	};

	let mut report = Report::new();
	let mut schedule = Schedule::empty(problem.m);
	let mut error_message = None;

	let timer = Instant::now();
	match solver.solve(&problem, &options, &mut report) {
		Ok((solved, _)) => schedule = solved,
		Err(error) => error_message = Some(error.to_string()),
	}
	let elapsed_seconds = timer.elapsed().as_secs_f64();

	let makespan = problem.makespan(&schedule);
	let feasibility = problem.check_feasible(&schedule);

	let status = if error_message.is_some() {
		"ERROR".to_string()
	} else if let Some(solver_status) = report.get("Status") {
		solver_status.to_string()
	} else if feasibility.is_ok() {
		"SUBOPTIMAL".to_string()
	} else {
		"INFEASIBLE".to_string()
	};

	if let Some(level) = args.details {
		print_details(
			level, &status, makespan, &feasibility, elapsed_seconds,
			&report, &error_message
		);
	}

	if args.solution {
		println!();
		println!("======================================================================");
		println!("SOLUTION");
		println!("======================================================================");
		println!("{}", schedule);
		println!();
	}

	// A solver failure is still reported through the status line above, but
	// the process must not exit successfully
	if error_message.is_some() {
		Ok(ExitCode::FAILURE)
	} else {
		Ok(ExitCode::SUCCESS)
	}
}

fn format_objective(makespan: f64, feasible: bool) -> String {
	if feasible {
		format!("{:.6}", makespan)
	} else {
		String::from("?")
	}
}

fn print_details(
	level: u8, status: &str, makespan: f64, feasibility: &Result<(), Infeasibility>,
	elapsed_seconds: f64, report: &Report, error_message: &Option<String>
) {
	let feasible = feasibility.is_ok();

	match level {
		1 => {
			println!("{} {}", status, format_objective(makespan, feasible));
		}

		2 => {
			println!(
				"{} {} {:.4} {} {} {} ",
				status,
				format_objective(makespan, feasible),
				elapsed_seconds,
				report.get("Iterations").unwrap_or("?"),
				report.get("LP objective").unwrap_or("?"),
				report.get("MIP gap").unwrap_or("?"),
			);
		}

		3 => {
			println!();
			println!("======================================================================");
			println!("SUMMARY");
			println!("======================================================================");
			println!("Makespan:         {}", format_objective(makespan, feasible));
			println!("Status:           {}", status);

			if let Err(reason) = feasibility {
				println!("Infeasibility:    {}", reason);
			}

			if let Some(message) = error_message {
				println!("Error details:     - {}", message);
			}

			println!("Elapsed time (s): {:.4}", elapsed_seconds);
			println!();
			println!("Additional Information:");
			if report.is_empty() {
				println!(" * No additional information to show.");
			} else {
				for (key, value) in report.iter() {
					println!(" * {}: {}", key, value);
				}
			}
		}

		_ => {}
	}
}
