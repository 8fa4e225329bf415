use clap::Parser;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(author = AUTHOR)]
#[command(about = "Maneuver scheduling in the restoration of electric power distribution networks", long_about = None)]
pub struct Args {
	/// Path to the instance file with the data of the problem to be solved
	#[arg(short, long, value_name = "FILE")]
	pub file: String,

	/// Algorithm used to solve the problem (values: "greedy", "neh", "ils",
	/// "mip-precedence", "mip-linear-ordering", "mip-arc-time-indexed")
	#[arg(short, long, value_name = "VALUE")]
	pub algorithm: String,

	/// Enable algorithm output
	#[arg(short, long)]
	pub verbose: bool,

	/// Level of details to show at the end of the optimization process:
	/// (0) show nothing; (1) show the status of the optimization process and
	/// the value of the objective function, if any; (2) additionally show the
	/// runtime in seconds, the number of iterations, the value of the linear
	/// relaxation and the MIP optimality gap, all separated by a single blank
	/// space, with a question mark in place of unavailable values; (3) show a
	/// detailed multi-line report
	#[arg(short, long, value_name = "VALUE", num_args = 0..=1, default_missing_value = "1")]
	pub details: Option<u8>,

	/// Display the best solution found
	#[arg(short, long)]
	pub solution: bool,

	/// Limit the total time expended (in seconds)
	#[arg(long, value_name = "VALUE", default_value_t = 1e100)]
	pub time_limit: f64,

	/// Limit the total number of iterations expended
	#[arg(long, value_name = "VALUE", default_value_t = i64::MAX)]
	pub iterations_limit: i64,

	/// Seed used to initialize the random number generator
	#[arg(long, value_name = "VALUE", default_value_t = 0)]
	pub seed: u64,

	/// Number of threads to be used, if the algorithm is able to use
	/// multithreading; 0 uses all threads available
	#[arg(long, value_name = "VALUE", default_value_t = 1)]
	pub threads: u32,

	/// Use the solution found by the greedy heuristic as the starting
	/// solution of the MIP back-ends
	#[arg(long)]
	pub warm_start: bool,

	/// Method used to perform local search ("vnd" or "rvnd")
	#[arg(long, value_name = "VALUE", default_value = "vnd")]
	pub local_search_method: String,

	/// Highest value of the perturbation strength; the ILS stops when no
	/// improvement is found after a perturbation with this strength
	#[arg(long, value_name = "VALUE", default_value_t = 5)]
	pub perturbation_passes_limit: i64,

	/// Apply local search to the initial greedy solution instead of the
	/// perturbed schedule at each ILS iteration (reproduces the results of
	/// earlier releases)
	#[arg(long)]
	pub search_from_start: bool,
}
