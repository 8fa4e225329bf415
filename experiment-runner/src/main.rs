use std::env;
use std::process::Command;

fn main() {
	let instance_directory = env::args().nth(1)
		.expect("Pass the directory containing the instance files");
	let algorithm = env::args().nth(2).unwrap_or_else(|| String::from("ils"));

	let directory = std::fs::read_dir(&instance_directory).unwrap();

	let mut solved = 0;
	let mut total = 0;
	for raw_entry in directory {
		let entry = raw_entry.unwrap();
		let raw_file_name = entry.file_name();
		let file_name = raw_file_name.to_str().unwrap();
		if !file_name.ends_with(".txt") {
			continue;
		}

		println!("Instance is {}", file_name);
		let output = Command::new("../target/release/maneuver-scheduling")
			.arg("--file").arg(entry.path())
			.arg("--algorithm").arg(&algorithm)
			.arg("--details").arg("1")
			.output().unwrap();
		if !output.status.success() {
			panic!("Failed to run maneuver-scheduling {}", String::from_utf8(output.stderr).unwrap());
		}

		let stdout = String::from_utf8(output.stdout).unwrap();
		if stdout.starts_with("SUBOPTIMAL") || stdout.starts_with("OPTIMAL") {
			solved += 1;
		}
		total += 1;
	}

	println!("Solved {}/{} instances", solved, total);
}
