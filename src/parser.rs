use std::fs::read_to_string;

use thiserror::Error;

use crate::problem::{Problem, Technology};

/// Errors raised while reading an instance file.
#[derive(Debug, Error)]
pub enum ParseError {
	#[error("File \"{0}\" cannot be opened.")]
	UnreadableFile(String),

	#[error("Unexpected end of file (expected {0}).")]
	MissingToken(&'static str),

	#[error("Couldn't parse {expected} from \"{token}\".")]
	InvalidToken { expected: &'static str, token: String },
}

fn next_token<'a>(
	tokens: &mut impl Iterator<Item = &'a str>, expected: &'static str
) -> Result<&'a str, ParseError> {
	tokens.next().ok_or(ParseError::MissingToken(expected))
}

fn next_usize<'a>(
	tokens: &mut impl Iterator<Item = &'a str>, expected: &'static str
) -> Result<usize, ParseError> {
	let token = next_token(tokens, expected)?;
	token.parse().map_err(|_| ParseError::InvalidToken { expected, token: token.to_string() })
}

fn next_f64<'a>(
	tokens: &mut impl Iterator<Item = &'a str>, expected: &'static str
) -> Result<f64, ParseError> {
	let token = next_token(tokens, expected)?;
	token.parse().map_err(|_| ParseError::InvalidToken { expected, token: token.to_string() })
}

/// Reads a problem instance from a whitespace-separated token file: a header
/// with the number of switches, the number of teams and the density of the
/// precedence graph (ignored), followed by the switch records, the
/// precedence records, and the travel time matrix of each team.
pub fn parse_problem(file_path: &str) -> Result<Problem, ParseError> {
	let raw_text = read_to_string(file_path)
		.map_err(|_| ParseError::UnreadableFile(file_path.to_string()))?;
	let mut tokens = raw_text.split_whitespace();

	let n = next_usize(&mut tokens, "the number of switch operations")?;
	let m = next_usize(&mut tokens, "the number of teams")?;
	next_token(&mut tokens, "the density of the precedence graph")?;

	let mut technology = vec![Technology::Unknown; n + 1];
	let mut p = vec![0.0; n + 1];

	// Switch records: ID (positional, ignored), technology, maneuver time
	for i in 1 ..= n {
		next_token(&mut tokens, "a switch ID")?;
		technology[i] = match next_token(&mut tokens, "a technology")? {
			"R" => Technology::Remote,
			"M" => Technology::Manual,
			_ => Technology::Unknown,
		};
		p[i] = next_f64(&mut tokens, "a maneuver time")?;
	}

	// Precedence records: ID (ignored), count, then that many predecessors
	let mut predecessors = vec![Vec::new(); n + 1];
	for j in 1 ..= n {
		next_token(&mut tokens, "a switch ID")?;
		let nprec = next_usize(&mut tokens, "a number of predecessors")?;
		for _ in 0 .. nprec {
			let i = next_usize(&mut tokens, "a predecessor ID")?;
			predecessors[j].push(i);
		}
	}

	// Travel times of each team, one (n+1) x (n+1) matrix per team
	let mut s = vec![vec![vec![0.0; m + 1]; n + 1]; n + 1];
	for l in 1 ..= m {
		for i in 0 ..= n {
			for j in 0 ..= n {
				s[i][j][l] = next_f64(&mut tokens, "a travel time")?;
			}
		}
	}

	Ok(Problem::new(n, m, technology, p, s, predecessors))
}
