//! Pair sum CLI
//!
//! Usage: kata_pair_sum --target <N>
//! Then enter a line of space-separated integers.
//!
//! Example:
//!   kata_pair_sum --target 9
//!   Enter numbers (space-separated, or 'q' to quit): 2 7 11 15
//!
//! Prints the two positions whose values sum to the target, if any exist.

use kata_classics::domain::pair_sum::pair_sum_hash;
use std::env;
use std::io::{self, Write};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut target: Option<i64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--target" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("--target requires a value");
                    std::process::exit(1);
                }
                target = match args[i].parse() {
                    Ok(v) => Some(v),
                    Err(_) => {
                        eprintln!("Error: Invalid target value '{}'", args[i]);
                        std::process::exit(1);
                    }
                };
            }
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let target = match target {
        Some(v) => v,
        None => {
            eprintln!("Usage: {} --target <N>", args[0]);
            std::process::exit(1);
        }
    };

    println!("Searching for pairs summing to {}.", target);

    loop {
        print!("\nEnter numbers (space-separated, or 'q' to quit): ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            eprintln!("Error reading input.");
            continue;
        }

        let input = input.trim();

        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        let mut values: Vec<i64> = Vec::new();
        let mut valid = true;
        for (position, token) in input.split_whitespace().enumerate() {
            match token.parse() {
                Ok(v) => values.push(v),
                Err(_) => {
                    eprintln!(
                        "Error: Token at position {} is '{}' (must be an integer).",
                        position + 1,
                        token
                    );
                    valid = false;
                }
            }
        }

        if !valid {
            continue;
        }

        match pair_sum_hash(&values, target) {
            Some(m) => {
                println!(
                    "Found pair: positions {} and {} ({} + {} = {})",
                    m.first, m.second, values[m.first], values[m.second], target
                );
            }
            None => {
                println!("No pair sums to {}.", target);
            }
        }
    }
}
