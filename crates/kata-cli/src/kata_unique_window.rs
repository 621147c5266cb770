//! Longest unique window CLI
//!
//! Usage: kata_unique_window
//! Then enter a line of text.
//!
//! Example:
//!   kata_unique_window
//!   Enter text (or 'q' to quit): abcabcbb
//!   Longest run without repeats: 3 ("abc", bytes 0..3)

use kata_classics::domain::unique_window::longest_unique_span;
use std::io::{self, Write};

fn main() {
    loop {
        print!("\nEnter text (or 'q' to quit): ");
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

        match longest_unique_span(input) {
            Some(span) => {
                println!(
                    "Longest run without repeats: {} ({:?}, bytes {}..{})",
                    span.chars,
                    &input[span.start..span.end],
                    span.start,
                    span.end
                );
            }
            None => {
                println!("Longest run without repeats: 0 (empty input)");
            }
        }
    }
}
