//! Digit chain addition CLI
//!
//! Usage: kata_digit_add <a> <b>
//! Example: kata_digit_add 342 465
//!
//! Encodes both numbers as digit chains (least-significant digit first),
//! adds them, and prints the sum chain and its decimal value.

use kata_classics::DigitChain;
use kata_classics::domain::digit_chain::add_digit_chains;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <a> <b>", args[0]);
        std::process::exit(1);
    }

    let a: u64 = match args[1].parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Error: Invalid number '{}'", args[1]);
            std::process::exit(1);
        }
    };

    let b: u64 = match args[2].parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Error: Invalid number '{}'", args[2]);
            std::process::exit(1);
        }
    };

    let chain_a = DigitChain::from_value(a);
    let chain_b = DigitChain::from_value(b);
    let sum = add_digit_chains(&chain_a, &chain_b);

    println!("{:?} (= {})", chain_a, a);
    println!("{:?} (= {})", chain_b, b);
    println!("---");
    println!("{:?} (= {})", sum, sum.value().unwrap());
    println!("(digits are least-significant first)");
}
