// Prints every combination for each digit string given on the command line.
// Run with: cargo run --bin keypad_dump -- 23 79
use keypad_core::letter_combinations;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: keypad_dump <digits>...");
        return ExitCode::FAILURE;
    }

    let mut status = ExitCode::SUCCESS;
    for digits in &args {
        match letter_combinations(digits) {
            Ok(combinations) => {
                println!("{} => {} combinations", digits, combinations.len());
                for combination in combinations {
                    println!("  {}", combination);
                }
            }
            Err(e) => {
                eprintln!("[ERROR] {}: {}", digits, e);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
