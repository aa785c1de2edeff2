use std::io;

use monkey::repl::repl::{start, ReplConfig};

fn main() {
    println!("Type an expression or statement per line, Ctrl-D to exit.");

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(error) = start(stdin.lock(), stdout.lock(), &ReplConfig::default()) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
