use std::io;

use monkey::repl::repl::{start, ReplConfig};

fn main() {
    println!("Type a line to see its tokens, Ctrl-D to exit.");

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(error) = start(stdin.lock(), stdout.lock(), &ReplConfig::tokens()) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
