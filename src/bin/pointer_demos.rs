use std::io;

use colored::Colorize;
use pointer_demos::{run_all, DemoError};

fn main() -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_all(&mut out) {
        Ok(count) => {
            eprintln!("{}", format!("✓ {} pointer demos completed", count).green());
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            Err(err)
        }
    }
}
