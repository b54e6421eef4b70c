use std::env;

use xtask::tasks::ci::ci;
use xtask::tasks::frontend::frontend;
use xtask::tasks::test::xtest;

fn main() -> Result<(), anyhow::Error> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("ci") => ci(),
        Some("frontend") => frontend(),
        Some("test") => xtest(),
        _ => print_help(),
    }
}

fn print_help() -> Result<(), anyhow::Error> {
    eprintln!(
        r#"
Usage: cargo xtask <task>

Tasks:
  ci              runs all necessary checks to avoid CI errors when git pushed
  frontend        builds the signup widget with trunk
  test            runs the workspace unit tests
"#
    );

    Ok(())
}
