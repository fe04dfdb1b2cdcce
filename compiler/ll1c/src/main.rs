//! `ll1c` command-line entry point.

use ll1c::commands::{parse_args, run, EXIT_USAGE, USAGE};
use std::io::Write;

fn main() {
    ll1c::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(EXIT_USAGE);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = match run(&command, &mut out).and_then(|code| out.flush().map(|()| code)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: failed to write output: {e}");
            1
        }
    };
    std::process::exit(code);
}
