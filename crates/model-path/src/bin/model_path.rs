//! `model-path` — read or write a nested path in a JSON document.
//!
//! Usage:
//!   model-path [--separator <char>] [--strict] get '<path>'
//!   model-path [--separator <char>] [--strict] set '<path>' '<json-value>'
//!
//! Built with `--features cli`. The document is read from stdin. Write
//! failures are reported on stderr as log events; set `RUST_LOG=debug` to
//! also see created containers.

use model_path::cli::{parse_args, run};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let invocation = match parse_args(std::env::args().skip(1)) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&invocation, buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
