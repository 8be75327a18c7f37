//! Medir CLI - micro-benchmark harness for reference kernels
//!
//! # Commands
//!
//! - `run` - run one benchmark (or all of them) and print mean trial times
//! - `list` - show the benchmark registry

use clap::Parser;

use medir::cli::{entrypoint, Cli};

fn main() {
    if let Err(e) = entrypoint(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
