//! `splicegen` binary.
//!
//! ## Usage
//!
//! ```bash
//! splicegen --model view.json --run View --folder android/src/main/java/com/example
//! ```

use clap::Parser;
use splicegen::cli::{self, Args, Outcome};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so --dry-run output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match cli::run(&args) {
        Ok(Outcome::Edited(report)) => println!("Edited {}", report.path.display()),
        Ok(Outcome::Preview(content)) => print!("{content}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
