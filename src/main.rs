//! pixinv CLI entrypoint.
//!
//! Parses args, dispatches to single-file or batch inversion, and exits with
//! the appropriate status. For programmatic use, prefer the library API
//! (`pixinv::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
