//! spamsift CLI binary.

use clap::Parser;
use spamsift::cli::{args::*, commands::*};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = SpamsiftArgs::parse();

    // Map verbosity onto the logger before it initializes
    if args.verbosity() >= 3 {
        unsafe {
            std::env::set_var("RUST_LOG", "debug");
        }
    } else if args.verbosity() >= 2 {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    } else if args.verbosity() == 0 {
        unsafe {
            std::env::set_var("RUST_LOG", "error");
        }
    }
    env_logger::init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
