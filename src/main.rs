//! qsforge - URL query-string deduplication and value injection
//!
//! Main entry point for the command-line application.

use clap::Parser;
use colored::*;
use std::io::{self, BufWriter};
use std::process;

use qsforge::cli::Args;
use qsforge::processor::{Processor, ProcessorConfig};
use qsforge::wordlist::load_wordlist;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if args.quiet {
        std::env::set_var("RUST_LOG", "warn");
    } else {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Wordlist failures are fatal; per-line URL failures are not
    let wordlist = load_wordlist(args.wordlist.as_deref())?;

    let config = ProcessorConfig::from_args(&args, wordlist);
    log::debug!("using {} replacement values", config.wordlist.len());
    let quiet = args.quiet;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut processor = Processor::new(config);
    processor.process(stdin.lock(), BufWriter::new(stdout.lock()))?;

    if !quiet {
        processor.stats().log_summary();
    }

    Ok(())
}

fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg.red());
}
