//! Command-line interface definition for qsforge
//!
//! Provides argument parsing and validation for the URL rewriting tool.

use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;

/// URL query-string deduplicator and value injector for web fuzzing
///
/// Reads URLs on stdin, keeps one representative URL per unique
/// query-parameter shape, and prints a copy of it per replacement value.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "qsforge",
    author = "m0h1nd4",
    version,
    about = "Deduplicate URLs by query-string shape and inject replacement values",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                              QSFORGE v1.0.0                                  ║
║                 Query-String Deduplication & Value Injection                 ║
║                         For Penetration Testing                              ║
╚══════════════════════════════════════════════════════════════════════════════╝

Reads candidate URLs from stdin, emits only the first URL seen for each unique
host + path + parameter-name combination, and rewrites its query-string values
from a wordlist (or a single fallback value). The result is a compact input
corpus for web-parameter fuzzing tools.

EXAMPLES:
    # Replace every query value with a single payload
    cat urls.txt | qsforge "'"

    # Append the payload to the existing value instead of replacing it
    cat urls.txt | qsforge -a "'--"

    # One output URL per wordlist entry
    cat urls.txt | qsforge -w payloads.txt

    # Treat /a?x=1 and /b?x=1 as the same shape
    cat urls.txt | qsforge --ignore-path xss

    # Only touch the id and user parameters, pass the rest through
    cat urls.txt | qsforge --only-params id,user -w payloads.txt
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/qsforge"
)]
pub struct Args {
    /// Fallback replacement value used when no wordlist is given
    #[arg(value_name = "VALUE", default_value = "")]
    pub value: String,

    /// Append the value to the existing one instead of replacing it
    #[arg(short = 'a', long, default_value_t = false)]
    pub append: bool,

    /// Ignore the path when deciding what constitutes a duplicate
    #[arg(long, default_value_t = false)]
    pub ignore_path: bool,

    /// Wordlist file with replacement values, one per line
    #[arg(short = 'w', long, value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// Comma-separated list of parameters to replace (default: all)
    #[arg(long, value_name = "NAMES")]
    pub only_params: Option<String>,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Quiet mode - suppress the end-of-run summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Args {
    /// Parse the allow-list of parameter names
    ///
    /// An absent or empty `--only-params` yields an empty set, meaning
    /// every parameter is substituted.
    pub fn get_only_params(&self) -> HashSet<String> {
        self.only_params
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
