//! Core processing pipeline
//!
//! Streams URLs from a reader through shape deduplication and query
//! rewriting, printing one rewritten URL per wordlist entry to a writer.

use crate::cli::Args;
use crate::dedup::{collect_params, shape_key, SeenSet};
use crate::rewrite::rewrite_queries;

use anyhow::Context;
use std::collections::HashSet;
use std::io::{BufRead, Write};
use url::Url;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Replacement values, in injection order
    pub wordlist: Vec<String>,
    /// Parameter names to substitute; empty means all
    pub only_params: HashSet<String>,
    /// Append to the original value instead of replacing it
    pub append: bool,
    /// Drop the path from the dedup key
    pub ignore_path: bool,
}

impl ProcessorConfig {
    /// Build a configuration from parsed arguments and a loaded wordlist
    ///
    /// An empty wordlist falls back to the positional value, which may
    /// itself be the empty string.
    pub fn from_args(args: &Args, wordlist: Vec<String>) -> Self {
        let wordlist = if wordlist.is_empty() {
            vec![args.value.clone()]
        } else {
            wordlist
        };

        Self {
            wordlist,
            only_params: args.get_only_params(),
            append: args.append,
            ignore_path: args.ignore_path,
        }
    }
}

/// Counters collected over one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Non-empty input lines read
    pub lines: u64,
    /// Blank input lines skipped
    pub blanks: u64,
    /// Lines that failed to parse as URLs
    pub parse_errors: u64,
    /// Distinct URL shapes processed
    pub unique: u64,
    /// Lines skipped as duplicate shapes
    pub duplicates: u64,
    /// Rewritten URLs printed
    pub emitted: u64,
}

impl RunStats {
    /// Log the end-of-run summary
    pub fn log_summary(&self) {
        log::info!(
            "processed {} lines: {} unique shapes, {} duplicates, {} parse errors, {} URLs emitted",
            self.lines,
            self.unique,
            self.duplicates,
            self.parse_errors,
            self.emitted
        );
    }
}

/// Main processor
///
/// Owns the seen-set, which grows for the lifetime of one run.
pub struct Processor {
    config: ProcessorConfig,
    seen: SeenSet,
    stats: RunStats,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            seen: SeenSet::new(),
            stats: RunStats::default(),
        }
    }

    /// Drain the reader, writing rewritten URLs to the writer
    ///
    /// Unparsable lines are logged and skipped; read and write failures are
    /// fatal and abort the run.
    pub fn process<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read input")?;
            if line.is_empty() {
                log::debug!("skipping blank input line");
                self.stats.blanks += 1;
                continue;
            }
            self.stats.lines += 1;

            // The url crate percent-encodes C0 controls where a URL line
            // containing them is malformed input; reject them up front
            if line.bytes().any(|b| b.is_ascii_control()) {
                log::warn!("failed to parse url {} [invalid control character]", line);
                self.stats.parse_errors += 1;
                continue;
            }

            let mut url = match Url::parse(&line) {
                Ok(url) => url,
                Err(e) => {
                    log::warn!("failed to parse url {} [{}]", line, e);
                    self.stats.parse_errors += 1;
                    continue;
                }
            };

            let params = collect_params(&url);
            let key = shape_key(&url, &params, self.config.ignore_path);
            if !self.seen.insert(key) {
                self.stats.duplicates += 1;
                continue;
            }
            self.stats.unique += 1;

            let queries = rewrite_queries(
                &params,
                &self.config.wordlist,
                &self.config.only_params,
                self.config.append,
            );
            for query in &queries {
                if query.is_empty() {
                    url.set_query(None);
                } else {
                    url.set_query(Some(query.as_str()));
                }
                writeln!(output, "{}", url).context("failed to write output")?;
                self.stats.emitted += 1;
            }
        }

        output.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Counters for the run so far
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}
