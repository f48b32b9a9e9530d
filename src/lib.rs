//! # qsforge
//!
//! URL query-string deduplication and value injection for web fuzzing.
//!
//! ## Features
//!
//! - **Shape deduplication**: one URL per unique host + path + parameter-name
//!   combination (path optionally ignored)
//! - **Value injection**: query values replaced, or appended to, from a
//!   wordlist or a single payload
//! - **Parameter allow-list**: restrict substitution to named parameters,
//!   passing the rest through untouched
//! - **Streaming**: stdin to stdout, one URL per line, constant work per line
//!
//! ## Usage
//!
//! ```bash
//! # Replace every query value with a single payload
//! cat urls.txt | qsforge "'"
//!
//! # One output URL per wordlist entry, appended to the original value
//! cat urls.txt | qsforge -a -w payloads.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use qsforge::processor::{Processor, ProcessorConfig};
//! use std::collections::HashSet;
//! use std::io::Cursor;
//!
//! let config = ProcessorConfig {
//!     wordlist: vec!["'".to_string()],
//!     only_params: HashSet::new(),
//!     append: false,
//!     ignore_path: false,
//! };
//!
//! let mut processor = Processor::new(config);
//! let mut output = Vec::new();
//! processor
//!     .process(Cursor::new("http://example.com/p?id=1\n"), &mut output)
//!     .unwrap();
//! assert_eq!(output, b"http://example.com/p?id=%27\n");
//! ```

pub mod cli;
pub mod dedup;
pub mod processor;
pub mod rewrite;
pub mod wordlist;

pub use cli::Args;
pub use processor::{Processor, ProcessorConfig};
