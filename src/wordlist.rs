//! Wordlist loading
//!
//! Turns a file path into the ordered sequence of replacement values that the
//! rewriter injects into query strings. Order is preserved, blank lines are
//! kept, and only the line terminator is stripped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Errors raised while loading a wordlist file
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    /// The file could not be opened at all
    #[error("failed to open wordlist file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but a read failed partway through
    #[error("failed to read wordlist file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load replacement values from a wordlist file
///
/// Returns one entry per line with the terminator stripped. Blank lines are
/// preserved as empty entries so that line numbers in the file line up with
/// output groups. `None` yields an empty sequence, signaling that no wordlist
/// was provided. The file handle is released when this returns, success or not.
pub fn load_wordlist(path: Option<&Path>) -> Result<Vec<String>, WordlistError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let file = File::open(path).map_err(|source| WordlistError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut wordlist = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| WordlistError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        wordlist.push(line);
    }

    Ok(wordlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_path_yields_empty() {
        assert!(load_wordlist(None).unwrap().is_empty());
    }

    #[test]
    fn test_order_and_blank_lines_preserved() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first\n\nthird\n").unwrap();

        let words = load_wordlist(Some(file.path())).unwrap();
        assert_eq!(words, vec!["first", "", "third"]);
    }

    #[test]
    fn test_no_trailing_newline() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "a\nb").unwrap();

        let words = load_wordlist(Some(file.path())).unwrap();
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn test_whitespace_not_trimmed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  padded  \n").unwrap();

        let words = load_wordlist(Some(file.path())).unwrap();
        assert_eq!(words, vec!["  padded  "]);
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = load_wordlist(Some(Path::new("/nonexistent/words.txt"))).unwrap_err();
        assert!(matches!(err, WordlistError::Open { .. }));
    }
}
