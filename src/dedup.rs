//! URL shape deduplication
//!
//! Two URLs share a "shape" when they have the same host, the same path
//! (unless ignore-path mode is on), and the same set of query-parameter
//! names, regardless of parameter order or values. Only the first URL of
//! each shape is worth fuzzing; the rest are suppressed.

use ahash::RandomState;
use hashbrown::{HashMap, HashSet};
use url::Url;

/// Query-parameter multimap: name to ordered values, since a parameter may repeat
pub type ParamMap = HashMap<String, Vec<String>, RandomState>;

/// Collect a URL's query pairs into a parameter multimap
///
/// Repeated parameters keep their values in query-string order.
pub fn collect_params(url: &Url) -> ParamMap {
    let mut params = ParamMap::default();
    for (name, value) in url.query_pairs() {
        params
            .entry(name.into_owned())
            .or_insert_with(Vec::new)
            .push(value.into_owned());
    }
    params
}

/// Build the deduplication key for a URL
///
/// The key is `<host><escaped-path>?<sorted-names-joined-by-&>`, or
/// `<host>?<sorted-names-joined-by-&>` when `ignore_path` is set. Parameter
/// names are sorted so that map iteration order never leaks into the key. A
/// URL without query parameters keys on the bare `host/path?` prefix.
pub fn shape_key(url: &Url, params: &ParamMap, ignore_path: bool) -> String {
    let mut names: Vec<&str> = params.keys().map(String::as_str).collect();
    names.sort_unstable();

    let host = url.host_str().unwrap_or("");
    if ignore_path {
        format!("{}?{}", host, names.join("&"))
    } else {
        format!("{}{}?{}", host, url.path(), names.join("&"))
    }
}

/// Set of URL shapes already emitted during a run
///
/// Grows monotonically; memory is bounded by the number of distinct shapes
/// observed.
#[derive(Debug, Default)]
pub struct SeenSet {
    set: HashSet<String, RandomState>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key, returning true if it was not seen before
    pub fn insert(&mut self, key: String) -> bool {
        self.set.insert(key)
    }

    /// Number of distinct shapes seen so far
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
