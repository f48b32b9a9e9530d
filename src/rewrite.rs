//! Query-string rewriting
//!
//! Expands one URL's query parameters into one rewritten query string per
//! wordlist entry. Pure function of its inputs: no state, no failure modes.

use crate::dedup::ParamMap;
use std::collections::{BTreeMap, HashSet};
use url::form_urlencoded;

/// Produce one percent-encoded query string per wordlist entry
///
/// For each entry, parameters outside a non-empty allow-list pass through
/// with all of their original values; every other parameter gets the entry
/// as its value (replace mode) or appended to its first original value
/// (append mode, later repeats dropped). When an allow-list is configured,
/// entries that substitute nothing are dropped rather than emitted
/// unchanged. Output parameters are encoded in name order.
pub fn rewrite_queries(
    params: &ParamMap,
    wordlist: &[String],
    only_params: &HashSet<String>,
    append: bool,
) -> Vec<String> {
    let mut results = Vec::with_capacity(wordlist.len());

    for word in wordlist {
        // Sorted so the encoded output is deterministic
        let mut rewritten: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        let mut replaced = only_params.is_empty();

        for (name, values) in params {
            if !only_params.is_empty() && !only_params.contains(name) {
                rewritten.insert(name.as_str(), values.clone());
                continue;
            }

            let value = if append {
                let first = values.first().map(String::as_str).unwrap_or("");
                format!("{}{}", first, word)
            } else {
                word.clone()
            };
            rewritten.insert(name.as_str(), vec![value]);
            replaced = true;
        }

        if replaced {
            results.push(encode(&rewritten));
        }
    }

    results
}

fn encode(params: &BTreeMap<&str, Vec<String>>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, values) in params {
        for value in values {
            serializer.append_pair(name, value);
        }
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::collect_params;
    use url::Url;

    fn params_of(url: &str) -> ParamMap {
        collect_params(&Url::parse(url).unwrap())
    }

    fn words(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    fn allow(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replace_mode() {
        let params = params_of("http://h/p?id=5");
        let out = rewrite_queries(&params, &words(&["'"]), &HashSet::new(), false);
        assert_eq!(out, vec!["id=%27"]);
    }

    #[test]
    fn test_append_mode() {
        let params = params_of("http://h/p?id=5");
        let out = rewrite_queries(&params, &words(&["'"]), &HashSet::new(), true);
        assert_eq!(out, vec!["id=5%27"]);
    }

    #[test]
    fn test_append_uses_only_first_repeat() {
        let params = params_of("http://h/p?id=1&id=2");
        let out = rewrite_queries(&params, &words(&["x"]), &HashSet::new(), true);
        assert_eq!(out, vec!["id=1x"]);
    }

    #[test]
    fn test_wordlist_fan_out_in_order() {
        let params = params_of("http://h/p?q=a");
        let out = rewrite_queries(&params, &words(&["1", "2", "3"]), &HashSet::new(), false);
        assert_eq!(out, vec!["q=1", "q=2", "q=3"]);
    }

    #[test]
    fn test_allow_list_passes_others_through() {
        let params = params_of("http://h/p?id=1&name=bob");
        let out = rewrite_queries(&params, &words(&["9"]), &allow(&["id"]), false);
        assert_eq!(out, vec!["id=9&name=bob"]);
    }

    #[test]
    fn test_allow_list_without_overlap_drops_entry() {
        let params = params_of("http://h/p?id=1&name=bob");
        let out = rewrite_queries(&params, &words(&["9"]), &allow(&["other"]), false);
        assert!(out.is_empty());
    }

    #[test]
    fn test_allow_list_preserves_repeated_passthrough_values() {
        let params = params_of("http://h/p?id=1&tag=a&tag=b");
        let out = rewrite_queries(&params, &words(&["x"]), &allow(&["id"]), false);
        assert_eq!(out, vec!["id=x&tag=a&tag=b"]);
    }

    #[test]
    fn test_no_params_still_fans_out_without_allow_list() {
        let params = ParamMap::default();
        let out = rewrite_queries(&params, &words(&["a", "b"]), &HashSet::new(), false);
        assert_eq!(out, vec!["", ""]);
    }

    #[test]
    fn test_no_params_with_allow_list_emits_nothing() {
        let params = ParamMap::default();
        let out = rewrite_queries(&params, &words(&["a"]), &allow(&["id"]), false);
        assert!(out.is_empty());
    }

    #[test]
    fn test_output_sorted_by_name() {
        let params = params_of("http://h/p?zz=1&aa=2&mm=3");
        let out = rewrite_queries(&params, &words(&["v"]), &HashSet::new(), false);
        assert_eq!(out, vec!["aa=v&mm=v&zz=v"]);
    }

    #[test]
    fn test_values_are_query_encoded() {
        let params = params_of("http://h/p?q=1");
        let out = rewrite_queries(&params, &words(&["a b&c=d"]), &HashSet::new(), false);
        assert_eq!(out, vec!["q=a+b%26c%3Dd"]);
    }

    #[test]
    fn test_empty_word_replaces_with_empty() {
        let params = params_of("http://h/p?q=1");
        let out = rewrite_queries(&params, &words(&[""]), &HashSet::new(), false);
        assert_eq!(out, vec!["q="]);
    }
}
