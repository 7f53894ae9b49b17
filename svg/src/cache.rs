//! Memoization of parsed paths.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::parser::{parse_path, parse_path_tolerant, ParseError};
use crate::path::Path;

#[derive(Clone)]
struct CachedPath {
    path: Path,
    error: Option<ParseError>,
}

/// Memoizes parses keyed by the exact input string.
///
/// The cache is an explicit object: callers that want memoization create
/// one and share it, callers that don't simply parse directly.
///
/// Lookups return a clone of the stored path, so a cached value is never
/// mutated through its consumers. The interior mutex is only held while
/// reading or writing the underlying map, never while parsing, which
/// means two threads asking for the same missing key may both parse it;
/// whichever finishes last overwrites the entry (the results are
/// identical for identical input, so either outcome is fine).
///
/// A path parsed tolerantly is stored along with its recorded error, and
/// served as-is to later tolerant calls. A strict call hitting such an
/// entry re-parses from scratch instead of trusting the partial result;
/// strict failures leave the map untouched.
#[derive(Default)]
pub struct ParseCache {
    entries: Mutex<HashMap<String, CachedPath>>,
}

impl ParseCache {
    pub fn new() -> Self {
        ParseCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The memoized equivalent of
    /// [parse_path](parser/fn.parse_path.html).
    pub fn get_or_parse(&self, src: &str) -> Result<Path, ParseError> {
        if let Some(entry) = self.lookup(src) {
            if entry.error.is_none() {
                return Ok(entry.path);
            }
        }

        let path = parse_path(src)?;
        self.insert(
            src,
            CachedPath {
                path: path.clone(),
                error: None,
            },
        );

        Ok(path)
    }

    /// The memoized equivalent of
    /// [parse_path_tolerant](parser/fn.parse_path_tolerant.html).
    pub fn get_or_parse_tolerant(&self, src: &str) -> (Path, Option<ParseError>) {
        if let Some(entry) = self.lookup(src) {
            return (entry.path, entry.error);
        }

        let (path, error) = parse_path_tolerant(src);
        self.insert(
            src,
            CachedPath {
                path: path.clone(),
                error: error.clone(),
            },
        );

        (path, error)
    }

    /// The number of cached inputs.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn lookup(&self, src: &str) -> Option<CachedPath> {
        self.entries.lock().unwrap().get(src).cloned()
    }

    fn insert(&self, src: &str, entry: CachedPath) {
        self.entries.lock().unwrap().insert(src.to_string(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorKind;

    #[test]
    fn hits_match_cold_parses() {
        let cache = ParseCache::new();
        let src = "M 0 0 L 10 0 Q 15 5 10 10 Z";

        let cold = cache.get_or_parse(src).unwrap();
        let hit = cache.get_or_parse(src).unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cold.len(), hit.len());
        assert!(cold.iter().eq(hit.iter()));
        assert!(parse_path(src).unwrap().iter().eq(hit.iter()));
    }

    #[test]
    fn distinct_inputs_get_distinct_entries() {
        let cache = ParseCache::new();
        cache.get_or_parse("M 0 0").unwrap();
        cache.get_or_parse("M 0 0 ").unwrap();
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn tolerant_results_are_cached_with_their_error() {
        let cache = ParseCache::new();

        let (path, err) = cache.get_or_parse_tolerant("M0,0 Q1");
        assert_eq!(path.len(), 1);
        assert_eq!(err.as_ref().unwrap().kind, ErrorKind::ExpectedNumberNotFound);

        let (hit, hit_err) = cache.get_or_parse_tolerant("M0,0 Q1");
        assert_eq!(cache.len(), 1);
        assert!(path.iter().eq(hit.iter()));
        assert_eq!(err, hit_err);
    }

    #[test]
    fn strict_does_not_trust_a_recorded_failure() {
        let cache = ParseCache::new();

        let (_, err) = cache.get_or_parse_tolerant("M0,0 Q1");
        assert!(err.is_some());

        // The entry stays, but a strict caller gets the real verdict.
        assert!(cache.get_or_parse("M0,0 Q1").is_err());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn strict_failures_are_not_cached() {
        let cache = ParseCache::new();
        assert!(cache.get_or_parse("M 0 0 X").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_readers_agree() {
        use std::sync::Arc;

        let cache = Arc::new(ParseCache::new());
        let src = "M 0 0 L 10 0 L 10 10 L 0 10 Z";

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get_or_parse(src).unwrap().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5);
        }
        assert_eq!(cache.len(), 1);
    }
}
