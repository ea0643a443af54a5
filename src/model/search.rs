//! Artist search state with stale-response suppression.

use super::types::Artist;

/// State for the debounced artist search. Every issued lookup is tagged with
/// the sequence number current at issue time; a response whose tag no longer
/// matches is stale and must be dropped, never displayed. The transport is
/// opaque, so ordering is enforced by tag comparison rather than request
/// cancellation.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    query: String,
    is_fetching: bool,
    results: Option<Vec<Artist>>,
    failed: bool,
    seq: u64,
}

impl SearchState {
    /// The current debounced query (possibly empty).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a search is active, i.e. the debounced query is non-empty.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// `None` means no lookup has resolved yet; `Some(&[])` means resolved
    /// with zero matches.
    pub fn results(&self) -> Option<&[Artist]> {
        self.results.as_deref()
    }

    /// Whether the most recent lookup failed (kept distinct from "resolved,
    /// no matches" so the view can say so).
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Registers a new debounced query and returns the tag its response must
    /// carry to be applied. Any in-flight response for an earlier tag is
    /// implicitly invalidated.
    pub fn begin(&mut self, query: String) -> u64 {
        self.seq += 1;
        self.query = query;
        self.is_fetching = true;
        self.results = None;
        self.failed = false;
        self.seq
    }

    /// Applies results for the given tag. Returns false (and changes nothing)
    /// when the tag is stale.
    pub fn apply(&mut self, tag: u64, artists: Vec<Artist>) -> bool {
        if tag != self.seq {
            return false;
        }
        self.results = Some(artists);
        self.is_fetching = false;
        true
    }

    /// Records a failed lookup for the given tag. Stale failures are dropped
    /// like stale successes.
    pub fn fail(&mut self, tag: u64) -> bool {
        if tag != self.seq {
            return false;
        }
        self.results = Some(Vec::new());
        self.failed = true;
        self.is_fetching = false;
        true
    }

    /// Resets to the inactive state. Bumps the sequence so any in-flight
    /// response is dropped on arrival.
    pub fn clear(&mut self) {
        self.seq += 1;
        self.query.clear();
        self.is_fetching = false;
        self.results = None;
        self.failed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: &str, name: &str) -> Artist {
        Artist {
            id: id.to_string(),
            name: name.to_string(),
            username: name.to_lowercase(),
            image_url: None,
        }
    }

    #[test]
    fn fresh_response_is_applied() {
        let mut search = SearchState::default();
        let tag = search.begin("jo".to_string());
        assert!(search.is_fetching());

        assert!(search.apply(tag, vec![artist("1", "Jo"), artist("2", "Joan")]));
        assert!(!search.is_fetching());
        assert_eq!(search.results().unwrap().len(), 2);
        assert_eq!(search.results().unwrap()[0].name, "Jo");
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut search = SearchState::default();
        let abc = search.begin("abc".to_string());
        let abcd = search.begin("abcd".to_string());

        // "abc" resolves after the query advanced to "abcd".
        assert!(!search.apply(abc, vec![artist("1", "Abc")]));
        assert!(search.results().is_none());
        assert!(search.is_fetching());

        assert!(search.apply(abcd, vec![artist("2", "Abcd")]));
        assert_eq!(search.results().unwrap()[0].name, "Abcd");
    }

    #[test]
    fn clear_invalidates_in_flight_response() {
        let mut search = SearchState::default();
        let tag = search.begin("jazz".to_string());
        search.clear();

        assert!(!search.apply(tag, vec![artist("1", "Jazz")]));
        assert!(!search.is_active());
        assert!(search.results().is_none());
    }

    #[test]
    fn failure_is_distinct_from_zero_matches() {
        let mut search = SearchState::default();
        let tag = search.begin("zzz".to_string());
        assert!(search.fail(tag));
        assert!(search.failed());
        assert_eq!(search.results(), Some(&[][..]));

        // A new query resets the failure flag.
        search.begin("a".to_string());
        assert!(!search.failed());
    }

    #[test]
    fn stale_failure_is_dropped() {
        let mut search = SearchState::default();
        let old = search.begin("a".to_string());
        let new = search.begin("ab".to_string());

        assert!(!search.fail(old));
        assert!(!search.failed());
        assert!(search.apply(new, Vec::new()));
        assert!(!search.failed());
    }
}
