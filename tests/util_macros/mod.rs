//! Various utility macros

/// Assert that a query against a binding table turns up exactly the listed
/// commands, in any order
#[macro_export]
macro_rules! finds (
    ($index:expr, $query:expr, $mode:expr, []) => {{
        let query = $query;
        let found = $index.find_items(&query, $mode);
        assert!(found.is_empty(), "query {:?} should match nothing, got {:?}", query, found);
    }};
    ($index:expr, $query:expr, $mode:expr, [$($item:expr),+ $(,)?]) => {{
        let query = $query;
        let mut found: Vec<_> = $index.find_items(&query, $mode).into_iter().collect();
        found.sort();
        let mut expected = vec![$($item),+];
        expected.sort();
        assert_eq!(found, expected, "query {:?}", query);
    }};
);
