//! Domain-specific assertion macros for ontoview harnesses.
//!
//! These wrap `pretty_assertions` and say which tree invariant was violated.

/// Assert the flattened visible rows of a session, by name, in order.
///
/// ```rust
/// assert_rows!(session, ["A", "C", "D"]);
/// ```
#[macro_export]
macro_rules! assert_rows {
    ($session:expr, [$($name:expr),* $(,)?]) => {{
        let tree = $session.visible_tree();
        let actual: Vec<&str> = ontoview_core::render::flatten(&tree)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "visible rows differ");
    }};
}

/// Assert the exact contents of an expansion store.
///
/// ```rust
/// assert_expanded!(session.expansion(), ["A", "C"]);
/// ```
#[macro_export]
macro_rules! assert_expanded {
    ($store:expr, [$($name:expr),* $(,)?]) => {{
        let store: &ontoview_core::ExpansionStore = $store;
        let mut actual: Vec<&str> = store.iter().collect();
        actual.sort_unstable();
        let mut expected: Vec<&str> = vec![$($name),*];
        expected.sort_unstable();
        pretty_assertions::assert_eq!(actual, expected, "expansion store differs");
    }};
}
