//! Domain-specific assertion macros for ginmania harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* search invariant was violated.

#![allow(unused_macros, dead_code)]

use ginmania::Gin;

/// Names of `gins`, in order.
pub fn names(gins: &[Gin]) -> Vec<&str> {
    gins.iter().map(|g| g.name.as_str()).collect()
}

/// Assert that a result list holds exactly these names, in this order.
///
/// ```rust
/// assert_names!(results, ["Hendrick's"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let results: &[ginmania::Gin] = &$results;
        let actual: Vec<&str> = results.iter().map(|g| g.name.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "result names differ");
    }};
}

/// Assert that results are in ascending byte order of name.
#[macro_export]
macro_rules! assert_sorted_by_name {
    ($results:expr) => {{
        let results: &[ginmania::Gin] = &$results;
        for pair in results.windows(2) {
            if pair[0].name > pair[1].name {
                panic!(
                    "assert_sorted_by_name! failed: {:?} sorts after {:?}",
                    pair[0].name, pair[1].name
                );
            }
        }
    }};
}
