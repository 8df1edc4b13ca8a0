//! Shared checks reused across the validators.

use super::report::ValidationReport;

/// Every element of `kinds` appears at most once
pub fn validate_distinct<T: Ord>(kinds: &[T], container: &str, element: &str) -> ValidationReport {
    let mut sorted: Vec<&T> = kinds.iter().collect();
    sorted.sort();
    sorted.dedup();
    if sorted.len() == kinds.len() {
        ValidationReport::ok()
    } else {
        ValidationReport::fail(format!(
            "{container} must not contain more than one {element} of each type."
        ))
    }
}

/// `kinds` are strictly ascending
pub fn validate_ascending_order<T: Ord>(
    kinds: &[T],
    container: &str,
    element: &str,
) -> ValidationReport {
    if kinds.windows(2).all(|pair| pair[0] < pair[1]) {
        ValidationReport::ok()
    } else {
        ValidationReport::fail(format!(
            "{container} {element}s must be sorted in ascending order based on their {element} Type."
        ))
    }
}

pub fn validate_count(count: usize, min: usize, max: usize, element: &str) -> ValidationReport {
    if (min..=max).contains(&count) {
        ValidationReport::ok()
    } else if min == max {
        ValidationReport::fail(format!("{element} count must be equal to {max}."))
    } else {
        ValidationReport::fail(format!("{element} count must be between {min} and {max}."))
    }
}
