//! Id lookup over tables that are usually, but not reliably, sorted.
//!
//! Catalog tables arrive in whatever order the publisher emits them. They are
//! sorted most of the time, so a binary search normally succeeds, but a
//! misplaced entry can send the search down the wrong half. The search is
//! capped at `ceil(log2 n) + 2` steps; if that is exhausted or the range
//! empties without a hit, a full linear scan gives the answer.

/// Find the element whose key equals `key`.
pub fn bounded_search<T>(items: &[T], key: u32, key_of: impl Fn(&T) -> u32) -> Option<&T> {
    if items.is_empty() {
        return None;
    }

    let mut start = 0usize;
    let mut end = items.len() - 1;
    let mut budget = step_limit(items.len());

    while start <= end && budget > 0 {
        budget -= 1;
        let mid = start + (end - start) / 2;
        let mid_key = key_of(&items[mid]);
        if mid_key < key {
            start = mid + 1;
        } else if mid_key > key {
            if mid == 0 {
                break;
            }
            end = mid - 1;
        } else {
            return Some(&items[mid]);
        }
    }

    items.iter().find(|item| key_of(item) == key)
}

/// `ceil(log2 n) + 2`.
fn step_limit(len: usize) -> u32 {
    let ceil_log2 = if len <= 1 {
        0
    } else {
        usize::BITS - (len - 1).leading_zeros()
    };
    ceil_log2 + 2
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
