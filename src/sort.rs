//! Sorting helpers used when building a tree from unsorted input.

/// Sorts `values` with a top-down merge sort.
///
/// The input is split at `len / 2` and each half sorted recursively. When merging, ties are taken
/// from the left half first so equal values keep their relative order. Empty and single element
/// inputs come back unchanged.
///
/// # Examples
///
/// ```
/// use balanced_bst::sort::merge_sort;
///
/// assert_eq!(merge_sort(vec![5, 3, 8, 1, 4]), vec![1, 3, 4, 5, 8]);
/// assert!(merge_sort(Vec::<i32>::new()).is_empty());
/// ```
pub fn merge_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }

    let right = values.split_off(values.len() / 2);
    merge(merge_sort(values), merge_sort(right))
}

/// Merges two ascending runs into one, preferring `left` on ties.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged
}

/// Collapses each run of equal adjacent values down to its first occurrence. Given ascending
/// input this yields a strictly ascending sequence.
///
/// # Examples
///
/// ```
/// use balanced_bst::sort::remove_duplicates;
///
/// assert_eq!(remove_duplicates(vec![1, 1, 3, 4, 4, 4, 8]), vec![1, 3, 4, 8]);
/// ```
pub fn remove_duplicates<T: PartialEq>(mut sorted: Vec<T>) -> Vec<T> {
    sorted.dedup();
    sorted
}
