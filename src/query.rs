//! Collection Queries
//!
//! Filter, sort and paginate an in-memory collection in one pass.

use std::cmp::Ordering;

/// One page of a filtered, sorted collection
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// 1-based page actually returned (requested page clamped into range)
    pub page: usize,
    /// Never less than 1, even for an empty result
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Keep items matching `predicate`, order them with `comparator` (stable),
/// and cut out page `page` (1-based) of `page_size` items.
pub fn paginate<T, P, C>(
    items: &[T],
    predicate: P,
    mut comparator: C,
    page: usize,
    page_size: usize,
) -> PageSlice<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
    C: FnMut(&T, &T) -> Ordering,
{
    let page_size = page_size.max(1);
    let mut matched: Vec<&T> = items.iter().filter(|item| predicate(item)).collect();
    matched.sort_by(|a, b| comparator(a, b));

    let total_matches = matched.len();
    let total_pages = total_matches.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;

    PageSlice {
        items: matched
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect(),
        page,
        total_pages,
        total_matches,
    }
}

/// Case-insensitive substring match against any of `haystacks`.
/// A blank needle matches everything.
pub fn matches_text<'a>(haystacks: impl IntoIterator<Item = &'a str>, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .into_iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}
