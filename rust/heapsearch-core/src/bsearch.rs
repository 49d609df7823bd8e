use std::cmp::Ordering;

use crate::errors::SearchError;

/// Outcome of [`binary_search_by`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// An element matched at this index.
    Found(usize),
    /// No match; the sought value belongs at this index.
    Insert(usize),
}

impl Probe {
    pub fn index(self) -> usize {
        match self {
            Probe::Found(i) | Probe::Insert(i) => i,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Probe::Found(_))
    }
}

/// Binary search over `len` indexed, sorted elements.
///
/// `compare` reports how the element at an index relates to the sought
/// value: `Less` if the element sorts before it, `Greater` if after. Works
/// on anything addressable by index, not only slices.
pub fn binary_search_by<T, G, F>(len: usize, get: G, mut compare: F) -> Result<Probe, SearchError>
where
    G: Fn(usize) -> T,
    F: FnMut(&T) -> Ordering,
{
    if len == 0 {
        return Err(SearchError::InvalidArgument("binary search needs at least one element".into()));
    }
    let mut low = 0usize;
    let mut high = len;
    while low < high {
        let median = low + (high - low) / 2;
        match compare(&get(median)) {
            Ordering::Equal => return Ok(Probe::Found(median)),
            Ordering::Less => low = median + 1,
            Ordering::Greater => high = median,
        }
    }
    Ok(Probe::Insert(low))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_present_values() {
        let sorted = [1, 3, 5, 7, 9];
        for (i, v) in sorted.iter().enumerate() {
            let probe = binary_search_by(sorted.len(), |k| sorted[k], |e| e.cmp(v)).unwrap();
            assert_eq!(probe, Probe::Found(i));
        }
    }

    #[test]
    fn reports_insertion_point_for_missing_values() {
        let sorted = [10, 20, 30];
        let at = |target: i32| binary_search_by(sorted.len(), |k| sorted[k], |e| e.cmp(&target)).unwrap();
        assert_eq!(at(5), Probe::Insert(0));
        assert_eq!(at(25), Probe::Insert(2));
        assert_eq!(at(35), Probe::Insert(3));
        assert!(!at(25).is_found());
        assert_eq!(at(25).index(), 2);
    }

    #[test]
    fn empty_input_is_rejected() {
        let res = binary_search_by(0, |_| 0, |e: &i32| e.cmp(&1));
        assert!(matches!(res, Err(SearchError::InvalidArgument(_))));
    }
}
