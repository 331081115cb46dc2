use std::cmp::Ordering;

/// Left-to-right extremum scan with a first-occurrence tie-break.
///
/// `prefer` is the ordering a candidate's key must have against the
/// current best to replace it, so records tying the extreme value keep
/// the earliest position. Returns `None` instead of scanning an empty
/// slice.
pub(crate) fn scan_extremum<T, K, F>(records: &[T], key: F, prefer: Ordering) -> Option<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let (first, rest) = records.split_first()?;
    let mut best = first;
    let mut best_key = key(first);
    for record in rest {
        let candidate = key(record);
        if candidate.cmp(&best_key) == prefer {
            best = record;
            best_key = candidate;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn empty_slice_yields_none() {
        let values: Vec<f64> = Vec::new();
        assert!(scan_extremum(&values, |v| OrderedFloat(*v), Ordering::Greater).is_none());
    }

    #[test]
    fn first_occurrence_wins_ties() {
        let values = [3.0, 7.0, 7.0, 1.0];
        let max = scan_extremum(&values, |v| OrderedFloat(*v), Ordering::Greater).unwrap();
        assert!(std::ptr::eq(max, &values[1]));
    }

    #[test]
    fn finds_minimum_with_less_preference() {
        let values = [3.0, -2.0, 5.0, -2.0];
        let min = scan_extremum(&values, |v| OrderedFloat(*v), Ordering::Less).unwrap();
        assert!(std::ptr::eq(min, &values[1]));
    }
}
