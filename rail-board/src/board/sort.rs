//! Record ordering.

use crate::realtime::TrainDetail;

/// Sort `items` by the key `key` extracts, keeping the original order of
/// items with equal keys.
///
/// # Examples
///
/// ```
/// use rail_board::board::sorted_by_key;
///
/// let words = sorted_by_key(vec!["ccc", "a", "bb", "d"], |w| w.len());
/// assert_eq!(words, vec!["a", "d", "bb", "ccc"]);
/// ```
pub fn sorted_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut items: Vec<T> = items.into_iter().collect();
    items.sort_by_key(key);
    items
}

/// How records are ordered within each direction on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BoardOrder {
    /// As the service sent them.
    #[default]
    Feed,
    /// Soonest first.
    Due,
}

impl BoardOrder {
    /// Reorder `details` for display.
    pub fn apply(self, details: Vec<TrainDetail>) -> Vec<TrainDetail> {
        match self {
            BoardOrder::Feed => details,
            BoardOrder::Due => sorted_by_key(details, |d| d.due_in_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(code: &str, due: i32) -> TrainDetail {
        TrainDetail {
            train_code: code.to_string(),
            due_in_minutes: due,
            ..Default::default()
        }
    }

    fn codes(details: &[TrainDetail]) -> Vec<&str> {
        details.iter().map(|d| d.train_code.as_str()).collect()
    }

    #[test]
    fn sorted_by_key_is_stable() {
        let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted = sorted_by_key(pairs, |p| p.0);
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn sorted_by_key_on_strings() {
        let names = ["Howth", "Bray", "Greystones"];
        let sorted = sorted_by_key(names.iter().map(|s| s.to_string()), |s| s.clone());
        assert_eq!(sorted, vec!["Bray", "Greystones", "Howth"]);
    }

    #[test]
    fn sorted_by_key_empty() {
        let sorted: Vec<i32> = sorted_by_key(Vec::new(), |x: &i32| *x);
        assert!(sorted.is_empty());
    }

    #[test]
    fn feed_order_unchanged() {
        let details = vec![detail("A", 9), detail("B", 1), detail("C", 5)];
        let ordered = BoardOrder::Feed.apply(details);
        assert_eq!(codes(&ordered), vec!["A", "B", "C"]);
    }

    #[test]
    fn due_order_soonest_first() {
        let details = vec![detail("A", 9), detail("B", -1), detail("C", 5), detail("D", 5)];
        let ordered = BoardOrder::Due.apply(details);
        assert_eq!(codes(&ordered), vec!["B", "C", "D", "A"]);
    }
}
