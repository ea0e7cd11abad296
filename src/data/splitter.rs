// ============================================================
// Layer 4 - Train/Valid/Test Splitter
// ============================================================
// Cuts the merged record sequence into three contiguous slices:
//
//   [0, ⌊0.70·N⌋)         → train
//   [⌊0.70·N⌋, ⌊0.85·N⌋)  → valid
//   [⌊0.85·N⌋, N)          → test
//
// No shuffling and no stratification: the partitions follow the
// order rows came out of the store, so reruns give the same files.
//
// Boundaries are computed in integer percent to get an exact
// floor for every N.
//
// Small inputs can leave a partition empty, e.g. N = 1 puts the
// only row in test. That is fine.

use crate::domain::partition::Partition;

/// Percentage of rows that land in train
pub const TRAIN_PERCENT: usize = 70;

/// Cumulative percentage of rows in train + valid
pub const TRAIN_VALID_PERCENT: usize = 85;

/// The two cut points `(train_end, valid_end)` for `total` rows.
pub fn split_boundaries(total: usize) -> (usize, usize) {
    (percent_floor(total, TRAIN_PERCENT), percent_floor(total, TRAIN_VALID_PERCENT))
}

/// ⌊total · percent / 100⌋ without forming `total * percent`
fn percent_floor(total: usize, percent: usize) -> usize {
    total / 100 * percent + total % 100 * percent / 100
}

/// Borrow `items` as the three partitions, in `Partition::ALL` order.
pub fn split_partitions<T>(items: &[T]) -> [(Partition, &[T]); 3] {
    let (train_end, valid_end) = split_boundaries(items.len());

    let train = &items[..train_end];
    let valid = &items[train_end..valid_end];
    let test  = &items[valid_end..];

    tracing::debug!(
        "Dataset split: {} train, {} valid, {} test",
        train.len(),
        valid.len(),
        test.len(),
    );

    [
        (Partition::Train, train),
        (Partition::Valid, valid),
        (Partition::Test,  test),
    ]
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(n: usize) -> (usize, usize, usize) {
        let items: Vec<usize> = (0..n).collect();
        let [(_, train), (_, valid), (_, test)] = split_partitions(&items);
        (train.len(), valid.len(), test.len())
    }

    #[test]
    fn test_ten_rows() {
        assert_eq!(split_boundaries(10), (7, 8));
        assert_eq!(sizes(10), (7, 1, 2));
    }

    #[test]
    fn test_hundred_rows() {
        assert_eq!(sizes(100), (70, 15, 15));
    }

    #[test]
    fn test_boundaries_are_floors() {
        // 0.7 * 3 = 2.1, 0.85 * 3 = 2.55
        assert_eq!(split_boundaries(3), (2, 2));
        // 0.7 * 7 = 4.9, 0.85 * 7 = 5.95
        assert_eq!(split_boundaries(7), (4, 5));
    }

    #[test]
    fn test_percent_floor_matches_direct_product() {
        for n in 0..10_000 {
            assert_eq!(split_boundaries(n), (n * 70 / 100, n * 85 / 100));
        }
    }

    #[test]
    fn test_huge_totals_do_not_overflow() {
        let total = usize::MAX;
        let exact = |percent: u128| (total as u128 * percent / 100) as usize;
        assert_eq!(split_boundaries(total), (exact(70), exact(85)));
    }

    #[test]
    fn test_all_items_preserved_in_order() {
        for n in 0..250 {
            let items: Vec<usize> = (0..n).collect();
            let parts = split_partitions(&items);
            let rejoined: Vec<usize> = parts
                .iter()
                .flat_map(|(_, slice)| slice.iter().copied())
                .collect();
            assert_eq!(rejoined, items);
        }
    }

    #[test]
    fn test_partition_labels_in_order() {
        let items = [1, 2, 3];
        let labels: Vec<Partition> = split_partitions(&items).iter().map(|(p, _)| *p).collect();
        assert_eq!(labels, Partition::ALL.to_vec());
    }

    #[test]
    fn test_tiny_datasets_leave_empty_partitions() {
        assert_eq!(sizes(0), (0, 0, 0));
        assert_eq!(sizes(1), (0, 0, 1));
        assert_eq!(sizes(2), (1, 0, 1));
    }
}
