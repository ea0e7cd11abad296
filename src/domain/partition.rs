// ============================================================
// Layer 3 - Partition
// ============================================================
// The three disjoint, order-preserving slices of the merged
// record sequence and the file each one is written to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Train,
    Valid,
    Test,
}

impl Partition {
    /// All partitions in the order they are cut and written
    pub const ALL: [Partition; 3] = [Partition::Train, Partition::Valid, Partition::Test];

    pub fn name(self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Valid => "valid",
            Partition::Test  => "test",
        }
    }

    /// Output file name, relative to the export directory
    pub fn file_name(self) -> &'static str {
        match self {
            Partition::Train => "train.csv",
            Partition::Valid => "valid.csv",
            Partition::Test  => "test.csv",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let names: Vec<&str> = Partition::ALL.iter().map(|p| p.file_name()).collect();
        assert_eq!(names, vec!["train.csv", "valid.csv", "test.csv"]);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Partition::Valid.to_string(), "valid");
    }
}
