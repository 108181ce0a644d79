//! Publisher to group classification.

use crate::models::Group;
use crate::tables;

/// Group of a canonical publisher name; `None` when unclassified.
pub fn classify(publisher: &str) -> Option<Group> {
    tables::group_for_publisher(publisher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_publishers() {
        assert_eq!(classify("KBS"), Some(Group::A));
        assert_eq!(classify("1코노미뉴스"), Some(Group::B));
        assert_eq!(classify("CEO 스코어데일리"), Some(Group::C));
    }

    #[test]
    fn test_classify_is_exact_match() {
        assert_eq!(classify("kbs"), None);
        assert_eq!(classify(" KBS"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("EXAMPLE-DOMAIN"), None);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for (publisher, _) in tables::PUBLISHER_GROUPS {
            assert_eq!(classify(publisher), classify(publisher));
        }
        assert_eq!(classify("미등록"), classify("미등록"));
    }

    #[test]
    fn test_every_group_is_populated() {
        for group in [Group::A, Group::B, Group::C] {
            assert!(tables::PUBLISHER_GROUPS.iter().any(|(_, g)| *g == group));
        }
    }
}
