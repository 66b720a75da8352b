use crate::core::filters::serves_only_children;
use crate::models::MinistryRecord;

/// Recommendations split by audience
#[derive(Debug, Clone, Default)]
pub struct Partitioned {
    pub adults: Vec<MinistryRecord>,
    pub children: Vec<MinistryRecord>,
}

impl Partitioned {
    pub fn len(&self) -> usize {
        self.adults.len() + self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adults.is_empty() && self.children.is_empty()
    }
}

/// Split a recommendation list into adult-facing and children-facing halves
///
/// A ministry is children-facing when it serves child age groups
/// exclusively; everything else, including the synthetic guidance entries,
/// is adult-facing. Relative order is preserved on both sides. Whether to
/// show the split at all is the caller's call; for a visitor who is
/// themself in a child age group the two halves are rendered as one list.
pub fn partition(recommendations: Vec<MinistryRecord>) -> Partitioned {
    let mut split = Partitioned::default();
    for ministry in recommendations {
        if serves_only_children(&ministry) {
            split.children.push(ministry);
        } else {
            split.adults.push(ministry);
        }
    }
    split
}
