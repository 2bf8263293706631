// ============================================================================
// Digit Groups
// Base-1000 decomposition of an amount's magnitude
// ============================================================================

use arrayvec::ArrayVec;

/// Number of base-1000 groups needed for any u64 (u64::MAX has 20 digits).
pub const MAX_GROUPS: usize = 7;

/// Groups of one magnitude, least significant (rank 0) first.
pub type Groups = ArrayVec<Group, MAX_GROUPS>;

/// A three-digit segment of a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Group {
    /// Segment value, 0..=999
    pub value: u16,
    /// 0 = units, 1 = nghìn, 2 = triệu, 3 = tỷ, ...
    pub rank: u8,
    /// True only for the most significant group
    pub is_leading: bool,
}

impl Group {
    #[inline]
    pub const fn hundred(self) -> u16 {
        self.value / 100
    }

    #[inline]
    pub const fn ten(self) -> u16 {
        (self.value % 100) / 10
    }

    #[inline]
    pub const fn unit(self) -> u16 {
        self.value % 10
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }
}

/// Split a magnitude into base-1000 groups.
///
/// The last element is the leading group and is never zero; inner groups may
/// be. Zero yields no groups at all.
pub fn decompose(magnitude: u64) -> Groups {
    let mut groups = Groups::new();
    let mut rest = magnitude;
    let mut rank = 0u8;

    while rest > 0 {
        groups.push(Group {
            value: (rest % 1000) as u16,
            rank,
            is_leading: false,
        });
        rest /= 1000;
        rank += 1;
    }

    if let Some(leading) = groups.last_mut() {
        leading.is_leading = true;
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(groups: &Groups) -> Vec<u16> {
        groups.iter().map(|g| g.value).collect()
    }

    #[test]
    fn test_decompose_zero() {
        assert!(decompose(0).is_empty());
    }

    #[test]
    fn test_decompose_single_group() {
        let groups = decompose(105);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].rank, 0);
        assert!(groups[0].is_leading);
        assert_eq!(
            (groups[0].hundred(), groups[0].ten(), groups[0].unit()),
            (1, 0, 5)
        );
    }

    #[test]
    fn test_decompose_worked_example() {
        let groups = decompose(1_234_567);
        assert_eq!(values(&groups), vec![567, 234, 1]);
        assert_eq!(
            groups.iter().map(|g| g.rank).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(
            groups.iter().map(|g| g.is_leading).collect::<Vec<_>>(),
            vec![false, false, true]
        );
    }

    #[test]
    fn test_decompose_inner_zero_groups() {
        let groups = decompose(1_000_005);
        assert_eq!(values(&groups), vec![5, 0, 1]);
        assert!(groups[1].is_zero());
        assert!(!groups[1].is_leading);
        assert!(groups[2].is_leading);
    }

    #[test]
    fn test_decompose_full_width() {
        let groups = decompose(u64::MAX);
        assert_eq!(groups.len(), MAX_GROUPS);
        assert_eq!(values(&groups), vec![615, 551, 709, 73, 744, 446, 18]);

        let groups = decompose(i64::MIN.unsigned_abs());
        assert_eq!(values(&groups), vec![808, 775, 854, 36, 372, 223, 9]);
        assert_eq!(groups.last().map(|g| g.rank), Some(6));
    }
}
