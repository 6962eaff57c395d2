//! Cutoff table from Fisher, Kelley and Lomas (2003)
//!
//! Minimum number of intervention points that must fall above both CDC lines
//! for an effect to be declared, indexed by intervention length minus one.

use scd_core::{Error, Result};

/// Shortest intervention phase the table covers
pub const MIN_INTERVENTION_POINTS: usize = 3;

/// Longest intervention phase the table covers
pub const MAX_INTERVENTION_POINTS: usize = FISHER_CUTOFFS.len();

/// Published cutoffs; the first two lengths have no entry
pub const FISHER_CUTOFFS: [Option<usize>; 23] = [
    None,
    None,
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(6),
    Some(7),
    Some(8),
    Some(8),
    Some(9),
    Some(9),
    Some(10),
    Some(11),
    Some(12),
    Some(12),
    Some(12),
    Some(13),
    Some(13),
    Some(13),
    Some(14),
    Some(14),
    Some(15),
];

/// Required count of points above both lines for an intervention phase of
/// `intervention_len` points
pub fn cutoff_for(intervention_len: usize) -> Result<usize> {
    intervention_len
        .checked_sub(1)
        .and_then(|idx| FISHER_CUTOFFS.get(idx).copied().flatten())
        .ok_or(Error::CutoffUnavailable {
            length: intervention_len,
            min: MIN_INTERVENTION_POINTS,
            max: MAX_INTERVENTION_POINTS,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cutoffs() {
        assert_eq!(cutoff_for(3).unwrap(), 3);
        assert_eq!(cutoff_for(5).unwrap(), 5);
        assert_eq!(cutoff_for(10).unwrap(), 8);
        assert_eq!(cutoff_for(23).unwrap(), 15);
    }

    #[test]
    fn test_short_phases_are_domain_errors() {
        for len in 0..MIN_INTERVENTION_POINTS {
            assert!(matches!(
                cutoff_for(len),
                Err(Error::CutoffUnavailable { length, min: 3, max: 23 }) if length == len
            ));
        }
    }

    #[test]
    fn test_long_phases_are_domain_errors() {
        assert!(cutoff_for(24).is_err());
    }

    #[test]
    fn test_table_is_monotone() {
        let defined: Vec<usize> = FISHER_CUTOFFS.iter().flatten().copied().collect();
        assert!(defined.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(defined.len(), MAX_INTERVENTION_POINTS - MIN_INTERVENTION_POINTS + 1);
    }
}
