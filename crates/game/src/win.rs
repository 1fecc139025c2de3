//! Win detection over a roll history.
//!
//! ## Algorithm
//! Scan the rolls left to right keeping a count per face. The first face
//! whose count reaches 2 wins, which is the earliest repeat, not the most
//! frequent face.

use crate::dice::DIE_FACES;

/// Return the first die value to appear twice, or `None` if no value repeats
///
/// Values outside `1..=6` are ignored.
pub fn check_for_win(rolls: &[u8]) -> Option<u8> {
    // Index 0 unused so faces index directly
    let mut counts = [0u8; DIE_FACES as usize + 1];

    for &roll in rolls {
        if !(1..=DIE_FACES).contains(&roll) {
            continue;
        }
        let count = &mut counts[roll as usize];
        *count += 1;
        if *count >= 2 {
            return Some(roll);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_after_gap() {
        assert_eq!(check_for_win(&[3, 5, 3]), Some(3));
    }

    #[test]
    fn test_all_distinct_has_no_winner() {
        assert_eq!(check_for_win(&[1, 2, 3, 4, 5, 6]), None);
    }

    #[test]
    fn test_immediate_double() {
        assert_eq!(check_for_win(&[2, 2]), Some(2));
    }

    #[test]
    fn test_first_repeat_wins_not_lowest_value() {
        // 5 repeats at index 2, 1 only at index 3
        assert_eq!(check_for_win(&[5, 1, 5, 1]), Some(5));
        // 6 repeats before 2 does
        assert_eq!(check_for_win(&[2, 6, 6, 2]), Some(6));
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(check_for_win(&[]), None);
        assert_eq!(check_for_win(&[4]), None);
    }

    #[test]
    fn test_out_of_range_values_ignored() {
        assert_eq!(check_for_win(&[0, 0, 7, 7]), None);
        assert_eq!(check_for_win(&[0, 4, 9, 4]), Some(4));
    }
}
