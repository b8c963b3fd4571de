//! Score-to-grade derivation.

use serde::{Deserialize, Serialize};

/// Letter grade derived from a score via a fixed inclusive-bucket table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Bucket table: [80,100]→A, [70,79]→B, [60,69]→C, [50,59]→D, else→F.
    ///
    /// Out-of-range scores (negative, above 100) fall to F without being
    /// flagged invalid; the permissive behavior is kept on purpose.
    pub fn from_score(score: i64) -> Self {
        match score {
            80..=100 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(69), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::D);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
    }

    #[test]
    fn out_of_range_scores_fall_to_f() {
        assert_eq!(Grade::from_score(-5), Grade::F);
        assert_eq!(Grade::from_score(101), Grade::F);
        assert_eq!(Grade::from_score(i64::MIN), Grade::F);
        assert_eq!(Grade::from_score(i64::MAX), Grade::F);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every score in a named bucket derives that bucket's
            /// grade, and the buckets cover all of i64.
            #[test]
            fn buckets_are_inclusive_and_total(score in any::<i64>()) {
                let grade = Grade::from_score(score);
                let expected = if (80..=100).contains(&score) {
                    Grade::A
                } else if (70..=79).contains(&score) {
                    Grade::B
                } else if (60..=69).contains(&score) {
                    Grade::C
                } else if (50..=59).contains(&score) {
                    Grade::D
                } else {
                    Grade::F
                };
                prop_assert_eq!(grade, expected);
            }
        }
    }
}
