// src/core/grade.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// A letter grade as assigned by the scanner.
///
/// Grades are compared through their position in [`GRADES`], never through the
/// symbol text, so `D-` < `D` < `D+` holds even though that is not the
/// alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Grade {
    #[strum(serialize = "F")]
    F,
    #[strum(serialize = "D-")]
    DMinus,
    #[strum(serialize = "D")]
    D,
    #[strum(serialize = "D+")]
    DPlus,
    #[strum(serialize = "C-")]
    CMinus,
    #[strum(serialize = "C")]
    C,
    #[strum(serialize = "C+")]
    CPlus,
    #[strum(serialize = "B-")]
    BMinus,
    #[strum(serialize = "B")]
    B,
    #[strum(serialize = "B+")]
    BPlus,
    #[strum(serialize = "A-")]
    AMinus,
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "A+")]
    APlus,
}

/// The grading scale, weakest first.
pub const GRADES: [Grade; 13] = [
    Grade::F,
    Grade::DMinus,
    Grade::D,
    Grade::DPlus,
    Grade::CMinus,
    Grade::C,
    Grade::CPlus,
    Grade::BMinus,
    Grade::B,
    Grade::BPlus,
    Grade::AMinus,
    Grade::A,
    Grade::APlus,
];

impl Grade {
    /// Position of the grade in [`GRADES`]; higher is stronger.
    pub fn rank(self) -> usize {
        GRADES
            .iter()
            .position(|g| *g == self)
            .unwrap_or_default()
    }

    /// Returns `true` when `self` is at least as strong as `minimum`.
    pub fn meets(self, minimum: Grade) -> bool {
        self.rank() >= minimum.rank()
    }

    /// All grade symbols in scale order, for help and error messages.
    pub fn symbols() -> Vec<String> {
        GRADES.iter().map(ToString::to_string).collect()
    }
}

/// Parses a grade symbol for clap, listing the accepted values on failure.
pub fn parse_grade(raw: &str) -> Result<Grade, String> {
    Grade::from_str(raw)
        .map_err(|_| format!("expected one of: {}", Grade::symbols().join(", ")))
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Grade::from_str(&raw)
            .map_err(|_| serde::de::Error::custom(format!("unknown grade '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_scale_matches_declaration_order() {
        let declared: Vec<Grade> = Grade::iter().collect();
        assert_eq!(declared, GRADES.to_vec());
        assert_eq!(Grade::symbols().join(" "), "F D- D D+ C- C C+ B- B B+ A- A A+");
    }

    #[test]
    fn test_meets_follows_scale_index_for_every_pair() {
        for (i, g1) in GRADES.iter().enumerate() {
            for (j, g2) in GRADES.iter().enumerate() {
                assert_eq!(g1.meets(*g2), i >= j, "{g1} vs {g2}");
            }
        }
    }

    #[test]
    fn test_minus_plus_ordering_is_not_alphabetical() {
        assert!(Grade::DMinus.rank() < Grade::D.rank());
        assert!(Grade::D.rank() < Grade::DPlus.rank());
        assert!(Grade::A.meets(Grade::B));
        assert!(!Grade::AMinus.meets(Grade::A));
    }

    #[test]
    fn test_parse_grade_round_trips_symbols() {
        assert_eq!(parse_grade("A+"), Ok(Grade::APlus));
        assert_eq!(parse_grade("C-"), Ok(Grade::CMinus));
        assert!(parse_grade("E").unwrap_err().contains("A+"));
        assert!(parse_grade("a").is_err());
    }

    #[test]
    fn test_serde_uses_symbols() {
        assert_eq!(serde_json::to_string(&Grade::BPlus).unwrap(), "\"B+\"");
        let g: Grade = serde_json::from_str("\"D-\"").unwrap();
        assert_eq!(g, Grade::DMinus);
        assert!(serde_json::from_str::<Grade>("\"Z\"").is_err());
    }
}
