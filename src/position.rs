//! The fixed catalogue of fielding positions.
//!
//! A lineup uses every entry of [`Position::ALL`] exactly once per inning: ten field
//! positions plus the bench. The infield/outfield partition is compiled in and never
//! derived from data.

use std::{fmt, str::FromStr};

use crate::error::LineupError;

/// A fielding position, or the bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    /// Sitting out this inning.
    Bench,
    /// `P`
    Pitcher,
    /// `C`
    Catcher,
    /// `1B`
    FirstBase,
    /// `2B`
    SecondBase,
    /// `3B`
    ThirdBase,
    /// `SS`
    ShortStop,
    /// `LF`
    LeftField,
    /// `LCF`
    LeftCenterField,
    /// `RCF`
    RightCenterField,
    /// `RF`
    RightField,
}

impl Position {
    /// Every position a lineup must fill, in display order.
    pub const ALL: [Position; 11] = [
        Position::Bench,
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::ShortStop,
        Position::LeftField,
        Position::LeftCenterField,
        Position::RightCenterField,
        Position::RightField,
    ];

    /// Positions counted as infield time.
    pub const INFIELD: [Position; 6] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::ShortStop,
    ];

    /// Positions counted as outfield time.
    pub const OUTFIELD: [Position; 4] = [
        Position::LeftField,
        Position::LeftCenterField,
        Position::RightCenterField,
        Position::RightField,
    ];

    /// Number of positions filled each inning.
    pub const COUNT: usize = Position::ALL.len();

    /// True for the six infield positions, catcher and pitcher included.
    pub fn is_infield(&self) -> bool {
        Position::INFIELD.contains(self)
    }

    /// True for the four outfield positions.
    pub fn is_outfield(&self) -> bool {
        Position::OUTFIELD.contains(self)
    }

    /// Short scorecard code, e.g. `"1B"` or `"LCF"`.
    pub fn code(&self) -> &'static str {
        match self {
            Position::Bench => "B",
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::ShortStop => "SS",
            Position::LeftField => "LF",
            Position::LeftCenterField => "LCF",
            Position::RightCenterField => "RCF",
            Position::RightField => "RF",
        }
    }

    /// Index of this position in [`Position::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = LineupError;

    /// Parses a scorecard code, case-insensitive. `"BN"` and `"BE"` are accepted for the bench.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        match code.as_str() {
            "BN" | "BE" => return Ok(Position::Bench),
            _ => {}
        }
        Position::ALL
            .into_iter()
            .find(|position| position.code() == code)
            .ok_or_else(|| LineupError::UnknownPosition(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_covers_field_positions_once() {
        for position in Position::ALL {
            let groups = [
                position == Position::Bench,
                position.is_infield(),
                position.is_outfield(),
            ];
            assert_eq!(groups.iter().filter(|&&g| g).count(), 1, "{position}");
        }
        assert_eq!(Position::COUNT, 11);
    }

    #[test]
    fn index_matches_catalogue_order() {
        for (i, position) in Position::ALL.iter().enumerate() {
            assert_eq!(position.index(), i);
        }
    }

    #[test]
    fn parse_codes() {
        assert_eq!("1b".parse::<Position>().unwrap(), Position::FirstBase);
        assert_eq!(" LCF ".parse::<Position>().unwrap(), Position::LeftCenterField);
        assert_eq!("bn".parse::<Position>().unwrap(), Position::Bench);
        assert!("DH".parse::<Position>().is_err());
        for position in Position::ALL {
            assert_eq!(position.to_string().parse::<Position>().unwrap(), position);
        }
    }
}
