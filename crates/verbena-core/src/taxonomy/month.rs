use std::fmt;

use serde::{Deserialize, Serialize};

/// A calendar month, derived from a date's numeric month field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Maps a 1-based month number to its variant. Returns `None`
    /// outside 1..=12.
    #[must_use]
    pub fn from_number(n: u32) -> Option<Self> {
        if (1..=12).contains(&n) {
            Some(MONTHS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// The 1-based month number.
    #[must_use]
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// The English month name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_from_number() {
        assert_eq!(Month::from_number(1), Some(Month::January));
        assert_eq!(Month::from_number(12), Some(Month::December));
    }

    #[test]
    fn test_month_from_number_out_of_range() {
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_month_number_round_trip() {
        for n in 1..=12 {
            assert_eq!(Month::from_number(n).unwrap().number(), n);
        }
    }

    #[test]
    fn test_month_display() {
        assert_eq!(Month::February.to_string(), "February");
    }
}
