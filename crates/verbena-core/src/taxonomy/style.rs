use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A musical style tag attached to a festival.
///
/// Styles are a closed vocabulary. Equality and hashing are by tag
/// identity, so a festival's style set never holds duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Rock,
    Punk,
    HipHop,
    Indie,
    Pop,
    Fusion,
    Blues,
}

impl Style {
    /// The canonical lowercase tag name.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Punk => "punk",
            Self::HipHop => "hiphop",
            Self::Indie => "indie",
            Self::Pop => "pop",
            Self::Fusion => "fusion",
            Self::Blues => "blues",
        }
    }

    /// All known styles, in declaration order.
    #[must_use]
    pub fn all() -> &'static [Style] {
        &[
            Self::Rock,
            Self::Punk,
            Self::HipHop,
            Self::Indie,
            Self::Pop,
            Self::Fusion,
            Self::Blues,
        ]
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Style {
    type Err = Error;

    /// Matches the tag name case-insensitively, ignoring surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        for &style in Self::all() {
            if tag.eq_ignore_ascii_case(style.tag()) {
                return Ok(style);
            }
        }
        Err(Error::UnknownStyle(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_str() {
        assert_eq!("rock".parse::<Style>().unwrap(), Style::Rock);
        assert_eq!("  HIPHOP ".parse::<Style>().unwrap(), Style::HipHop);
    }

    #[test]
    fn test_style_from_str_unknown() {
        let err = "polka".parse::<Style>().unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(tag) if tag == "polka"));
    }

    #[test]
    fn test_style_display() {
        assert_eq!(Style::Blues.to_string(), "blues");
        assert_eq!(Style::HipHop.to_string(), "hiphop");
    }
}
