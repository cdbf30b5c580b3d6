//! Line parser constructing a [`Festival`] from delimited text.
//!
//! One line describes one festival, with colon-separated fields:
//!
//! ```text
//! name : venue : dd-mm-yyyy : duration : style [: style ...]
//! ```
//!
//! All trimming and case-folding of input text happens here, not in
//! [`Festival`] itself: every field is trimmed, style tags are matched
//! case-insensitively, and empty trailing style segments are skipped.
//! The duration must be a positive integer.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;

use crate::error::{Error, Result};
use crate::model::Festival;
use crate::taxonomy::Style;

const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses one festival line.
pub fn parse_line(line: &str) -> Result<Festival> {
    let fields: Vec<&str> = line.split(':').collect();
    if fields.len() < 5 {
        return Err(Error::MalformedLine(format!(
            "expected at least 5 fields, got {}",
            fields.len()
        )));
    }

    let name = fields[0].trim();
    let venue = fields[1].trim();
    if name.is_empty() {
        return Err(Error::MalformedLine("empty festival name".to_string()));
    }

    let start_date = NaiveDate::parse_from_str(fields[2].trim(), DATE_FORMAT)?;

    let duration_days: u32 = fields[3]
        .trim()
        .parse()
        .map_err(|_| Error::Duration(fields[3].trim().to_string()))?;
    if duration_days == 0 {
        return Err(Error::Duration("duration must be at least 1".to_string()));
    }

    let mut styles = HashSet::new();
    for field in &fields[4..] {
        let tag = field.trim();
        if tag.is_empty() {
            continue;
        }
        styles.insert(tag.parse::<Style>()?);
    }
    if styles.is_empty() {
        return Err(Error::MalformedLine(
            "at least one style tag is required".to_string(),
        ));
    }

    debug!("parsed festival '{name}' at {venue}, starting {start_date}");

    Ok(Festival::new(name, venue, start_date, duration_days, styles))
}

impl FromStr for Festival {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_line(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let f = parse_line("Gazpatxo Rock : valencia: 28-02-2022  :1  :rock:punk : hiphop ")
            .unwrap();
        assert_eq!(f.name(), "Gazpatxo Rock");
        assert_eq!(f.venue(), "valencia");
        assert_eq!(
            f.start_date(),
            NaiveDate::from_ymd_opt(2022, 2, 28).unwrap()
        );
        assert_eq!(f.duration_days(), 1);
        assert_eq!(
            *f.styles(),
            HashSet::from([Style::Rock, Style::Punk, Style::HipHop])
        );
    }

    #[test]
    fn test_parse_line_via_from_str() {
        let f: Festival = "black sound fest:badajoz:05-02-2022:  21:rock:  blues"
            .parse()
            .unwrap();
        assert_eq!(f.name(), "black sound fest");
        assert_eq!(f.duration_days(), 21);
        assert_eq!(*f.styles(), HashSet::from([Style::Rock, Style::Blues]));
    }

    #[test]
    fn test_parse_line_too_few_fields() {
        let err = parse_line("solo nombre:lugar:28-02-2022:1").unwrap_err();
        assert!(matches!(err, Error::MalformedLine(_)));
    }

    #[test]
    fn test_parse_line_bad_date() {
        let err = parse_line("fest:lugar:31-13-2022:1:rock").unwrap_err();
        assert!(matches!(err, Error::Date(_)));
    }

    #[test]
    fn test_parse_line_bad_duration() {
        let err = parse_line("fest:lugar:28-02-2022:cero:rock").unwrap_err();
        assert!(matches!(err, Error::Duration(_)));

        let err = parse_line("fest:lugar:28-02-2022:0:rock").unwrap_err();
        assert!(matches!(err, Error::Duration(_)));
    }

    #[test]
    fn test_parse_line_unknown_style() {
        let err = parse_line("fest:lugar:28-02-2022:1:polka").unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(tag) if tag == "polka"));
    }

    #[test]
    fn test_parse_line_skips_empty_trailing_segments() {
        let f = parse_line("fest:lugar:28-02-2022:1:rock: ").unwrap();
        assert_eq!(f.styles().len(), 1);
    }
}
