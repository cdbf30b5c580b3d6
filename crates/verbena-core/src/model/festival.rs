use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::taxonomy::{Month, Style};

/// A music festival: a named event held at a venue, starting on a given
/// date, running for a number of days, and tagged with a set of styles.
///
/// The scalar fields are fixed at construction; only the style set can
/// change afterwards, additively, through [`Festival::add_style`].
///
/// Queries that depend on the current date come in two forms: a pure
/// `*_on(today)` form taking the reference date explicitly, and a
/// wall-clock wrapper evaluating against the local date. Tests and any
/// caller needing determinism should use the `*_on` forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Festival {
    name: String,
    venue: String,
    start_date: NaiveDate,
    duration_days: u32,
    styles: HashSet<Style>,
}

impl Festival {
    /// Creates a festival from already-validated parts.
    ///
    /// `duration_days` must be at least 1; this is a precondition, not
    /// checked here. The line parser in [`crate::parse`] enforces it for
    /// text input.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        venue: impl Into<String>,
        start_date: NaiveDate,
        duration_days: u32,
        styles: HashSet<Style>,
    ) -> Self {
        Self {
            name: name.into(),
            venue: venue.into(),
            start_date,
            duration_days,
            styles,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    #[must_use]
    pub fn styles(&self) -> &HashSet<Style> {
        &self.styles
    }

    /// Adds a style tag to the festival. Idempotent: adding a tag the
    /// festival already carries changes nothing.
    pub fn add_style(&mut self, style: Style) {
        self.styles.insert(style);
    }

    /// The first day after the festival: `start_date + duration_days`.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Days::new(u64::from(self.duration_days))
    }

    /// The calendar month the festival starts in.
    #[must_use]
    pub fn month_of_year(&self) -> Month {
        // NaiveDate keeps month() in 1..=12, so the fallback is unreachable.
        Month::from_number(self.start_date.month()).unwrap_or(Month::January)
    }

    /// True iff this festival starts strictly earlier than `other`.
    /// Festivals sharing a start date are neither before nor after each
    /// other.
    #[must_use]
    pub fn starts_before(&self, other: &Festival) -> bool {
        self.start_date < other.start_date
    }

    /// True iff this festival starts strictly later than `other`.
    #[must_use]
    pub fn starts_after(&self, other: &Festival) -> bool {
        self.start_date > other.start_date
    }

    /// True iff the festival's end date lies strictly before `today`.
    /// A festival ending exactly today has not concluded.
    #[must_use]
    pub fn has_concluded_on(&self, today: NaiveDate) -> bool {
        self.end_date() < today
    }

    /// [`Festival::has_concluded_on`] evaluated against the local date.
    #[must_use]
    pub fn has_concluded(&self) -> bool {
        self.has_concluded_on(Local::now().date_naive())
    }

    /// Renders the festival's state relative to `today`, in precedence
    /// order: concluded, then upcoming with a whole-day countdown, then
    /// ongoing. A festival starting today is ongoing.
    #[must_use]
    pub fn status_label_on(&self, today: NaiveDate) -> String {
        if self.has_concluded_on(today) {
            "(concluded)".to_string()
        } else if self.start_date > today {
            let days = self.start_date.signed_duration_since(today).num_days();
            format!("({days} days left)")
        } else {
            "(ongoing)".to_string()
        }
    }

    /// [`Festival::status_label_on`] evaluated against the local date.
    #[must_use]
    pub fn status_label(&self) -> String {
        self.status_label_on(Local::now().date_naive())
    }

    /// Renders the date span starting at `date`.
    ///
    /// One-day festivals render the date alone (`28 Feb 2022`); longer
    /// ones render start and end (`05 Feb -26 Feb 2022`), where the end
    /// is `date + duration_days`.
    #[must_use]
    pub fn formatted_date_range(&self, date: NaiveDate) -> String {
        if self.duration_days == 1 {
            date.format("%d %b %Y").to_string()
        } else {
            let end = date + Days::new(u64::from(self.duration_days));
            format!("{} -{}", date.format("%d %b"), end.format("%d %b %Y"))
        }
    }

    /// The style tags concatenated without separators, in the set's
    /// iteration order, enclosed in square brackets: `[rockpunk]`.
    #[must_use]
    pub fn style_list_text(&self) -> String {
        let mut out = String::from("[");
        for style in &self.styles {
            out.push_str(style.tag());
        }
        out.push(']');
        out
    }

    /// The full four-line textual form, relative to `today`: name and
    /// style set (each left-justified to width 30), venue, date range
    /// with status label, and a separator rule.
    #[must_use]
    pub fn render_on(&self, today: NaiveDate) -> String {
        format!(
            "{:<30} {:<30}\n{}\n{} {}\n{}",
            self.name,
            format!("{:?}", self.styles),
            self.venue,
            self.formatted_date_range(self.start_date),
            self.status_label_on(today),
            "-".repeat(35),
        )
    }
}

impl fmt::Display for Festival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_on(Local::now().date_naive()))
    }
}
