//! Extension and modification-date filtering
//!
//! `Matcher` combines an `ExtensionSet` with a `DateFilter` and decides,
//! one record at a time, whether a file belongs in the results. It never
//! touches the filesystem, so it can be exercised with synthetic records.

use std::collections::HashSet;
use std::fmt;

use chrono::Datelike;

use super::config::SearchConfig;
use super::record::{FileRecord, file_extension};

/// Normalized set of extensions (lowercase, dot-prefixed).
///
/// An empty set matches every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet(HashSet<String>);

impl ExtensionSet {
    /// Parse a comma-separated list such as `"go, .PY,txt"`.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        raw.split(',').collect()
    }

    /// Normalize a single entry: trim, lowercase, and ensure a leading dot.
    pub fn normalize(entry: &str) -> String {
        let ext = entry.trim().to_lowercase();
        if ext.starts_with('.') {
            ext
        } else {
            format!(".{}", ext)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.0.contains(ext)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Check a file name against the set.
    pub fn allows(&self, name: &str) -> bool {
        self.is_empty() || self.0.contains(&file_extension(name))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|s| Self::normalize(s.as_ref()))
                .collect(),
        )
    }
}

/// Modification-date criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// All three fields must match; values outside the calendar never do
    Exact { day: i64, month: i64, year: i64 },
    /// Each present field must match; absent fields are ignored
    Partial {
        day: Option<u32>,
        month: Option<u32>,
        year: Option<i32>,
    },
}

impl Default for DateFilter {
    fn default() -> Self {
        DateFilter::Partial {
            day: None,
            month: None,
            year: None,
        }
    }
}

impl DateFilter {
    /// Resolve the command-line date options.
    ///
    /// A well-formed `exact` string wins; otherwise the independent fields
    /// apply, with zero treated as unset.
    pub fn new(
        exact: Option<&str>,
        day: Option<u32>,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Self {
        if let Some(raw) = exact {
            match Self::parse_exact(raw) {
                Some(filter) => return filter,
                None => tracing::debug!(date = raw, "ignoring malformed exact date"),
            }
        }
        DateFilter::Partial {
            day: day.filter(|&d| d != 0),
            month: month.filter(|&m| m != 0),
            year: year.filter(|&y| y != 0),
        }
    }

    /// Parse `day/month/year`. All three components must be integers.
    pub fn parse_exact(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.split('/').map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return None;
        };
        Some(DateFilter::Exact {
            day: day.parse().ok()?,
            month: month.parse().ok()?,
            year: year.parse().ok()?,
        })
    }

    pub fn matches<D: Datelike>(&self, date: &D) -> bool {
        match *self {
            DateFilter::Exact { day, month, year } => {
                i64::from(date.day()) == day
                    && i64::from(date.month()) == month
                    && i64::from(date.year()) == year
            }
            DateFilter::Partial { day, month, year } => {
                year.is_none_or(|y| y == date.year())
                    && month.is_none_or(|m| m == date.month())
                    && day.is_none_or(|d| d == date.day())
            }
        }
    }

    /// True when no date constraint is applied at all.
    pub fn is_unconstrained(&self) -> bool {
        *self == DateFilter::default()
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DateFilter::Exact { day, month, year } => {
                write!(f, "Exact match for {}/{}/{}", day, month, year)
            }
            DateFilter::Partial { day, month, year } => {
                let mut parts = Vec::new();
                if let Some(d) = day {
                    parts.push(format!("Day={}", d));
                }
                if let Some(m) = month {
                    parts.push(format!("Month={}", m));
                }
                if let Some(y) = year {
                    parts.push(format!("Year={}", y));
                }
                if parts.is_empty() {
                    write!(f, "any date")
                } else {
                    write!(f, "{}", parts.join(", "))
                }
            }
        }
    }
}

/// Inclusion predicate applied to every traversed file.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    extensions: ExtensionSet,
    dates: DateFilter,
}

impl Matcher {
    pub fn new(extensions: ExtensionSet, dates: DateFilter) -> Self {
        Self { extensions, dates }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.extensions.clone(), config.date_filter())
    }

    pub fn matches(&self, record: &FileRecord) -> bool {
        self.extensions.allows(&record.name) && self.dates.matches(&record.modified)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, NaiveDate, TimeZone};

    use super::*;

    fn record(name: &str, y: i32, m: u32, d: u32) -> FileRecord {
        let modified: DateTime<Local> = Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        FileRecord::new(name, 10, modified)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== ExtensionSet ====================

    #[test]
    fn test_extension_set_normalizes_entries() {
        let set = ExtensionSet::parse(" Go,.PY ,txt");
        assert_eq!(set.len(), 3);
        assert!(set.contains(".go"));
        assert!(set.contains(".py"));
        assert!(set.contains(".txt"));
    }

    #[test]
    fn test_extension_set_empty_input() {
        assert!(ExtensionSet::parse("").is_empty());
        assert!(ExtensionSet::parse("   ").is_empty());
        assert!(ExtensionSet::parse("").allows("anything.bin"));
    }

    #[test]
    fn test_extension_set_doubled_comma_is_harmless() {
        let set = ExtensionSet::parse("go,,py");
        assert!(set.contains("."));
        assert!(set.allows("main.go"));
        assert!(!set.allows("Makefile"));
    }

    #[test]
    fn test_extension_set_normalization_is_idempotent() {
        for raw in ["go,py", ".GO, Py", "tar.gz,,md", "  .rs  "] {
            let once = ExtensionSet::parse(raw);
            let twice: ExtensionSet = once.iter().collect();
            assert_eq!(once, twice, "normalizing {:?} twice changed the set", raw);
            assert!(twice.iter().all(|e| e.starts_with('.') && e == e.to_lowercase()));
        }
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        let set = ExtensionSet::parse("jpg");
        assert!(set.allows("IMG_001.JPG"));
        assert!(!set.allows("IMG_001.jpeg"));
    }

    // ==================== DateFilter ====================

    #[test]
    fn test_parse_exact() {
        assert_eq!(
            DateFilter::parse_exact("15/1/2024"),
            Some(DateFilter::Exact {
                day: 15,
                month: 1,
                year: 2024
            })
        );
        assert_eq!(DateFilter::parse_exact("15/01"), None);
        assert_eq!(DateFilter::parse_exact("15/1/2024/1"), None);
        assert_eq!(DateFilter::parse_exact("xx/1/2024"), None);
        assert_eq!(DateFilter::parse_exact(""), None);
    }

    #[test]
    fn test_exact_requires_every_component() {
        let filter = DateFilter::parse_exact("15/1/2024").unwrap();
        assert!(filter.matches(&date(2024, 1, 15)));
        assert!(!filter.matches(&date(2024, 1, 16)));
        assert!(!filter.matches(&date(2024, 2, 15)));
        assert!(!filter.matches(&date(2023, 1, 15)));
    }

    #[test]
    fn test_exact_overrides_partial_fields() {
        let filter = DateFilter::new(Some("15/1/2024"), Some(3), Some(7), Some(1999));
        assert!(filter.matches(&date(2024, 1, 15)));
        assert!(!filter.matches(&date(1999, 7, 3)));
    }

    #[test]
    fn test_malformed_exact_falls_back_to_partial() {
        let filter = DateFilter::new(Some("15-1-2024"), None, None, Some(2023));
        assert_eq!(
            filter,
            DateFilter::Partial {
                day: None,
                month: None,
                year: Some(2023)
            }
        );
        assert!(filter.matches(&date(2023, 6, 1)));
        assert!(!filter.matches(&date(2024, 1, 15)));
    }

    #[test]
    fn test_partial_fields_compose_with_and() {
        let filter = DateFilter::new(None, None, Some(6), Some(2023));
        assert!(filter.matches(&date(2023, 6, 1)));
        assert!(filter.matches(&date(2023, 6, 30)));
        assert!(!filter.matches(&date(2023, 7, 1)));
        assert!(!filter.matches(&date(2024, 6, 1)));
    }

    #[test]
    fn test_zero_fields_are_unset() {
        let filter = DateFilter::new(None, Some(0), Some(0), Some(0));
        assert!(filter.is_unconstrained());
        assert!(filter.matches(&date(1970, 1, 1)));
        assert!(filter.matches(&date(2099, 12, 31)));
    }

    #[test]
    fn test_out_of_range_values_never_match() {
        let filter = DateFilter::new(None, None, Some(13), None);
        assert!(!filter.matches(&date(2024, 12, 1)));
        let filter = DateFilter::new(Some("32/1/2024"), None, None, None);
        assert!(!filter.matches(&date(2024, 1, 31)));
    }

    #[test]
    fn test_exact_integers_outside_field_types_still_apply() {
        for raw in ["-1/1/2024", "15/1/99999999999", "15/4294967296/2024"] {
            let filter = DateFilter::new(Some(raw), None, None, None);
            assert!(
                matches!(filter, DateFilter::Exact { .. }),
                "{:?} should stay an exact filter",
                raw
            );
            assert!(!filter.matches(&date(2024, 1, 15)));
            assert!(!filter.matches(&date(2024, 4, 15)));
        }
        assert_eq!(
            DateFilter::parse_exact("-1/1/2024"),
            Some(DateFilter::Exact {
                day: -1,
                month: 1,
                year: 2024
            })
        );
    }

    #[test]
    fn test_date_filter_display() {
        assert_eq!(
            DateFilter::new(Some("1/2/2003"), None, None, None).to_string(),
            "Exact match for 1/2/2003"
        );
        assert_eq!(
            DateFilter::new(None, Some(5), None, Some(2024)).to_string(),
            "Day=5, Year=2024"
        );
        assert_eq!(DateFilter::default().to_string(), "any date");
    }

    // ==================== Matcher ====================

    #[test]
    fn test_extension_rejects_regardless_of_date() {
        let matcher = Matcher::new(
            ExtensionSet::parse("go"),
            DateFilter::parse_exact("15/1/2024").unwrap(),
        );
        assert!(!matcher.matches(&record("b.py", 2024, 1, 15)));
        assert!(matcher.matches(&record("a.go", 2024, 1, 15)));
    }

    #[test]
    fn test_no_filters_accept_everything() {
        let matcher = Matcher::default();
        assert!(matcher.matches(&record("a.go", 2024, 1, 15)));
        assert!(matcher.matches(&record("README", 1999, 12, 31)));
    }

    #[test]
    fn test_matcher_from_config() {
        let mut config = SearchConfig::new(".").with_extensions("go");
        config.year = Some(2024);
        let matcher = Matcher::from_config(&config);
        assert!(matcher.matches(&record("a.go", 2024, 1, 15)));
        assert!(!matcher.matches(&record("c.go", 2023, 1, 15)));
        assert!(!matcher.matches(&record("b.py", 2024, 1, 15)));
    }
}
