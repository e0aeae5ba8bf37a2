//! Filter state applied to a report to produce the on-screen view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Selector label meaning "no district restriction".
pub const ALL_DISTRICTS: &str = "All Districts";

/// District selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistrictFilter {
    #[default]
    All,
    Only(String),
}

impl DistrictFilter {
    /// Parse a selector label. Both "All Districts" and the older
    /// "All District" spelling mean no restriction.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "" | ALL_DISTRICTS | "All District" => DistrictFilter::All,
            name => DistrictFilter::Only(name.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DistrictFilter::All => ALL_DISTRICTS,
            DistrictFilter::Only(name) => name,
        }
    }

    /// Whether a row for `district` survives this filter.
    pub fn admits(&self, district: &str) -> bool {
        match self {
            DistrictFilter::All => true,
            DistrictFilter::Only(name) => name == district,
        }
    }
}

/// Coarse proration of the yearly summary.
///
/// This divides yearly totals; it is not a windowed query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangeMode {
    #[default]
    FullYear,
    Monthly,
    Quarterly,
}

impl DateRangeMode {
    /// Divisor applied to the summary totals.
    pub fn divisor(self) -> u64 {
        match self {
            DateRangeMode::FullYear => 1,
            DateRangeMode::Monthly => 12,
            DateRangeMode::Quarterly => 4,
        }
    }

    /// Selecting the active mode again switches back to the full year.
    pub fn toggled(self, requested: DateRangeMode) -> DateRangeMode {
        if self == requested {
            DateRangeMode::FullYear
        } else {
            requested
        }
    }

    /// First and last calendar day covered by this mode in `year`.
    pub fn window(self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = match self {
            DateRangeMode::FullYear => NaiveDate::from_ymd_opt(year, 12, 31)?,
            DateRangeMode::Monthly => NaiveDate::from_ymd_opt(year, 1, 31)?,
            DateRangeMode::Quarterly => NaiveDate::from_ymd_opt(year, 3, 31)?,
        };
        Some((start, end))
    }

    /// Human-readable window, e.g. "01 Jan 2024 - 31 Mar 2024".
    ///
    /// Returns an empty string when `year` is not a calendar year.
    pub fn label(self, year: &str) -> String {
        year.trim()
            .parse::<i32>()
            .ok()
            .and_then(|y| self.window(y))
            .map(|(start, end)| {
                format!("{} - {}", start.format("%d %b %Y"), end.format("%d %b %Y"))
            })
            .unwrap_or_default()
    }
}

/// Metric used to order districts in the ranking chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankBy {
    #[default]
    Enrollment,
    PassPercent,
}

impl RankBy {
    pub fn label(self) -> &'static str {
        match self {
            RankBy::Enrollment => "Enrollment",
            RankBy::PassPercent => "Pass %",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Enrollment" => Some(RankBy::Enrollment),
            "Pass %" | "Pass%" | "PassPercent" => Some(RankBy::PassPercent),
            _ => None,
        }
    }

    pub fn all() -> [RankBy; 2] {
        [RankBy::Enrollment, RankBy::PassPercent]
    }
}

/// Complete filter state. The view is a pure function of a report and this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub year: String,
    pub district: DistrictFilter,
    pub date_range: DateRangeMode,
    pub rank_by: RankBy,
}

impl FilterState {
    /// Unfiltered state for `year`.
    pub fn for_year(year: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            ..Default::default()
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.district == DistrictFilter::All
            && self.date_range == DateRangeMode::FullYear
            && self.rank_by == RankBy::default()
    }

    pub fn date_range_label(&self) -> String {
        self.date_range.label(&self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_from_label() {
        assert_eq!(DistrictFilter::from_label("All Districts"), DistrictFilter::All);
        assert_eq!(DistrictFilter::from_label("All District"), DistrictFilter::All);
        assert_eq!(
            DistrictFilter::from_label("Chennai"),
            DistrictFilter::Only("Chennai".to_string())
        );
        assert_eq!(DistrictFilter::All.label(), ALL_DISTRICTS);
    }

    #[test]
    fn test_district_admits() {
        let only = DistrictFilter::Only("Erode".to_string());
        assert!(only.admits("Erode"));
        assert!(!only.admits("Karur"));
        assert!(DistrictFilter::All.admits("Karur"));
    }

    #[test]
    fn test_date_range_divisors() {
        assert_eq!(DateRangeMode::FullYear.divisor(), 1);
        assert_eq!(DateRangeMode::Monthly.divisor(), 12);
        assert_eq!(DateRangeMode::Quarterly.divisor(), 4);
    }

    #[test]
    fn test_date_range_toggle() {
        let active = DateRangeMode::Monthly;
        assert_eq!(active.toggled(DateRangeMode::Monthly), DateRangeMode::FullYear);
        assert_eq!(active.toggled(DateRangeMode::Quarterly), DateRangeMode::Quarterly);
        assert_eq!(
            DateRangeMode::FullYear.toggled(DateRangeMode::Monthly),
            DateRangeMode::Monthly
        );
    }

    #[test]
    fn test_date_range_labels() {
        assert_eq!(DateRangeMode::FullYear.label("2024"), "01 Jan 2024 - 31 Dec 2024");
        assert_eq!(DateRangeMode::Monthly.label("2024"), "01 Jan 2024 - 31 Jan 2024");
        assert_eq!(DateRangeMode::Quarterly.label("2025"), "01 Jan 2025 - 31 Mar 2025");
        assert_eq!(DateRangeMode::Quarterly.label("next"), "");
    }

    #[test]
    fn test_rank_by_labels() {
        for metric in RankBy::all() {
            assert_eq!(RankBy::from_label(metric.label()), Some(metric));
        }
        assert_eq!(RankBy::from_label("Alphabetical"), None);
    }

    #[test]
    fn test_for_year_is_unfiltered() {
        let filters = FilterState::for_year("2024");
        assert!(filters.is_unfiltered());
        assert_eq!(filters.date_range_label(), "01 Jan 2024 - 31 Dec 2024");
    }
}
