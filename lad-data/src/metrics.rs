//! Derived figures computed from a view: percentages, rankings and maxima.
//!
//! Every function here is pure. All ratios go through [`ratio_percent`], so
//! the zero-denominator policy is the same everywhere: a ratio over zero is
//! [`ZERO_DENOMINATOR_PERCENT`].

use crate::filter::RankBy;
use lad_report::{District, Report};
use serde::Serialize;

/// Result of any percentage whose denominator is zero.
pub const ZERO_DENOMINATOR_PERCENT: u32 = 0;

/// `part / whole * 100`, unrounded. Zero when `whole` is zero.
pub fn ratio_percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return ZERO_DENOMINATOR_PERCENT as f64;
    }
    part as f64 / whole as f64 * 100.0
}

/// `part / whole * 100` rounded to the nearest integer (halves round up).
///
/// Returns [`ZERO_DENOMINATOR_PERCENT`] when `whole` is zero.
pub fn percent_of(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return ZERO_DENOMINATOR_PERCENT;
    }
    ratio_percent(part, whole).round() as u32
}

/// Share of a district's enrolled learners who passed.
pub fn pass_percent(district: &District) -> u32 {
    percent_of(district.passed, district.enrolled)
}

/// Course progress bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bucket {
    Good,
    Average,
    Below,
}

impl Bucket {
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Good => "Good",
            Bucket::Average => "Average",
            Bucket::Below => "Below",
        }
    }
}

/// Bucket with the greatest value. Ties go to Good, then Average.
pub fn dominant_bucket(good: f64, average: f64, below: f64) -> Bucket {
    if good >= average && good >= below {
        Bucket::Good
    } else if average >= below {
        Bucket::Average
    } else {
        Bucket::Below
    }
}

/// Sort districts descending by `metric` and renumber `rank` from 1.
///
/// The sort is stable: districts with equal keys keep their relative order.
pub fn rank_in_place(districts: &mut [District], metric: RankBy) {
    match metric {
        RankBy::Enrollment => districts.sort_by(|a, b| b.enrolled.cmp(&a.enrolled)),
        RankBy::PassPercent => districts.sort_by(|a, b| {
            let a_pass = ratio_percent(a.passed, a.enrolled);
            let b_pass = ratio_percent(b.passed, b.enrolled);
            b_pass.total_cmp(&a_pass)
        }),
    }
    for (index, district) in districts.iter_mut().enumerate() {
        district.rank = index as u32 + 1;
    }
}

/// The ranking order for `metric` without touching `view`.
pub fn ranked_districts(view: &Report, metric: RankBy) -> Vec<District> {
    let mut districts = view.district_ranking.districts.clone();
    rank_in_place(&mut districts, metric);
    districts
}

/// Tallest stacked (male + female + others) enrollment bar in the view.
pub fn max_stacked_enrollment(view: &Report) -> u64 {
    view.district_ranking
        .districts
        .iter()
        .map(District::stacked_enrollment)
        .max()
        .unwrap_or(0)
}

/// Smallest positive multiple of `step` that is at least `value`.
///
/// Used as the top of count axes so they fit the data.
pub fn axis_ceiling(value: u64, step: u64) -> u64 {
    if step == 0 {
        return value;
    }
    value.div_ceil(step).max(1) * step
}
