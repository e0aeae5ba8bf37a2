//! Yearly analytics report as published in `dashboard_{year}.json`.
//!
//! Field names are camelCase on the wire. The schema carries no version
//! field, so any change here is a breaking change for the data files.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One year's full analytics payload.
///
/// `Report::default()` is the empty report shown before the first load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: Summary,
    pub course_progress: Vec<CourseProgress>,
    pub pass_stats: PassStats,
    pub assessment_completion: AssessmentCompletion,
    pub grade_breakdown: Vec<GradeBreakdown>,
    pub district_ranking: DistrictRanking,
}

/// Learner totals for the year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_learners: u64,
    pub male: u64,
    pub female: u64,
    pub others: u64,
    pub active_learners: u64,
    pub engaged_learners: u64,
}

impl Summary {
    /// Male + female + others, saturating at `u64::MAX`.
    pub fn gender_total(&self) -> u64 {
        self.male.saturating_add(self.female).saturating_add(self.others)
    }

    /// True when `male + female + others == total_learners`.
    ///
    /// This is a soft invariant of the data files, never enforced.
    pub fn gender_total_matches(&self) -> bool {
        self.gender_total() == self.total_learners
    }
}

/// Course progress buckets for one district.
///
/// `below`, `average` and `good` are independent percentages; they are not a
/// partition and need not sum to 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub district: String,
    pub below: f64,
    pub average: f64,
    pub good: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassStats {
    pub overall_learners: u64,
    pub assessment_taken: u64,
    pub passed: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentCompletion {
    pub completed_percent: f64,
    pub not_completed_percent: f64,
}

/// Letter grade bands, A (>80) through E (0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn all() -> [Grade; 5] {
        [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBreakdown {
    pub grade: Grade,
    pub label: String,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRanking {
    /// Label of the metric the districts are ordered by ("Enrollment", "Pass %").
    pub rank_by: String,
    pub districts: Vec<District>,
}

/// Enrollment and outcome figures for one district.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub district: String,
    /// 1-based position in the current ranking order.
    pub rank: u32,
    pub enrolled: u64,
    pub male: u64,
    pub female: u64,
    pub others: u64,
    pub passed: u64,
    pub assessment_completed: u64,
    pub completion_rate_percent: f64,
}

impl District {
    /// Male + female + others, the height of the stacked enrollment bar.
    /// Saturates at `u64::MAX`.
    pub fn stacked_enrollment(&self) -> u64 {
        self.male.saturating_add(self.female).saturating_add(self.others)
    }
}

impl Report {
    /// Decode a report from its JSON payload.
    pub fn from_json(json: &str) -> Result<Report> {
        let report: Report = serde_json::from_str(json)?;
        for warning in report.validate() {
            log::warn!("[LAD] report: {}", warning);
        }
        Ok(report)
    }

    /// Unique district names in first-seen order.
    ///
    /// Course progress rows come first, then ranking rows, so the selector
    /// lists districts in the order the report presents them.
    pub fn district_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let all = self
            .course_progress
            .iter()
            .map(|c| &c.district)
            .chain(self.district_ranking.districts.iter().map(|d| &d.district));
        for name in all {
            if !names.iter().any(|n| n == name) {
                names.push(name.clone());
            }
        }
        names
    }

    /// Soft-invariant violations, one message each.
    ///
    /// None of these stop a report from loading; they are reported so bad
    /// data files are noticed.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.summary.gender_total_matches() {
            warnings.push(format!(
                "male + female + others = {} but totalLearners = {}",
                self.summary.gender_total(),
                self.summary.total_learners
            ));
        }

        let stats = &self.pass_stats;
        for (name, value) in [
            ("assessmentTaken", stats.assessment_taken),
            ("passed", stats.passed),
            ("failed", stats.failed),
        ] {
            if value > stats.overall_learners {
                warnings.push(format!(
                    "passStats.{} = {} exceeds overallLearners = {}",
                    name, value, stats.overall_learners
                ));
            }
        }

        let completion = &self.assessment_completion;
        let completion_sum = completion.completed_percent + completion.not_completed_percent;
        if completion_sum != 0.0 && (completion_sum - 100.0).abs() > f64::EPSILON {
            warnings.push(format!(
                "assessmentCompletion sums to {} instead of 100",
                completion_sum
            ));
        }

        if !self.grade_breakdown.is_empty() {
            let grade_sum: f64 = self.grade_breakdown.iter().map(|g| g.percent).sum();
            if (grade_sum - 100.0).abs() > 0.5 {
                warnings.push(format!("gradeBreakdown sums to {} instead of 100", grade_sum));
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_2024: &str = include_str!("../../fixtures/dashboard_2024.json");

    #[test]
    fn test_parse_fixture() {
        let report = Report::from_json(REPORT_2024).unwrap();
        assert_eq!(report.summary.total_learners, 1200);
        assert_eq!(report.course_progress.len(), 5);
        assert_eq!(report.grade_breakdown[0].grade, Grade::A);
        assert_eq!(report.grade_breakdown[4].label, "E - Grade (0)");
        assert_eq!(report.district_ranking.rank_by, "Enrollment");
        assert_eq!(report.district_ranking.districts[1].district, "Coimbatore");
        assert_eq!(report.district_ranking.districts[1].completion_rate_percent, 83.0);
        assert!(report.validate().is_empty());
    }

    #[test]
    fn test_camel_case_round_trip() {
        let report = Report::from_json(REPORT_2024).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["summary"]["totalLearners"].is_number());
        assert!(json["districtRanking"]["districts"][0]["assessmentCompleted"].is_number());
        assert!(json.get("course_progress").is_none());
    }

    #[test]
    fn test_rejects_malformed_payload() {
        assert!(Report::from_json("{\"summary\": 3}").is_err());
        assert!(Report::from_json("not json").is_err());
    }

    #[test]
    fn test_unknown_grade_is_rejected() {
        let json = REPORT_2024.replace("\"grade\": \"E\"", "\"grade\": \"F\"");
        assert!(Report::from_json(&json).is_err());
    }

    #[test]
    fn test_default_is_empty() {
        let report = Report::default();
        assert_eq!(report.summary.total_learners, 0);
        assert!(report.course_progress.is_empty());
        assert!(report.district_ranking.districts.is_empty());
        assert!(report.validate().is_empty());
    }

    #[test]
    fn test_district_names_first_seen_order() {
        let mut report = Report::from_json(REPORT_2024).unwrap();
        report.district_ranking.districts.push(District {
            district: "Ariyalur".to_string(),
            ..Default::default()
        });
        let names = report.district_names();
        assert_eq!(
            names,
            vec!["Chennai", "Coimbatore", "Madurai", "Erode", "Karur", "Ariyalur"]
        );
    }

    #[test]
    fn test_validate_flags_soft_invariants() {
        let mut report = Report::from_json(REPORT_2024).unwrap();
        report.summary.others += 1;
        report.pass_stats.passed = 5000;
        report.assessment_completion.not_completed_percent = 30.0;
        let warnings = report.validate();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("totalLearners"));
        assert!(warnings[1].contains("passStats.passed"));
        assert!(warnings[2].contains("assessmentCompletion"));
    }

    #[test]
    fn test_huge_gender_counts_saturate() {
        let mut report = Report::from_json(REPORT_2024).unwrap();
        report.summary.male = u64::MAX;
        report.summary.female = 10;
        assert_eq!(report.summary.gender_total(), u64::MAX);
        assert!(!report.summary.gender_total_matches());
        let warnings = report.validate();
        assert!(warnings[0].contains(&u64::MAX.to_string()));

        let district = District {
            male: u64::MAX - 1,
            female: 5,
            others: 5,
            ..Default::default()
        };
        assert_eq!(district.stacked_enrollment(), u64::MAX);
    }
}
