//! Dashboard configuration.
//!
//! Every field has a default, so a partial (or empty) JSON object is a valid
//! configuration.

use anyhow::Context;
use lad_charts::{ChartKind, Theme};
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the year in `report_url_template`.
pub const YEAR_PLACEHOLDER: &str = "{year}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Years offered by the year selector.
    pub years: Vec<String>,
    /// Year loaded on startup.
    pub default_year: String,
    /// Report location, with `{year}` standing for the selected year.
    pub report_url_template: String,
    /// Storage key of the persisted theme flag.
    pub theme_key: String,
    /// Theme used, and written, when no flag is stored yet.
    pub default_theme: Theme,
    pub containers: ChartContainers,
    /// Script URL of the ECharts library.
    pub echarts_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            years: vec!["2024".to_string(), "2025".to_string()],
            default_year: "2024".to_string(),
            report_url_template: "assets/jsonResponses/dashboard_{year}.json".to_string(),
            theme_key: "themeStatus".to_string(),
            default_theme: Theme::Dark,
            containers: ChartContainers::default(),
            echarts_url: "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse dashboard config")
    }

    /// Parse `json`, falling back to the defaults with a warning.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[LAD] config: {:#}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn report_url(&self, year: &str) -> String {
        self.report_url_template.replace(YEAR_PLACEHOLDER, year)
    }
}

/// DOM ids of the five chart containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartContainers {
    pub course_progress: String,
    pub pass_percentage: String,
    pub assessment_score: String,
    pub learner_details: String,
    pub district_ranking: String,
}

impl Default for ChartContainers {
    fn default() -> Self {
        Self {
            course_progress: ChartKind::CourseProgress.container_id().to_string(),
            pass_percentage: ChartKind::PassPercentage.container_id().to_string(),
            assessment_score: ChartKind::AssessmentScore.container_id().to_string(),
            learner_details: ChartKind::LearnerDetails.container_id().to_string(),
            district_ranking: ChartKind::DistrictRanking.container_id().to_string(),
        }
    }
}

impl ChartContainers {
    pub fn id(&self, kind: ChartKind) -> &str {
        match kind {
            ChartKind::CourseProgress => &self.course_progress,
            ChartKind::PassPercentage => &self.pass_percentage,
            ChartKind::AssessmentScore => &self.assessment_score,
            ChartKind::LearnerDetails => &self.learner_details,
            ChartKind::DistrictRanking => &self.district_ranking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(DashboardConfig::from_json("{}").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = DashboardConfig::from_json(
            r#"{"years": ["2023", "2024"], "defaultTheme": "Light", "containers": {"courseProgress": "cp"}}"#,
        )
        .unwrap();
        assert_eq!(config.years, vec!["2023", "2024"]);
        assert_eq!(config.default_year, "2024");
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.containers.id(ChartKind::CourseProgress), "cp");
        assert_eq!(
            config.containers.id(ChartKind::DistrictRanking),
            "district-ranking-chart"
        );
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(DashboardConfig::from_json("{years: ").is_err());
        assert_eq!(
            DashboardConfig::from_json_or_default("not json"),
            DashboardConfig::default()
        );
    }

    #[test]
    fn test_report_url() {
        let config = DashboardConfig::default();
        assert_eq!(
            config.report_url("2025"),
            "assets/jsonResponses/dashboard_2025.json"
        );
    }
}
