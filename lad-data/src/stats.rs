//! Summary stat cards shown above the charts.

use crate::metrics::percent_of;
use lad_report::Report;
use serde::Serialize;

/// One headline figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    /// Card accent color (hex).
    pub color: &'static str,
    /// Share of total learners, in percent.
    pub share_percent: u32,
}

/// Cards for the view's (possibly prorated) summary, in display order.
pub fn summary_cards(view: &Report) -> Vec<StatCard> {
    let summary = &view.summary;
    let total = summary.total_learners;
    [
        ("Total Learner Enrolled", total, "#10b981"),
        ("\u{2642} Male", summary.male, "#3b82f6"),
        ("\u{2640} Female", summary.female, "#f59e0b"),
        ("Active", summary.active_learners, "#ef4444"),
        ("Completed", summary.engaged_learners, "#8b5cf6"),
    ]
    .into_iter()
    .map(|(label, value, color)| StatCard {
        label,
        value,
        color,
        share_percent: percent_of(value, total),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DateRangeMode;
    use crate::store::ReportStore;

    const REPORT_2024: &str = include_str!("../../fixtures/dashboard_2024.json");

    #[test]
    fn test_cards_for_full_year() {
        let report = Report::from_json(REPORT_2024).unwrap();
        let cards = summary_cards(&report);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].value, 1200);
        assert_eq!(cards[0].share_percent, 100);
        assert_eq!(cards[1].value, 560);
        assert_eq!(cards[1].share_percent, 47);
        assert_eq!(cards[3].label, "Active");
        assert_eq!(cards[3].share_percent, 80);
        assert_eq!(cards[4].value, 725);
    }

    #[test]
    fn test_cards_follow_date_range() {
        let mut store = ReportStore::new();
        store.replace_report("2024", Report::from_json(REPORT_2024).unwrap());
        store.apply_date_range(DateRangeMode::Quarterly);
        let cards = summary_cards(store.view());
        assert_eq!(cards[0].value, 300);
        assert_eq!(cards[3].value, 240);
    }

    #[test]
    fn test_cards_for_empty_report() {
        let cards = summary_cards(&Report::default());
        assert!(cards.iter().all(|c| c.value == 0 && c.share_percent == 0));
    }
}
