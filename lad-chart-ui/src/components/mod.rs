//! Reusable Dioxus RSX components for the learner analytics dashboard.

mod chart_container;
mod chart_header;
mod date_range_toggle;
mod district_selector;
mod error_display;
mod loading_spinner;
mod rank_by_selector;
mod stat_cards;
mod theme_toggle;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_toggle::DateRangeToggle;
pub use district_selector::DistrictSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use rank_by_selector::RankBySelector;
pub use stat_cards::StatCards;
pub use theme_toggle::ThemeToggle;
pub use year_selector::YearSelector;
