use num_format::{Locale, ToFormattedString};

/// Count with thousands separators, e.g. `12,500`.
pub(crate) fn count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Percentage without a trailing `.0` for whole numbers.
pub(crate) fn percent(value: f64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_groups_thousands() {
        assert_eq!(count(0), "0");
        assert_eq!(count(702), "702");
        assert_eq!(count(12500), "12,500");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(72.0), "72%");
        assert_eq!(percent(34.5), "34.5%");
    }
}
