// Date normalization
//
// Stored dates use `/` separators; older data and form input may use `-`.
// No calendar validation: the field also carries free-text placeholders.

pub fn normalize_date(date: &str) -> String {
    date.replace('-', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_hyphen_separators() {
        assert_eq!(normalize_date("2025-11-16"), "2025/11/16");
    }

    #[test]
    fn is_idempotent() {
        assert_eq!(normalize_date("2025/11/16"), "2025/11/16");
        assert_eq!(normalize_date(&normalize_date("2025-11-16")), "2025/11/16");
    }

    #[test]
    fn leaves_empty_input_unchanged() {
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn performs_no_calendar_validation() {
        assert_eq!(normalize_date("2025-13-99"), "2025/13/99");
        assert_eq!(normalize_date("未定"), "未定");
    }
}
