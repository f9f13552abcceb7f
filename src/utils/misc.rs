use chrono::DateTime;

/// Formats a Unix timestamp as a UTC `YYYYMMDD` date
pub fn format_build_date(timestamp: i64) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.format("%Y%m%d").to_string())
}

/// Turns an incremental such as "eng.user.20231114.123456" into "20231114":
/// keep only the digits, then drop the trailing six (the time of day).
pub fn incremental_date(incremental: &str) -> Option<String> {
    let digits: String = incremental.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 6 {
        return None;
    }

    Some(digits[..digits.len() - 6].to_string())
}

#[cfg(test)]
mod misc_tests {
    use super::*;

    #[test]
    fn test_build_date() {
        assert_eq!(format_build_date(1700000000).as_deref(), Some("20231114"));
        assert_eq!(format_build_date(0).as_deref(), Some("19700101"));
        // Just before midnight UTC
        assert_eq!(format_build_date(1700006399).as_deref(), Some("20231114"));
        assert_eq!(format_build_date(i64::MAX), None);
    }

    #[test]
    fn test_incremental_date() {
        assert_eq!(incremental_date("eng.user.20231114.123456").as_deref(), Some("20231114"));
        assert_eq!(incremental_date("20240102-0930-00").as_deref(), Some("20240102"));
        assert_eq!(incremental_date("1234567").as_deref(), Some("1"));
        assert_eq!(incremental_date("123456"), None);
        assert_eq!(incremental_date("eng.user"), None);
    }
}
