use once_cell::sync::Lazy;
use regex::Regex;

static UID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^u\d{7}$").expect("Invalid uid regex"));

/// uid 格式校验：'u' 后跟 7 位数字（如 u0000002）
pub fn validate_uid(uid: &str) -> bool {
    UID_RE.is_match(uid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_uid() {
        assert!(validate_uid("u0000002"));
        assert!(validate_uid("u1234567"));
    }

    #[test]
    fn test_invalid_uid() {
        assert!(!validate_uid("0000002"));
        assert!(!validate_uid("u000002"));
        assert!(!validate_uid("u00000021"));
        assert!(!validate_uid("U0000002"));
        assert!(!validate_uid("u000000a"));
    }
}
