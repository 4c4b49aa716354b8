use std::collections::HashSet;

use spotlight::ErrorCode;

#[test]
fn error_codes_are_unique() {
    let all = [
        // Keep in sync with ErrorCode enum variants
        ErrorCode::NotReady,
        ErrorCode::InvalidScore,
        ErrorCode::PhaseMismatch,
        ErrorCode::UnknownPlayer,
        ErrorCode::ValidationError,
        ErrorCode::SessionBusy,
        ErrorCode::Conflict,
        ErrorCode::PersistenceFailure,
        ErrorCode::DataCorruption,
        ErrorCode::ConfigError,
        ErrorCode::IoError,
        ErrorCode::Internal,
    ];

    let mut seen = HashSet::new();
    for code in all {
        let s = code.as_str();
        assert!(seen.insert(s), "Duplicate error code string: {s}");
        assert_eq!(s, s.to_ascii_uppercase(), "{s} is not SCREAMING_SNAKE");
    }
}
