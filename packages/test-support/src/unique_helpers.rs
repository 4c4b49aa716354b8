//! Helpers for generating unique test data using ULIDs.

use ulid::Ulid;

/// Generate a unique string with the given prefix, in the format `{prefix}-{ulid}`.
///
/// ```
/// use test_support::unique_str;
///
/// let a = unique_str("key");
/// let b = unique_str("key");
/// assert_ne!(a, b);
/// assert!(a.starts_with("key-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique, human-looking player name.
///
/// Keeps the prefix readable and appends the ULID's random tail so Hall of
/// Fame assertions can find "their" entry among others.
///
/// ```
/// use test_support::unique_name;
///
/// let name = unique_name("Bo");
/// assert!(name.starts_with("Bo "));
/// ```
pub fn unique_name(prefix: &str) -> String {
    let ulid = Ulid::new().to_string();
    format!("{} {}", prefix, &ulid[ulid.len() - 6..])
}
