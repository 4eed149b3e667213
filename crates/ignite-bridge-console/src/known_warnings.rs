/// Benign stderr lines printed by Java 9+ when the node starts with
/// reflective access to JDK internals.
pub const JAVA_ILLEGAL_ACCESS_WARNINGS: [&str; 5] = [
    "WARNING: An illegal reflective access operation has occurred",
    "WARNING: Illegal reflective access by org.apache.ignite.internal.util.GridUnsafe$2",
    "WARNING: Please consider reporting this to the maintainers of",
    "WARNING: Use --illegal-access=warn to enable warnings of further illegal reflective access operations",
    "WARNING: All illegal access operations will be denied in a future release",
];

/// Returns true if the message starts with one of the known warnings.
///
/// Comparison is ordinal (byte-wise).
pub fn is_known_warning(message: &str) -> bool {
    JAVA_ILLEGAL_ACCESS_WARNINGS
        .iter()
        .any(|warning| message.starts_with(warning))
}
