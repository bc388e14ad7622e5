//! Generated-content comparison helpers.
//!
//! Every generated file embeds a `Generated at:` timestamp line, so a
//! byte comparison would register a diff on every regeneration. Change
//! detection strips that line first.

use sha2::Digest;

/// Remove the generation-timestamp line and surrounding whitespace, for
/// "did this actually change" comparisons.
pub fn strip_timestamp(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with("* Generated at:"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

/// True when the two generated contents differ beyond their timestamps.
pub fn content_changed(old: &str, new: &str) -> bool {
    strip_timestamp(old) != strip_timestamp(new)
}

/// Stable fingerprint of generated content, timestamp excluded.
pub fn content_fingerprint(content: &str) -> String {
    let digest = sha2::Sha256::digest(strip_timestamp(content).as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "/**\n * Title\n * Generated at: 2024-01-01 00:00:00 UTC\n */\nexport interface IA {}\n";
    const B: &str = "/**\n * Title\n * Generated at: 2025-06-30 12:34:56 UTC\n */\nexport interface IA {}\n";
    const C: &str = "/**\n * Title\n * Generated at: 2024-01-01 00:00:00 UTC\n */\nexport interface IB {}\n";

    #[test]
    fn timestamp_only_diffs_are_ignored() {
        assert!(!content_changed(A, B));
        assert_eq!(content_fingerprint(A), content_fingerprint(B));
    }

    #[test]
    fn real_diffs_are_detected() {
        assert!(content_changed(A, C));
        assert_ne!(content_fingerprint(A), content_fingerprint(C));
    }
}
