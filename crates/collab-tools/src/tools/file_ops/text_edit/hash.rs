//! Content digests used as optimistic-concurrency tokens

use collab_core::tools::ToolError;
use sha2::{Digest, Sha256};

/// SHA-256 of `content`, lowercase hex
pub fn digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Compare a caller-supplied expectation against the digest of what is on
/// disk right now. `span` names the covered region for the error message.
pub fn verify(expected: &str, actual: &str, span: &str) -> Result<(), ToolError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ToolError::Conflict(format!(
            "{} changed since it was read (expected hash {}, found {}); re-read and retry",
            span, expected, actual
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable() {
        let a = digest(b"one\ntwo\n");
        let b = digest(b"one\ntwo\n");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_digest_distinguishes_content() {
        assert_ne!(digest(b"one\n"), digest(b"one"));
    }

    #[test]
    fn test_verify_mismatch_is_conflict() {
        let actual = digest(b"current");
        let err = verify("deadbeef", &actual, "lines 2-4").unwrap_err();
        assert!(matches!(err, ToolError::Conflict(_)));
        assert!(err.to_string().contains("lines 2-4"));
    }
}
