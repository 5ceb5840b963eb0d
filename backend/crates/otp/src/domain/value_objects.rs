//! Domain Value Objects

use std::fmt;

use platform::crypto::{random_numeric_code, sha256};

/// A freshly generated one-time code
///
/// Only lives long enough to be digested and mailed. Debug output is
/// redacted so the code cannot end up in logs.
pub struct OtpCode(String);

impl OtpCode {
    /// Generate a uniformly random code of `len` decimal digits
    pub fn generate(len: usize) -> Self {
        Self(random_numeric_code(len))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SHA-256 digest stored in place of the code
    pub fn digest(&self) -> Vec<u8> {
        digest_code(&self.0)
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OtpCode").field(&"[REDACTED]").finish()
    }
}

/// Digest a submitted or generated code
pub fn digest_code(code: &str) -> Vec<u8> {
    sha256(code.as_bytes()).to_vec()
}

/// Whether a submitted code has the shape of an issued one
///
/// Malformed input is rejected before any lookup; the caller still
/// answers with the uniform failure.
pub fn is_well_formed_code(candidate: &str, len: usize) -> bool {
    candidate.len() == len && candidate.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_is_well_formed() {
        let code = OtpCode::generate(6);
        assert!(is_well_formed_code(code.as_str(), 6));
    }

    #[test]
    fn test_digest_matches_helper() {
        let code = OtpCode::generate(6);
        assert_eq!(code.digest(), digest_code(code.as_str()));
        assert_eq!(code.digest().len(), 32);
    }

    #[test]
    fn test_malformed_codes() {
        assert!(!is_well_formed_code("", 6));
        assert!(!is_well_formed_code("12345", 6));
        assert!(!is_well_formed_code("1234567", 6));
        assert!(!is_well_formed_code("12a456", 6));
        assert!(!is_well_formed_code(" 23456", 6));
        assert!(is_well_formed_code("012345", 6));
    }

    #[test]
    fn test_debug_is_redacted() {
        let code = OtpCode::generate(6);
        let debug = format!("{:?}", code);
        assert!(!debug.contains(code.as_str()));
    }
}
