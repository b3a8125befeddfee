//! # CSRF tokens — intentionally weak
//!
//! Tokens are drawn from [`fastrand`], a small non-cryptographic PRNG, and rendered in
//! base 36. That mirrors the demo's insecure baseline: the token is good enough to show
//! what a per-session token defends against, and predictable enough to discuss why a
//! real deployment would use a CSPRNG.

use thiserror::Error;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Returned when `/change-email` is called with protection on and a bad token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid CSRF token")]
pub struct CsrfRejected;

/// Mint a new token. Never empty.
pub fn generate_token() -> String {
    let mut n = fastrand::u64(..);
    let mut digits = Vec::with_capacity(13);
    loop {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Compare a submitted token against the one stored in the session.
///
/// A missing or empty submission is always rejected, as is any submission when the
/// session never minted a token.
pub fn verify_token(expected: Option<&str>, submitted: Option<&str>) -> Result<(), CsrfRejected> {
    match (expected, submitted) {
        (Some(expected), Some(submitted)) if !submitted.is_empty() && submitted == expected => {
            Ok(())
        }
        _ => Err(CsrfRejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token_is_base36() {
        for _ in 0..100 {
            let token = generate_token();
            assert!(!token.is_empty());
            assert!(token.len() <= 13);
            assert!(token.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_verify_token() {
        assert_eq!(verify_token(Some("abc"), Some("abc")), Ok(()));
        assert_eq!(verify_token(Some("abc"), Some("abd")), Err(CsrfRejected));
        assert_eq!(verify_token(Some("abc"), None), Err(CsrfRejected));
        assert_eq!(verify_token(Some("abc"), Some("")), Err(CsrfRejected));
        // No token minted yet: nothing can match
        assert_eq!(verify_token(None, Some("abc")), Err(CsrfRejected));
        assert_eq!(verify_token(None, None), Err(CsrfRejected));
    }
}
