//! Salted credential digests for the identity adapter.
//!
//! Stored form is `hex(salt)$hex(sha256(salt || password))`. Verification
//! compares digests in constant time. The digest format is an adapter
//! detail; nothing outside this module tree interprets it.

use constant_time_eq::constant_time_eq;
use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

fn digest_with_salt(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Digest a plaintext password with a fresh random salt.
pub(crate) fn hash_password(password: &str) -> String {
    let mut salt = [0_u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    let digest = digest_with_salt(&salt, password);
    format!("{}${}", hex::encode(salt), hex::encode(digest))
}

/// Check a plaintext password against a stored digest.
///
/// Malformed stored values verify as `false` rather than erroring; they can
/// only arise from manual database edits.
pub(crate) fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(digest_hex) else {
        return false;
    };

    let computed = digest_with_salt(&salt, password);
    constant_time_eq(&computed, &expected)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[test]
    fn round_trip_verifies() {
        let stored = hash_password("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &stored));
    }

    #[test]
    fn wrong_password_fails() {
        let stored = hash_password("secret");
        assert!(!verify_password("Secret", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn salts_differ_between_digests() {
        let first = hash_password("secret");
        let second = hash_password("secret");
        assert_ne!(first, second, "each digest carries a fresh salt");
        assert!(verify_password("secret", &first));
        assert!(verify_password("secret", &second));
    }

    #[rstest]
    #[case("")]
    #[case("no-separator")]
    #[case("nothex$deadbeef")]
    #[case("deadbeef$nothex")]
    fn malformed_stored_values_fail_closed(#[case] stored: &str) {
        assert!(!verify_password("secret", stored));
    }
}
