//! Password-related utilities.

use bcrypt::BcryptError;

// If the cost changes, existing hashes keep verifying; only new hashes pick it up.
pub(crate) const HASH_COST: u32 = 10;

/// Hash a plaintext password. The salt is generated per call, so two hashes
/// of the same password differ.
pub(crate) fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Constant-time verification of a plaintext password against a stored hash.
pub(crate) fn verify_password(password: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_rejects_wrong_password() {
        let hash = hash_password("hunter22").unwrap();

        assert_ne!(hash, "hunter22");
        assert!(verify_password("hunter22", &hash).unwrap());
        assert!(!verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("hunter22").unwrap();
        let second = hash_password("hunter22").unwrap();
        assert_ne!(first, second);
    }
}
