use bcrypt::{hash, verify, BcryptResult};

/// Salted bcrypt hashing with a configurable cost.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> BcryptResult<String> {
        hash(password, self.cost)
    }

    pub fn verify(&self, password: &str, password_hash: &str) -> BcryptResult<bool> {
        verify(password, password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = PasswordHasher::new(4);
        let hashed = hasher.hash("secret").unwrap();

        assert_ne!(hashed, "secret");
        assert!(hasher.verify("secret", &hashed).unwrap());
        assert!(!hasher.verify("wrong", &hashed).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new(4);
        assert_ne!(hasher.hash("secret").unwrap(), hasher.hash("secret").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = PasswordHasher::new(4);
        assert!(hasher.verify("secret", "not-a-bcrypt-hash").is_err());
    }
}
