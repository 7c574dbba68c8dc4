use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::BaseCredentialHasher;

/// Salted SHA-256 credential hasher
///
/// Stored format is `{salt}:{hex digest of salt || plaintext}`. The salt
/// is a fresh random value per hash, so equal passwords never share a
/// stored representation.
pub struct Sha256CredentialHasher;

impl Sha256CredentialHasher {
    pub fn new() -> Self {
        Self
    }

    fn digest(salt: &str, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl Default for Sha256CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseCredentialHasher for Sha256CredentialHasher {
    fn hash(&self, plaintext: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        format!("{}:{}", salt, Self::digest(&salt, plaintext))
    }

    fn matches(&self, plaintext: &str, hash: &str) -> bool {
        match hash.split_once(':') {
            Some((salt, digest)) => Self::digest(salt, plaintext) == digest,
            None => false,
        }
    }
}
