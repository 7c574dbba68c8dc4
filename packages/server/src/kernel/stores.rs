// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Uniqueness and validation rules live in the contact directory;
// these traits just persist and look up records.
//
// Naming convention: Base* for trait names (e.g., BaseContactStore)

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domains::auth::models::Identity;
use crate::domains::contacts::models::Contact;

// =============================================================================
// Credential Store Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseCredentialStore: Send + Sync {
    /// Look up an identity by its unique login
    async fn find_by_login(&self, login: &str) -> Result<Option<Identity>>;

    /// Persist an identity, returning the stored record
    async fn save(&self, identity: Identity) -> Result<Identity>;
}

// =============================================================================
// Contact Store Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseContactStore: Send + Sync {
    /// Look up a contact by name within one owner's scope
    async fn find_by_owner_and_name(&self, owner_id: Uuid, name: &str)
        -> Result<Option<Contact>>;

    /// All contacts for an owner, in insertion order
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Contact>>;

    /// Insert or overwrite a contact (keyed by id)
    async fn save(&self, contact: Contact) -> Result<Contact>;

    /// Remove a contact
    async fn delete(&self, contact: &Contact) -> Result<()>;
}

// =============================================================================
// Credential Hasher Trait (Infrastructure)
// =============================================================================

/// Password hashing seam. Algorithm internals stay behind this trait so
/// the gateway never compares plaintext against stored material itself.
pub trait BaseCredentialHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, plaintext: &str) -> String;

    /// Check a plaintext password against a stored hash
    fn matches(&self, plaintext: &str, hash: &str) -> bool;
}
