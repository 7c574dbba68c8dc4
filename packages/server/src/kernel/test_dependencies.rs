// Mock implementations for testing
//
// In-memory stores that stand in for Postgres behind the Base* traits,
// usable from unit tests and HTTP-level tests alike.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::{BaseContactStore, BaseCredentialStore};
use crate::domains::auth::models::Identity;
use crate::domains::contacts::models::Contact;

// =============================================================================
// Mock Credential Store
// =============================================================================

/// In-memory credential store
#[derive(Default)]
pub struct MockCredentialStore {
    identities: Arc<Mutex<Vec<Identity>>>,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an identity directly, bypassing the gateway
    pub fn with_identity(self, identity: Identity) -> Self {
        self.identities.lock().unwrap().push(identity);
        self
    }
}

#[async_trait]
impl BaseCredentialStore for MockCredentialStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<Identity>> {
        Ok(self
            .identities
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.login == login)
            .cloned())
    }

    async fn save(&self, identity: Identity) -> Result<Identity> {
        let mut identities = self.identities.lock().unwrap();
        match identities.iter_mut().find(|i| i.id == identity.id) {
            Some(slot) => *slot = identity.clone(),
            None => identities.push(identity.clone()),
        }
        Ok(identity)
    }
}

// =============================================================================
// Mock Contact Store
// =============================================================================

/// In-memory contact store preserving insertion order
#[derive(Default)]
pub struct MockContactStore {
    contacts: Arc<Mutex<Vec<Contact>>>,
}

impl MockContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts across all owners
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BaseContactStore for MockContactStore {
    async fn find_by_owner_and_name(
        &self,
        owner_id: Uuid,
        name: &str,
    ) -> Result<Option<Contact>> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.owner_id == owner_id && c.name == name)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Contact>> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn save(&self, contact: Contact) -> Result<Contact> {
        let mut contacts = self.contacts.lock().unwrap();
        match contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => *slot = contact.clone(),
            None => contacts.push(contact.clone()),
        }
        Ok(contact)
    }

    async fn delete(&self, contact: &Contact) -> Result<()> {
        self.contacts.lock().unwrap().retain(|c| c.id != contact.id);
        Ok(())
    }
}
