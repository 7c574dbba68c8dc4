use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;
use uuid::Uuid;

use crate::domains::auth::models::Identity;
use crate::domains::contacts::errors::{ConflictError, DirectoryError, ValidationError};
use crate::domains::contacts::models::{Contact, ContactDraft};
use crate::domains::contacts::validation::{is_valid_email, is_valid_phone_number};
use crate::kernel::BaseContactStore;

/// Owner-scoped contact directory
///
/// Name, email and phone uniqueness hold within a single owner's
/// contact set, never globally. Every operation takes the resolved
/// caller identity as its scope; no operation can observe or mutate
/// another identity's contacts.
///
/// Mutations serialize per owner: the uniqueness scan and the write
/// happen under one lock, so two concurrent adds of the same name
/// cannot both pass the scan.
pub struct ContactDirectory {
    store: Arc<dyn BaseContactStore>,
    locks: Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>,
}

impl ContactDirectory {
    pub fn new(store: Arc<dyn BaseContactStore>) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn owner_lock(&self, owner_id: Uuid) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().expect("owner lock registry poisoned");
        locks.entry(owner_id).or_default().clone()
    }

    /// All contacts owned by `owner`, in insertion order
    pub async fn list_all(&self, owner: &Identity) -> Result<Vec<Contact>> {
        self.store.list_by_owner(owner.id).await
    }

    /// Scope-filtered lookup by name; absent is not an error
    pub async fn find_by_name(&self, owner: &Identity, name: &str) -> Result<Option<Contact>> {
        self.store.find_by_owner_and_name(owner.id, name).await
    }

    /// Add a contact to the owner's set
    ///
    /// Check order is load-bearing: duplicate name, then every email
    /// format, then every phone format, then email uniqueness, then
    /// phone uniqueness. Format failures preempt conflicts within the
    /// same field, and all email checks run before any phone check.
    pub async fn add(
        &self,
        owner: &Identity,
        draft: ContactDraft,
    ) -> Result<Contact, DirectoryError> {
        let lock = self.owner_lock(owner.id);
        let _guard = lock.lock().await;

        let existing = self.store.list_by_owner(owner.id).await?;

        if existing.iter().any(|c| c.name == draft.name) {
            return Err(ConflictError::DuplicateName.into());
        }
        for email in &draft.emails {
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail(email.clone()).into());
            }
        }
        for phone in &draft.phone_numbers {
            if !is_valid_phone_number(phone) {
                return Err(ValidationError::InvalidPhone(phone.clone()).into());
            }
        }
        for email in &draft.emails {
            if existing.iter().any(|c| c.emails.contains(email)) {
                return Err(ConflictError::DuplicateEmail(email.clone()).into());
            }
        }
        for phone in &draft.phone_numbers {
            if existing.iter().any(|c| c.phone_numbers.contains(phone)) {
                return Err(ConflictError::DuplicatePhone(phone.clone()).into());
            }
        }

        let stored = self.store.save(Contact::new(owner.id, draft)).await?;
        debug!(owner = %owner.login, contact = %stored.name, "contact added");
        Ok(stored)
    }

    /// Replace a contact's name, emails and phone numbers wholesale
    ///
    /// The contact under edit is excluded from its own uniqueness scan,
    /// so re-submitting unchanged values is not a conflict. Per value,
    /// the format check runs immediately before the uniqueness check.
    pub async fn edit(
        &self,
        owner: &Identity,
        name: &str,
        draft: ContactDraft,
    ) -> Result<Contact, DirectoryError> {
        let lock = self.owner_lock(owner.id);
        let _guard = lock.lock().await;

        let contacts = self.store.list_by_owner(owner.id).await?;
        let current = contacts
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;

        if current.name != draft.name && contacts.iter().any(|c| c.name == draft.name) {
            return Err(ConflictError::DuplicateName.into());
        }

        let others: Vec<&Contact> = contacts.iter().filter(|c| c.id != current.id).collect();

        for email in &draft.emails {
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail(email.clone()).into());
            }
            if others.iter().any(|c| c.emails.contains(email)) {
                return Err(ConflictError::DuplicateEmail(email.clone()).into());
            }
        }
        for phone in &draft.phone_numbers {
            if !is_valid_phone_number(phone) {
                return Err(ValidationError::InvalidPhone(phone.clone()).into());
            }
            if others.iter().any(|c| c.phone_numbers.contains(phone)) {
                return Err(ConflictError::DuplicatePhone(phone.clone()).into());
            }
        }

        let mut updated = current;
        updated.name = draft.name;
        updated.emails = draft.emails;
        updated.phone_numbers = draft.phone_numbers;

        let stored = self.store.save(updated).await?;
        debug!(owner = %owner.login, contact = %stored.name, "contact updated");
        Ok(stored)
    }

    /// Remove a contact by name; `false` when no such contact exists
    pub async fn delete(&self, owner: &Identity, name: &str) -> Result<bool> {
        let lock = self.owner_lock(owner.id);
        let _guard = lock.lock().await;

        match self.store.find_by_owner_and_name(owner.id, name).await? {
            Some(contact) => {
                self.store.delete(&contact).await?;
                debug!(owner = %owner.login, contact = %name, "contact deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
