use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directory entry owned by exactly one identity
///
/// The owner never appears on the wire; API responses expose only the
/// contact's own fields. Email and phone sets are ordered so JSON
/// output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub emails: BTreeSet<String>,
    pub phone_numbers: BTreeSet<String>,
    #[serde(skip)]
    pub owner_id: Uuid,
}

impl Contact {
    pub fn new(owner_id: Uuid, draft: ContactDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            emails: draft.emails,
            phone_numbers: draft.phone_numbers,
            owner_id,
        }
    }
}

/// Incoming contact payload for add and edit requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    #[serde(default)]
    pub emails: BTreeSet<String>,
    #[serde(default)]
    pub phone_numbers: BTreeSet<String>,
}
