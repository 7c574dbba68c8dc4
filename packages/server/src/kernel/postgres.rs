// Postgres-backed store implementations
//
// Contacts are persisted as a base row plus element tables for emails
// and phone numbers, one value per row. Saves rewrite the element rows
// wholesale inside a transaction.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::BTreeSet;
use uuid::Uuid;

use super::{BaseContactStore, BaseCredentialStore};
use crate::domains::auth::models::Identity;
use crate::domains::contacts::models::Contact;

// =============================================================================
// Credential Store
// =============================================================================

pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseCredentialStore for PgCredentialStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<Identity>> {
        let identity = sqlx::query_as::<_, Identity>(
            "SELECT id, login, password_hash FROM users WHERE login = $1",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;
        Ok(identity)
    }

    async fn save(&self, identity: Identity) -> Result<Identity> {
        let stored = sqlx::query_as::<_, Identity>(
            r#"
            INSERT INTO users (id, login, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET password_hash = EXCLUDED.password_hash
            RETURNING id, login, password_hash
            "#,
        )
        .bind(identity.id)
        .bind(&identity.login)
        .bind(&identity.password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }
}

// =============================================================================
// Contact Store
// =============================================================================

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: Uuid,
    name: String,
    owner_id: Uuid,
}

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_elements(
        &self,
        contact_id: Uuid,
    ) -> Result<(BTreeSet<String>, BTreeSet<String>)> {
        let emails: Vec<String> =
            sqlx::query_scalar("SELECT email FROM contact_emails WHERE contact_id = $1")
                .bind(contact_id)
                .fetch_all(&self.pool)
                .await?;
        let phones: Vec<String> =
            sqlx::query_scalar("SELECT phone_number FROM contact_phones WHERE contact_id = $1")
                .bind(contact_id)
                .fetch_all(&self.pool)
                .await?;
        Ok((emails.into_iter().collect(), phones.into_iter().collect()))
    }

    async fn hydrate(&self, row: ContactRow) -> Result<Contact> {
        let (emails, phone_numbers) = self.load_elements(row.id).await?;
        Ok(Contact {
            id: row.id,
            name: row.name,
            emails,
            phone_numbers,
            owner_id: row.owner_id,
        })
    }
}

#[async_trait]
impl BaseContactStore for PgContactStore {
    async fn find_by_owner_and_name(
        &self,
        owner_id: Uuid,
        name: &str,
    ) -> Result<Option<Contact>> {
        let row = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, owner_id FROM contacts WHERE owner_id = $1 AND name = $2",
        )
        .bind(owner_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, owner_id FROM contacts WHERE owner_id = $1 ORDER BY created_at",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        let mut contacts = Vec::with_capacity(rows.len());
        for row in rows {
            contacts.push(self.hydrate(row).await?);
        }
        Ok(contacts)
    }

    async fn save(&self, contact: Contact) -> Result<Contact> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO contacts (id, name, owner_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(contact.id)
        .bind(&contact.name)
        .bind(contact.owner_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM contact_emails WHERE contact_id = $1")
            .bind(contact.id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM contact_phones WHERE contact_id = $1")
            .bind(contact.id)
            .execute(&mut *tx)
            .await?;

        for email in &contact.emails {
            sqlx::query("INSERT INTO contact_emails (contact_id, email) VALUES ($1, $2)")
                .bind(contact.id)
                .bind(email)
                .execute(&mut *tx)
                .await?;
        }
        for phone in &contact.phone_numbers {
            sqlx::query("INSERT INTO contact_phones (contact_id, phone_number) VALUES ($1, $2)")
                .bind(contact.id)
                .bind(phone)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(contact)
    }

    async fn delete(&self, contact: &Contact) -> Result<()> {
        // Element rows go with the contact via ON DELETE CASCADE
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(contact.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
