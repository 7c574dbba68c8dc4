use uuid::Uuid;

/// A registered login/credential pair - the authentication principal
///
/// The login is unique and immutable after registration. The hash is
/// opaque to everything except the credential hasher.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Identity {
    pub id: Uuid,
    pub login: String,
    pub password_hash: String,
}

impl Identity {
    pub fn new(login: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            login,
            password_hash,
        }
    }
}
