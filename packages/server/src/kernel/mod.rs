//! Kernel module - server infrastructure and dependencies.

pub mod hasher;
pub mod postgres;
pub mod stores;
pub mod test_dependencies;

pub use hasher::Sha256CredentialHasher;
pub use postgres::{PgContactStore, PgCredentialStore};
pub use stores::{BaseContactStore, BaseCredentialHasher, BaseCredentialStore};
pub use test_dependencies::{MockContactStore, MockCredentialStore};
