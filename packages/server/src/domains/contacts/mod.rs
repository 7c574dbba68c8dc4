// Contacts domain - owner-scoped directory with uniqueness invariants

pub mod directory;
pub mod errors;
pub mod models;
pub mod validation;

pub use directory::ContactDirectory;
pub use errors::{ConflictError, DirectoryError, ValidationError};
