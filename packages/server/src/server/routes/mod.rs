pub mod auth;
pub mod contacts;
pub mod health;

pub use auth::{authenticate, hello, register};
pub use contacts::{add_contact, all_contacts, delete_contact, edit_contact, get_contact};
pub use health::health_handler;
