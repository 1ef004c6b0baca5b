//! Application service layer.
//!
//! Services hold the address book and turn user-level operations into
//! book calls and ready-to-print messages. The CLI layer talks to the book
//! only through them.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
