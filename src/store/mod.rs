//! Store Module
//!
//! Durable CRUD access to the users table. Storage failures never escape a
//! store operation: they are logged and folded into an [`Outcome`].

pub mod manager;
pub mod outcome;

// Re-exports
pub use manager::Store;
pub use outcome::{Operation, Outcome};
