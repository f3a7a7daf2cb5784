//! The four user operations, one module per subject.
//!
//! Each module follows the handler convention described in
//! [`crate::service`]: a `SUBJECT` const, a typed `Input` with a
//! `decode` step yielding either the struct or a field-specific
//! validation error, and the `handle` function itself.

pub mod add_user;
pub mod delete_user;
pub mod get_user;
pub mod get_users;
