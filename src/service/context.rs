//! Context passed to operation handlers.
//!
//! Carries the decoded input and a reference to the store adapter.
//! Handlers reach everything they need through the context.

use serde_json::Value;

/// The context passed to every operation handler.
///
/// Generic over `S`, the store type, so handlers run against whatever
/// adapter the service was built with.
pub struct Context<'a, S> {
    /// Subject the request arrived on.
    subject: String,
    /// Structurally decoded JSON input.
    input: Value,
    /// Reference to the store adapter.
    store: &'a S,
}

impl<'a, S> Context<'a, S> {
    pub(crate) fn new(subject: String, input: Value, store: &'a S) -> Self {
        Self {
            subject,
            input,
            store,
        }
    }

    /// The subject this request was sent to.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The raw JSON input.
    pub fn raw_input(&self) -> &Value {
        &self.input
    }

    /// The store adapter.
    pub fn store(&self) -> &S {
        self.store
    }
}
