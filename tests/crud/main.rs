//! CRUD integration tests — full path through client, bus, dispatcher,
//! handlers, and store.

mod support;

mod failures;
mod lifecycle;
mod validation;
