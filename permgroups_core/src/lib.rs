//! Shared models for the permission group binding: the entities returned by
//! the account-management API and the envelopes they arrive wrapped in.

pub mod api_models;
pub mod roles;
