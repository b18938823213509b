//! Catalog derivation, ordering and serialization.

pub(crate) mod builder;
pub(crate) mod entry;
pub(crate) mod inventory;
