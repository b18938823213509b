//! Item record discovery and parsing.

pub(crate) mod loader;
pub(crate) mod naming;
pub(crate) mod record;
