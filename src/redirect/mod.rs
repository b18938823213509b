//! Static redirect pages, one per catalog entry.

pub(crate) mod page;
