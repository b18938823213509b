//! Fixed 2x2 thumbnail atlas.

pub(crate) mod composite;
pub(crate) mod grid;
pub(crate) mod packer;
