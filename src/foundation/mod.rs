pub(crate) mod config;
pub(crate) mod digest;
pub(crate) mod error;
pub(crate) mod output;
