// Crate-internal plumbing shared by every module.

pub mod error;
